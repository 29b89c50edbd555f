use crate::obsolescence::domain::ChartData;
use crate::ports::outbound::{ChartImage, ChartRenderer};
use crate::shared::Result;
use std::fmt::Write;

const SVG_MIME_TYPE: &str = "image/svg+xml";
const DEFAULT_BAR_COLOR: &str = "#9e9e9e";

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 320.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 48.0;
const MARGIN_LEFT: f64 = 48.0;
const BAR_FILL_RATIO: f64 = 0.6;

/// SvgBarChartRenderer adapter drawing the category counts as an SVG bar chart
///
/// One bar per category in chart order. The y-axis starts at zero and is
/// ticked every whole component. There is no legend; labels sit under the bars.
pub struct SvgBarChartRenderer;

impl SvgBarChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn baseline() -> f64 {
        HEIGHT - MARGIN_BOTTOM
    }

    fn write_axes(svg: &mut String, y_max: usize) -> std::fmt::Result {
        let baseline = Self::baseline();
        let step = Self::plot_height() / y_max as f64;

        for tick in 0..=y_max {
            let y = baseline - step * tick as f64;
            writeln!(
                svg,
                r##"  <line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#e0e0e0" stroke-width="1"/>"##,
                left = MARGIN_LEFT,
                right = WIDTH - MARGIN_RIGHT,
                y = y
            )?;
            writeln!(
                svg,
                r#"  <text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="end" dominant-baseline="middle">{tick}</text>"#,
                x = MARGIN_LEFT - 6.0,
                y = y,
                tick = tick
            )?;
        }

        writeln!(
            svg,
            r##"  <line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#424242" stroke-width="1"/>"##,
            x = MARGIN_LEFT,
            top = MARGIN_TOP,
            bottom = baseline
        )?;
        writeln!(
            svg,
            r##"  <line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#424242" stroke-width="1"/>"##,
            left = MARGIN_LEFT,
            right = WIDTH - MARGIN_RIGHT,
            y = baseline
        )
    }

    fn write_bars(svg: &mut String, chart: &ChartData, y_max: usize) -> std::fmt::Result {
        if chart.is_empty() {
            return Ok(());
        }

        let baseline = Self::baseline();
        let slot = Self::plot_width() / chart.bars.len() as f64;
        let bar_width = slot * BAR_FILL_RATIO;

        for (index, bar) in chart.bars.iter().enumerate() {
            let height = Self::plot_height() * bar.value as f64 / y_max as f64;
            let x = MARGIN_LEFT + slot * index as f64 + (slot - bar_width) / 2.0;
            let fill = bar.color.as_deref().unwrap_or(DEFAULT_BAR_COLOR);

            writeln!(
                svg,
                r#"  <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"><title>{label}: {value}</title></rect>"#,
                x = x,
                y = baseline - height,
                w = bar_width,
                h = height,
                fill = escape_xml(fill),
                label = escape_xml(&bar.label),
                value = bar.value
            )?;
            writeln!(
                svg,
                r#"  <text x="{x:.1}" y="{y:.1}" font-size="12" text-anchor="middle">{label}</text>"#,
                x = x + bar_width / 2.0,
                y = baseline + 18.0,
                label = escape_xml(&bar.label)
            )?;
        }

        Ok(())
    }
}

impl Default for SvgBarChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for SvgBarChartRenderer {
    fn render(&self, chart: &ChartData) -> Result<ChartImage> {
        let y_max = chart.max_value().max(1);
        let mut svg = String::new();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        )?;
        writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        Self::write_axes(&mut svg, y_max)?;
        Self::write_bars(&mut svg, chart, y_max)?;
        svg.push_str("</svg>\n");

        Ok(ChartImage::new(SVG_MIME_TYPE, svg.into_bytes()))
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
