/// Chart adapters for drawing the obsolescence bar chart
mod svg_bar_chart;

pub use svg_bar_chart::SvgBarChartRenderer;
