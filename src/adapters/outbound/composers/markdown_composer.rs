use crate::application::read_models::{
    ChartView, ObsolescenceRowView, ReportReadModel, ANALYSIS_SECTION_TITLE,
    CHART_SECTION_TITLE, EMPTY_STATE_MESSAGE, NO_ANALYSIS_MESSAGE, TABLE_COLUMNS,
    TABLE_SECTION_TITLE,
};
use crate::ports::outbound::{ReportArtifact, ReportComposer};
use crate::shared::Result;
use async_trait::async_trait;

const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// Markdown table header for the category counts under the chart
const CATEGORY_TABLE_HEADER: &str = "| Category | IT Components |\n";
const CATEGORY_TABLE_SEPARATOR: &str = "|----------|---------------|\n";

/// MarkdownComposer adapter for rendering the report as a Markdown document
///
/// The chart image is embedded inline as a `data:` URI, followed by the
/// category counts so the numbers stay readable without an image viewer.
pub struct MarkdownComposer;

impl MarkdownComposer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_empty_state(output: &mut String) {
        output.push_str(&format!("_{}_\n\n", EMPTY_STATE_MESSAGE));
    }
}

/// Helper methods for rendering sections
impl MarkdownComposer {
    fn render_title(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str(&format!("# {}\n\n", model.title));
        output.push_str(&format!(
            "_**{}** to **{}**_\n\n",
            model.start_date, model.end_date
        ));
    }

    fn render_chart(&self, output: &mut String, chart: Option<&ChartView>) {
        output.push_str(&format!("## {}\n\n", CHART_SECTION_TITLE));

        let Some(chart) = chart else {
            Self::render_empty_state(output);
            return;
        };

        output.push_str(&format!(
            "![{}]({})\n\n",
            CHART_SECTION_TITLE,
            chart.image.to_data_uri()
        ));
        output.push_str(CATEGORY_TABLE_HEADER);
        output.push_str(CATEGORY_TABLE_SEPARATOR);
        for category in &chart.categories {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&category.label),
                category.count
            ));
        }
        output.push('\n');
    }

    fn render_table(&self, output: &mut String, rows: &[ObsolescenceRowView]) {
        output.push_str(&format!("## {}\n\n", TABLE_SECTION_TITLE));

        if rows.is_empty() {
            Self::render_empty_state(output);
            return;
        }

        output.push_str(&format!("| {} |\n", TABLE_COLUMNS.join(" | ")));
        let separators: Vec<String> = TABLE_COLUMNS
            .iter()
            .map(|column| "-".repeat(column.len() + 2))
            .collect();
        output.push_str(&format!("|{}|\n", separators.join("|")));

        for row in rows {
            let cells: Vec<String> = row
                .cells()
                .iter()
                .map(|cell| Self::escape_markdown_table_cell(cell))
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    fn render_analysis(&self, output: &mut String, analysis: Option<&str>) {
        output.push_str(&format!("## {}\n\n", ANALYSIS_SECTION_TITLE));
        match analysis {
            Some(text) => output.push_str(&format!("{}\n\n", text.trim_end())),
            None => output.push_str(&format!("_{}_\n\n", NO_ANALYSIS_MESSAGE)),
        }
    }

    fn render_footer(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str("---\n\n");
        output.push_str(&format!(
            "_Generated by {} {} on {} ({})_\n",
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.timestamp,
            model.metadata.report_id
        ));
    }
}

impl Default for MarkdownComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportComposer for MarkdownComposer {
    async fn compose(&self, model: &ReportReadModel) -> Result<ReportArtifact> {
        let mut output = String::new();

        self.render_title(&mut output, model);
        self.render_chart(&mut output, model.chart.as_ref());
        self.render_table(&mut output, &model.rows);
        self.render_analysis(&mut output, model.analysis.as_deref());
        self.render_footer(&mut output, model);

        Ok(ReportArtifact::new(MARKDOWN_MIME_TYPE, output.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{CategoryCountView, ReportMetadataView, REPORT_TITLE};
    use crate::ports::outbound::ChartImage;
    use pretty_assertions::assert_eq;

    fn create_test_read_model() -> ReportReadModel {
        ReportReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "obsolescence-report".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:test-123".to_string(),
            },
            title: REPORT_TITLE.to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            chart: Some(ChartView {
                image: ChartImage::new("image/svg+xml", b"<svg/>".to_vec()),
                categories: vec![CategoryCountView {
                    label: "Software".to_string(),
                    count: 1,
                }],
            }),
            rows: vec![ObsolescenceRowView {
                obsolescence_date: "2024-06-01".to_string(),
                category: "Software".to_string(),
                name: "Java 8".to_string(),
            }],
            analysis: Some("Plan the JDK upgrade.".to_string()),
        }
    }

    async fn compose_text(model: &ReportReadModel) -> String {
        let artifact = MarkdownComposer::new().compose(model).await.unwrap();
        assert_eq!(artifact.mime_type, "text/markdown");
        artifact.as_text().into_owned()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped = MarkdownComposer::escape_markdown_table_cell("Oracle | DB\n12c");
        assert_eq!(escaped, "Oracle \\| DB 12c");
    }

    #[tokio::test]
    async fn test_compose_full_report() {
        let markdown = compose_text(&create_test_read_model()).await;

        let expected_body = "\
# Obsolescence Report

_**2024-01-01** to **2024-12-31**_

## Obsolescences per IT Component Category

![Obsolescences per IT Component Category](data:image/svg+xml;base64,PHN2Zy8+)

| Category | IT Components |
|----------|---------------|
| Software | 1 |

## IT Component Obsolescences

| Obsolescence Date | Category | IT Component |
|-------------------|----------|--------------|
| 2024-06-01 | Software | Java 8 |

## Analysis

Plan the JDK upgrade.

---

_Generated by obsolescence-report 0.1.0 on 2024-01-01T00:00:00Z (urn:uuid:test-123)_
";
        assert_eq!(markdown, expected_body);
    }

    #[tokio::test]
    async fn test_compose_empty_report_shows_empty_state_twice() {
        let mut model = create_test_read_model();
        model.chart = None;
        model.rows.clear();

        let markdown = compose_text(&model).await;
        assert_eq!(
            markdown
                .matches("_No obsolete it components during this period..._")
                .count(),
            2
        );
        assert!(!markdown.contains("data:image"));
        assert!(!markdown.contains("| Obsolescence Date |"));
    }

    #[tokio::test]
    async fn test_compose_without_analysis() {
        let mut model = create_test_read_model();
        model.analysis = None;

        let markdown = compose_text(&model).await;
        assert!(markdown.contains("## Analysis\n\n_no comments_\n"));
    }

    #[tokio::test]
    async fn test_section_ordering() {
        let markdown = compose_text(&create_test_read_model()).await;

        let title = markdown.find("# Obsolescence Report").unwrap();
        let chart = markdown.find("## Obsolescences per IT Component Category").unwrap();
        let table = markdown.find("## IT Component Obsolescences").unwrap();
        let analysis = markdown.find("## Analysis").unwrap();
        assert!(title < chart && chart < table && table < analysis);
    }

    #[tokio::test]
    async fn test_table_cells_are_escaped() {
        let mut model = create_test_read_model();
        model.rows[0].name = "Oracle | DB".to_string();

        let markdown = compose_text(&model).await;
        assert!(markdown.contains("| 2024-06-01 | Software | Oracle \\| DB |"));
    }
}
