use crate::application::read_models::{
    ChartView, ObsolescenceRowView, ReportReadModel, ANALYSIS_SECTION_TITLE,
    CHART_SECTION_TITLE, EMPTY_STATE_MESSAGE, NO_ANALYSIS_MESSAGE, TABLE_COLUMNS,
    TABLE_SECTION_TITLE,
};
use crate::ports::outbound::{ReportArtifact, ReportComposer};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

const JSON_MIME_TYPE: &str = "application/json";

/// Key of the chart under the document's `images` table
const CHART_IMAGE_KEY: &str = "barChart";

/// One inch, in points
const PAGE_MARGIN_POINTS: u32 = 72;

/// DocumentDefinitionComposer adapter producing a page-layout document definition
///
/// The output is the JSON document definition consumed by pdfmake-style
/// PDF engines: A4 portrait, one-inch margins, a title block followed by
/// three sections, and the chart registered in the `images` table.
pub struct DocumentDefinitionComposer;

impl DocumentDefinitionComposer {
    pub fn new() -> Self {
        Self
    }

    fn empty_state() -> Value {
        json!({ "text": EMPTY_STATE_MESSAGE, "italics": true, "alignment": "center" })
    }

    fn section(title: &str, body: Value) -> Value {
        json!({
            "style": "section",
            "stack": [
                { "text": title, "style": "subheader" },
                body
            ]
        })
    }

    fn title_block(model: &ReportReadModel) -> Value {
        json!({
            "style": "titleBlock",
            "stack": [
                { "text": model.title, "style": "header" },
                {
                    "fontSize": 10,
                    "margin": [0, 15],
                    "italics": true,
                    "text": [
                        { "text": model.start_date, "bold": true },
                        " to ",
                        { "text": model.end_date, "bold": true }
                    ]
                }
            ]
        })
    }

    fn chart_body(chart: Option<&ChartView>) -> Value {
        match chart {
            Some(_) => json!({ "image": CHART_IMAGE_KEY, "fit": [420, 200] }),
            None => Self::empty_state(),
        }
    }

    fn table_body(rows: &[ObsolescenceRowView]) -> Value {
        if rows.is_empty() {
            return Self::empty_state();
        }

        let mut body = vec![json!(TABLE_COLUMNS)];
        body.extend(rows.iter().map(|row| json!(row.cells())));

        json!({
            "table": {
                "widths": ["auto", "auto", "*"],
                "headerRows": 1,
                "body": body
            }
        })
    }

    fn analysis_body(analysis: Option<&str>) -> Value {
        match analysis {
            Some(text) => json!({ "text": text, "alignment": "justify" }),
            None => json!({ "text": NO_ANALYSIS_MESSAGE, "alignment": "center", "italics": true }),
        }
    }

    fn images(chart: Option<&ChartView>) -> Value {
        let mut images = Map::new();
        if let Some(chart) = chart {
            images.insert(
                CHART_IMAGE_KEY.to_string(),
                Value::String(chart.image.to_data_uri()),
            );
        }
        Value::Object(images)
    }

    /// Builds the complete document definition
    fn document_definition(model: &ReportReadModel) -> Value {
        json!({
            "info": {
                "title": model.title,
                "subject": format!("{} to {}", model.start_date, model.end_date),
                "creator": format!("{} {}", model.metadata.tool_name, model.metadata.tool_version),
                "creationDate": model.metadata.timestamp,
                "keywords": model.metadata.report_id
            },
            "pageSize": "A4",
            "pageOrientation": "portrait",
            "pageMargins": PAGE_MARGIN_POINTS,
            "content": [
                Self::title_block(model),
                Self::section(CHART_SECTION_TITLE, Self::chart_body(model.chart.as_ref())),
                Self::section(TABLE_SECTION_TITLE, Self::table_body(&model.rows)),
                Self::section(ANALYSIS_SECTION_TITLE, Self::analysis_body(model.analysis.as_deref()))
            ],
            "images": Self::images(model.chart.as_ref()),
            "defaultStyle": { "font": "Roboto", "fontSize": 9 },
            "styles": {
                "titleBlock": { "alignment": "center", "margin": [0, 0, 0, 40] },
                "header": { "fontSize": 18, "bold": true, "alignment": "center" },
                "subheader": { "fontSize": 15, "bold": true, "alignment": "center", "margin": [0, 0, 0, 20] },
                "section": { "margin": [0, 0, 0, 50] }
            }
        })
    }
}

impl Default for DocumentDefinitionComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportComposer for DocumentDefinitionComposer {
    async fn compose(&self, model: &ReportReadModel) -> Result<ReportArtifact> {
        let document = Self::document_definition(model);
        let bytes = serde_json::to_vec_pretty(&document)?;
        Ok(ReportArtifact::new(JSON_MIME_TYPE, bytes))
    }
}
