//! Builder for constructing ReportReadModel from a computed report

use super::report_read_model::{
    CategoryCountView, ChartView, ObsolescenceRowView, ReportMetadataView, ReportReadModel,
    REPORT_TITLE,
};
use crate::application::dto::ReportResponse;
use crate::obsolescence::domain::{ReportMetadata, DATE_FORMAT};
use crate::ports::outbound::ChartImage;

pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model of an export
    ///
    /// # Arguments
    /// * `response` - Computed report (filtered components and aggregation)
    /// * `chart_image` - Rendered chart; ignored when nothing is obsolete
    /// * `analysis` - Free-text analysis; blank text counts as none
    /// * `metadata` - Generation metadata of this export
    pub fn build(
        response: &ReportResponse,
        chart_image: Option<ChartImage>,
        analysis: Option<&str>,
        metadata: &ReportMetadata,
    ) -> ReportReadModel {
        ReportReadModel {
            metadata: Self::build_metadata(metadata),
            title: REPORT_TITLE.to_string(),
            start_date: response.window.start().format(DATE_FORMAT).to_string(),
            end_date: response.window.end().format(DATE_FORMAT).to_string(),
            chart: Self::build_chart(response, chart_image),
            rows: Self::build_rows(response),
            analysis: analysis
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_chart(response: &ReportResponse, image: Option<ChartImage>) -> Option<ChartView> {
        if response.is_empty() {
            return None;
        }

        let categories = response
            .aggregation
            .iter()
            .map(|aggregate| CategoryCountView {
                label: aggregate.label().to_string(),
                count: aggregate.count(),
            })
            .collect();

        image.map(|image| ChartView { image, categories })
    }

    fn build_rows(response: &ReportResponse) -> Vec<ObsolescenceRowView> {
        response
            .obsolete_components
            .iter()
            .map(|component| ObsolescenceRowView {
                obsolescence_date: component.formatted_obsolescence_date(),
                category: component.category.label.clone(),
                name: component.name.clone(),
            })
            .collect()
    }
}
