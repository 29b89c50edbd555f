//! Read models for the exported report
//!
//! View-optimized structs that carry exactly what the composers lay out.

pub mod report_read_model;
pub mod report_read_model_builder;

pub use report_read_model::{
    CategoryCountView, ChartView, ObsolescenceRowView, ReportMetadataView, ReportReadModel,
    ANALYSIS_SECTION_TITLE, CHART_SECTION_TITLE, EMPTY_STATE_MESSAGE, NO_ANALYSIS_MESSAGE,
    REPORT_TITLE, TABLE_COLUMNS, TABLE_SECTION_TITLE,
};
pub use report_read_model_builder::ReportReadModelBuilder;
