//! Report read model
//!
//! The four fixed sections of the obsolescence report, already resolved to
//! display strings.

use crate::ports::outbound::ChartImage;

pub const REPORT_TITLE: &str = "Obsolescence Report";
pub const CHART_SECTION_TITLE: &str = "Obsolescences per IT Component Category";
pub const TABLE_SECTION_TITLE: &str = "IT Component Obsolescences";
pub const ANALYSIS_SECTION_TITLE: &str = "Analysis";

/// Shown in both the chart and the table section when nothing is obsolete
pub const EMPTY_STATE_MESSAGE: &str = "No obsolete it components during this period...";

/// Shown in the analysis section when no analysis was written
pub const NO_ANALYSIS_MESSAGE: &str = "no comments";

pub const TABLE_COLUMNS: [&str; 3] = ["Obsolescence Date", "Category", "IT Component"];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// `None` renders the empty state in the chart section
    pub chart: Option<ChartView>,
    /// Empty rows render the empty state in the table section
    pub rows: Vec<ObsolescenceRowView>,
    /// `None` renders the "no comments" placeholder
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub image: ChartImage,
    pub categories: Vec<CategoryCountView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCountView {
    pub label: String,
    pub count: usize,
}

/// One table row, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsolescenceRowView {
    pub obsolescence_date: String,
    pub category: String,
    pub name: String,
}

impl ObsolescenceRowView {
    pub fn cells(&self) -> [&str; 3] {
        [&self.obsolescence_date, &self.category, &self.name]
    }
}
