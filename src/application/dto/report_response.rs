use crate::obsolescence::domain::{DateWindow, ObsoleteComponent};
use crate::obsolescence::services::CategoryAggregation;

/// ReportResponse - result of one obsolescence computation
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResponse {
    pub window: DateWindow,
    /// Obsolete components sorted by obsolescence date
    pub obsolete_components: Vec<ObsoleteComponent>,
    /// Per-category grouping feeding the bar chart
    pub aggregation: CategoryAggregation,
    /// Number of components in the catalog snapshot
    pub catalog_size: usize,
}

impl ReportResponse {
    pub fn new(
        window: DateWindow,
        obsolete_components: Vec<ObsoleteComponent>,
        aggregation: CategoryAggregation,
        catalog_size: usize,
    ) -> Self {
        Self {
            window,
            obsolete_components,
            aggregation,
            catalog_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.obsolete_components.is_empty()
    }
}
