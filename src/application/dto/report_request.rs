use crate::obsolescence::domain::DateWindow;

/// ReportRequest - input of the obsolescence computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Reporting window, exclusive on both ends
    pub window: DateWindow,
}

impl ReportRequest {
    pub fn new(window: DateWindow) -> Self {
        Self { window }
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new(DateWindow::starting_today())
    }
}
