/// ExportRequest - user input needed to export a computed report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// Free-text analysis; blank text renders the "no comments" placeholder
    pub analysis: Option<String>,
}

impl ExportRequest {
    pub fn new(analysis: Option<String>) -> Self {
        Self { analysis }
    }
}
