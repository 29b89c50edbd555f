use crate::shared::Result;

/// OutputPresenter port for presenting the exported report
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the report document is delivered.
pub trait OutputPresenter {
    /// Presents the report content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &[u8]) -> Result<()>;
}
