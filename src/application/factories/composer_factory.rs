use crate::adapters::outbound::composers::{DocumentDefinitionComposer, MarkdownComposer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportComposer;

/// Factory for creating report composers
///
/// Selects the composer adapter for the requested output format.
pub struct ComposerFactory;

impl ComposerFactory {
    /// Creates a composer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use obsolescence_report::application::dto::OutputFormat;
    /// use obsolescence_report::application::factories::ComposerFactory;
    ///
    /// let composer = ComposerFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportComposer> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownComposer::new()),
            OutputFormat::Json => Box::new(DocumentDefinitionComposer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use obsolescence_report::application::dto::OutputFormat;
    /// use obsolescence_report::application::factories::ComposerFactory;
    ///
    /// let message = ComposerFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON document definition...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Json => "📝 Generating JSON document definition...",
        }
    }
}
