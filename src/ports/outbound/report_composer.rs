use crate::application::read_models::ReportReadModel;
use crate::shared::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Exported report document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Document as a downloadable `data:` URI
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Document content as text, replacing invalid UTF-8 sequences
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// ReportComposer port for laying out the final report document
///
/// The composer receives the fully prepared read model (title banner,
/// chart image, table rows and analysis) and produces the artifact.
#[async_trait]
pub trait ReportComposer: Send + Sync {
    /// Composes the report document
    ///
    /// # Errors
    /// Returns an error if layout or serialization fails
    async fn compose(&self, model: &ReportReadModel) -> Result<ReportArtifact>;
}

#[async_trait]
impl<T: ReportComposer + ?Sized> ReportComposer for Box<T> {
    async fn compose(&self, model: &ReportReadModel) -> Result<ReportArtifact> {
        (**self).compose(model).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_data_uri() {
        let artifact = ReportArtifact::new("text/markdown", b"# Report".to_vec());
        assert_eq!(artifact.to_data_uri(), "data:text/markdown;base64,IyBSZXBvcnQ=");
        assert_eq!(artifact.as_text(), "# Report");
    }
}
