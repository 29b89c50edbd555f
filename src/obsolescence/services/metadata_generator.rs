use crate::obsolescence::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for stamping exported reports
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates report metadata with current timestamp and a unique report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates report metadata for this tool, versioned from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
