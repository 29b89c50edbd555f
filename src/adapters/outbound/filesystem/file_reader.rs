use super::report_setup::parse_report_setup;
use crate::adapters::outbound::catalog_response::parse_catalog_response;
use crate::obsolescence::domain::{CategoryMetadataIndex, ItComponent};
use crate::ports::outbound::{CatalogFetcher, CategoryMetadataSource};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading input files
///
/// Every file the tool reads (catalog snapshot, report setup, analysis
/// text) goes through the same checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| ReportError::FileRead {
            path: path.to_path_buf(),
            details,
        };

        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| read_error(e.to_string()))?;

        if metadata.is_symlink() {
            return Err(read_error(
                "Security: the file is a symbolic link. For security reasons, symbolic links are not allowed."
                    .to_string(),
            )
            .into());
        }

        if !metadata.is_file() {
            return Err(read_error("Not a regular file".to_string()).into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(read_error(format!(
                "Security: the file is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, MAX_FILE_SIZE
            ))
            .into());
        }

        fs::read_to_string(path).map_err(|e| read_error(e.to_string()).into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

/// SnapshotCatalogReader adapter reading a saved `allFactSheets` response
///
/// Lets a report be produced offline from a catalog exported earlier.
pub struct SnapshotCatalogReader {
    path: PathBuf,
    reader: FileSystemReader,
}

impl SnapshotCatalogReader {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            reader: FileSystemReader::new(),
        }
    }
}

#[async_trait]
impl CatalogFetcher for SnapshotCatalogReader {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>> {
        let content = self.reader.read_text(&self.path)?;
        parse_catalog_response(&content)
    }
}

/// ReportSetupReader adapter reading category metadata from a report setup file
///
/// Without a path, an empty lookup table is returned and categories are
/// shown by their raw code.
pub struct ReportSetupReader {
    path: Option<PathBuf>,
    reader: FileSystemReader,
}

impl ReportSetupReader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            reader: FileSystemReader::new(),
        }
    }
}

impl CategoryMetadataSource for ReportSetupReader {
    fn load_category_metadata(&self) -> Result<CategoryMetadataIndex> {
        match &self.path {
            Some(path) => {
                let content = self.reader.read_text(path)?;
                parse_report_setup(&content)
            }
            None => Ok(CategoryMetadataIndex::default()),
        }
    }
}
