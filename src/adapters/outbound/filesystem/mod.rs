/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod report_setup;

pub use file_reader::{FileSystemReader, ReportSetupReader, SnapshotCatalogReader};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use report_setup::parse_report_setup;
