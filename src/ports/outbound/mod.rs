/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog API, file system, console, etc.).
pub mod catalog_fetcher;
pub mod category_metadata_source;
pub mod chart_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_composer;

pub use catalog_fetcher::{CatalogFetcher, IT_COMPONENTS_QUERY};
pub use category_metadata_source::CategoryMetadataSource;
pub use chart_renderer::{ChartImage, ChartRenderer};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_composer::{ReportArtifact, ReportComposer};
