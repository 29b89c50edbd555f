/// Mock implementations for testing
mod mock_catalog_fetcher;
mod mock_category_source;
mod mock_progress_reporter;

pub use mock_catalog_fetcher::MockCatalogFetcher;
pub use mock_category_source::MockCategorySource;
pub use mock_progress_reporter::MockProgressReporter;
