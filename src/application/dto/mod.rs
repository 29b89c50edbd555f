/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod catalog_snapshot;
mod export_request;
mod output_format;
mod report_request;
mod report_response;

pub use catalog_snapshot::CatalogSnapshot;
pub use export_request::ExportRequest;
pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
pub use report_response::ReportResponse;
