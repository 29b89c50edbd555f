//! obsolescence-report - obsolescence reports for IT components tracked in LeanIX
//!
//! This library finds the IT components whose end of life falls inside a
//! reporting window, groups them by category and exports a report with a
//! bar chart, a table and an analysis section. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`obsolescence`): The obsolescence filter, the category
//!   aggregator and their value objects
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use obsolescence_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let catalog = SnapshotCatalogReader::new(PathBuf::from("catalog.json"));
//! let setup = ReportSetupReader::new(Some(PathBuf::from("setup.json")));
//!
//! // Compute the report
//! let generate = GenerateReportUseCase::new(catalog, setup, StderrProgressReporter::new());
//! let window = DateWindow::parse("2024-01-01", "2024-12-31")?;
//! let response = generate.execute(ReportRequest::new(window)).await?;
//!
//! // Export it as Markdown
//! let export = ExportReportUseCase::new(
//!     SvgBarChartRenderer::new(),
//!     MarkdownComposer::new(),
//!     StderrProgressReporter::new(),
//! );
//! let outcome = export.execute(&response, ExportRequest::new(None)).await?;
//! if let Some(artifact) = outcome.into_artifact() {
//!     StdoutPresenter::new().present(&artifact.bytes)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod obsolescence;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::chart::SvgBarChartRenderer;
    pub use crate::adapters::outbound::composers::{DocumentDefinitionComposer, MarkdownComposer};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, ReportSetupReader, SnapshotCatalogReader,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::LeanIxCatalogFetcher;
    pub use crate::application::dto::{
        ExportRequest, OutputFormat, ReportRequest, ReportResponse,
    };
    pub use crate::application::use_cases::{
        ExportOutcome, ExportReportUseCase, GenerateReportUseCase,
    };
    pub use crate::obsolescence::domain::{
        CategoryDescriptor, CategoryMetadataIndex, DateWindow, ItComponent, ObsoleteComponent,
    };
    pub use crate::obsolescence::services::{CategoryAggregation, CategoryAggregator, ObsolescenceFilter};
    pub use crate::ports::outbound::{
        CatalogFetcher, CategoryMetadataSource, ChartRenderer, OutputPresenter, ProgressReporter,
        ReportArtifact, ReportComposer,
    };
    pub use crate::shared::error::ReportError;
    pub use crate::shared::Result;
}
