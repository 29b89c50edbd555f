use crate::application::dto::{CatalogSnapshot, ReportRequest, ReportResponse};
use crate::obsolescence::domain::ItComponent;
use crate::obsolescence::services::{CategoryAggregator, ObsolescenceFilter};
use crate::ports::outbound::{CatalogFetcher, CategoryMetadataSource, ProgressReporter};
use crate::shared::error::ReportError;
use crate::shared::in_flight::InFlightCounter;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// GenerateReportUseCase - fetches the catalog and computes the obsolescence report
///
/// # Type Parameters
/// * `CF` - CatalogFetcher implementation
/// * `CMS` - CategoryMetadataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<CF, CMS, PR> {
    catalog_fetcher: CF,
    category_source: CMS,
    progress_reporter: PR,
    in_flight: InFlightCounter,
}

impl<CF, CMS, PR> GenerateReportUseCase<CF, CMS, PR>
where
    CF: CatalogFetcher,
    CMS: CategoryMetadataSource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(catalog_fetcher: CF, category_source: CMS, progress_reporter: PR) -> Self {
        Self {
            catalog_fetcher,
            category_source,
            progress_reporter,
            in_flight: InFlightCounter::new(),
        }
    }

    /// Handle on the number of catalog requests currently in flight
    pub fn in_flight(&self) -> InFlightCounter {
        self.in_flight.clone()
    }

    /// Fetches the catalog and computes the report for the requested window
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let snapshot = self.load_catalog().await?;
        self.compute(&snapshot, &request)
    }

    /// Loads the IT component catalog and the category metadata
    ///
    /// # Errors
    /// `ReportError::Fetch` when either source fails
    pub async fn load_catalog(&self) -> Result<CatalogSnapshot> {
        let components = self.fetch_components().await?;

        let categories = self
            .category_source
            .load_category_metadata()
            .map_err(|e| ReportError::Fetch {
                source_name: "report setup".to_string(),
                details: format!("{:#}", e),
            })?;

        if categories.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No category metadata available. Categories are shown by their raw code.",
            );
        }

        Ok(CatalogSnapshot::new(components, categories))
    }

    /// Applies a date window to an already loaded catalog
    ///
    /// # Errors
    /// `ReportError::MalformedDate` when an end-of-life date cannot be parsed
    pub fn compute(
        &self,
        snapshot: &CatalogSnapshot,
        request: &ReportRequest,
    ) -> Result<ReportResponse> {
        self.progress_reporter.report(&format!(
            "🔎 Looking for end of life between {}...",
            request.window
        ));

        let obsolete =
            ObsolescenceFilter::filter(&snapshot.components, &request.window, &snapshot.categories)?;
        let aggregation = CategoryAggregator::aggregate(&obsolete);

        self.progress_reporter.report(&format!(
            "✅ Found {} obsolete IT component(s) in {} categor{}",
            obsolete.len(),
            aggregation.len(),
            if aggregation.len() == 1 { "y" } else { "ies" }
        ));

        Ok(ReportResponse::new(
            request.window,
            obsolete,
            aggregation,
            snapshot.components.len(),
        ))
    }

    /// Fetches the IT components while holding an in-flight guard
    async fn fetch_components(&self) -> Result<Vec<ItComponent>> {
        let _guard = self.in_flight.enter();
        let source_name = self.catalog_fetcher.source_name();

        self.progress_reporter
            .report(&format!("📡 Fetching IT components from: {}", source_name));

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("   {spinner:.green} {msg}")?);
        spinner.set_message("Waiting for the catalog...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let fetched = self.catalog_fetcher.fetch_it_components().await;
        spinner.finish_and_clear();

        let components = fetched.map_err(|e| ReportError::Fetch {
            source_name,
            details: format!("{:#}", e),
        })?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} IT component(s)", components.len()));

        Ok(components)
    }
}

#[cfg(test)]
mod tests;
