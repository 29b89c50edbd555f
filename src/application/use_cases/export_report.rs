use crate::application::dto::{ExportRequest, ReportResponse};
use crate::application::read_models::ReportReadModelBuilder;
use crate::obsolescence::services::MetadataGenerator;
use crate::ports::outbound::{ChartRenderer, ProgressReporter, ReportArtifact, ReportComposer};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const EXPORT_STEPS: usize = 3;

/// Identifies one export started on an [`ExportSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTicket(u64);

/// Latest-wins bookkeeping for report exports.
///
/// Every export takes a ticket when it starts; when it finishes, its result
/// is only delivered if no newer export was started in the meantime.
#[derive(Debug, Clone, Default)]
pub struct ExportSlot {
    latest: Arc<AtomicU64>,
}

impl ExportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new export, superseding any export still running
    pub fn begin(&self) -> ExportTicket {
        ExportTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: ExportTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Delivers a finished artifact unless its export was superseded
    pub fn complete(&self, ticket: ExportTicket, artifact: ReportArtifact) -> ExportOutcome {
        if self.is_current(ticket) {
            ExportOutcome::Completed(artifact)
        } else {
            ExportOutcome::Superseded
        }
    }
}

/// Result of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Completed(ReportArtifact),
    /// A newer export started before this one finished; its result is dropped
    Superseded,
}

impl ExportOutcome {
    pub fn into_artifact(self) -> Option<ReportArtifact> {
        match self {
            ExportOutcome::Completed(artifact) => Some(artifact),
            ExportOutcome::Superseded => None,
        }
    }
}

/// ExportReportUseCase - renders the chart and composes the report document
///
/// # Type Parameters
/// * `CR` - ChartRenderer implementation
/// * `RC` - ReportComposer implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportReportUseCase<CR, RC, PR> {
    chart_renderer: CR,
    composer: RC,
    progress_reporter: PR,
    slot: ExportSlot,
}

impl<CR, RC, PR> ExportReportUseCase<CR, RC, PR>
where
    CR: ChartRenderer,
    RC: ReportComposer,
    PR: ProgressReporter,
{
    pub fn new(chart_renderer: CR, composer: RC, progress_reporter: PR) -> Self {
        Self {
            chart_renderer,
            composer,
            progress_reporter,
            slot: ExportSlot::new(),
        }
    }

    /// Exports a computed report
    ///
    /// # Errors
    /// `ReportError::Render` when the chart or the document cannot be produced
    pub async fn execute(
        &self,
        response: &ReportResponse,
        request: ExportRequest,
    ) -> Result<ExportOutcome> {
        let ticket = self.slot.begin();

        self.progress_reporter
            .report_progress(0, EXPORT_STEPS, Some("Rendering chart"));
        let chart_image = if response.is_empty() {
            None
        } else {
            let chart = response.aggregation.chart_data();
            let image = self
                .chart_renderer
                .render(&chart)
                .map_err(|e| ReportError::Render {
                    artifact: "bar chart".to_string(),
                    details: format!("{:#}", e),
                })?;
            Some(image)
        };

        self.progress_reporter
            .report_progress(1, EXPORT_STEPS, Some("Preparing sections"));
        let metadata = MetadataGenerator::generate_default_metadata();
        let model = ReportReadModelBuilder::build(
            response,
            chart_image,
            request.analysis.as_deref(),
            &metadata,
        );

        self.progress_reporter
            .report_progress(2, EXPORT_STEPS, Some("Composing document"));
        let artifact = self
            .composer
            .compose(&model)
            .await
            .map_err(|e| ReportError::Render {
                artifact: "report document".to_string(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter
            .report_progress(EXPORT_STEPS, EXPORT_STEPS, Some("Done"));

        let outcome = self.slot.complete(ticket, artifact);
        match &outcome {
            ExportOutcome::Completed(_) => self
                .progress_reporter
                .report_completion("✅ Report document ready"),
            ExportOutcome::Superseded => self
                .progress_reporter
                .report("⏭️  Export superseded by a newer request, result dropped"),
        }
        Ok(outcome)
    }
}
