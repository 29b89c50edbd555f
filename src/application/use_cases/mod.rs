/// Use cases module containing application business logic orchestration
mod export_report;
mod generate_report;

pub use export_report::{ExportOutcome, ExportReportUseCase, ExportSlot, ExportTicket};
pub use generate_report::GenerateReportUseCase;
