mod cli;
mod config;

use chrono::{Local, NaiveDate};
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use obsolescence_report::adapters::outbound::chart::SvgBarChartRenderer;
use obsolescence_report::adapters::outbound::console::StderrProgressReporter;
use obsolescence_report::adapters::outbound::filesystem::{
    FileSystemReader, ReportSetupReader, SnapshotCatalogReader,
};
use obsolescence_report::adapters::outbound::network::LeanIxCatalogFetcher;
use obsolescence_report::application::dto::{ExportRequest, OutputFormat, ReportRequest};
use obsolescence_report::application::factories::{ComposerFactory, PresenterFactory};
use obsolescence_report::application::use_cases::{ExportReportUseCase, GenerateReportUseCase};
use obsolescence_report::obsolescence::domain::{parse_date, DateWindow};
use obsolescence_report::ports::outbound::CatalogFetcher;
use obsolescence_report::shared::error::{ExitCode, ReportError};
use obsolescence_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let settings = Settings::resolve(args, config, Local::now().date_naive())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Create adapters (Dependency Injection)
    let catalog_fetcher = settings.catalog_source.create_fetcher()?;
    let category_source = ReportSetupReader::new(settings.setup.clone());

    let generate = GenerateReportUseCase::new(
        catalog_fetcher,
        category_source,
        StderrProgressReporter::new(),
    );
    let response = runtime.block_on(generate.execute(ReportRequest::new(settings.window)))?;

    let analysis = match &settings.analysis {
        Analysis::Text(text) => Some(text.clone()),
        Analysis::File(path) => Some(FileSystemReader::new().read_text(path)?),
        Analysis::None => None,
    };

    eprintln!("{}", ComposerFactory::progress_message(settings.format));

    let export = ExportReportUseCase::new(
        SvgBarChartRenderer::new(),
        ComposerFactory::create(settings.format),
        StderrProgressReporter::new(),
    );
    let artifact = runtime
        .block_on(export.execute(&response, ExportRequest::new(analysis)))?
        .into_artifact()
        .ok_or_else(|| anyhow::anyhow!("The report export was superseded before it completed"))?;

    let content = if settings.data_uri {
        format!("{}\n", artifact.to_data_uri()).into_bytes()
    } else {
        artifact.bytes
    };

    let presenter = PresenterFactory::create(PresenterFactory::presenter_type_for(settings.output));
    presenter.present(&content)?;

    Ok(())
}

/// Where the IT component catalog is read from
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogSource {
    Snapshot(PathBuf),
    Workspace { base_url: String, api_token: String },
}

impl CatalogSource {
    fn create_fetcher(&self) -> Result<Box<dyn CatalogFetcher>> {
        Ok(match self {
            CatalogSource::Snapshot(path) => Box::new(SnapshotCatalogReader::new(path.clone())),
            CatalogSource::Workspace {
                base_url,
                api_token,
            } => Box::new(LeanIxCatalogFetcher::new(base_url, api_token)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Analysis {
    Text(String),
    File(PathBuf),
    None,
}

/// Command-line arguments merged over the config file
#[derive(Debug)]
struct Settings {
    catalog_source: CatalogSource,
    setup: Option<PathBuf>,
    window: DateWindow,
    analysis: Analysis,
    format: OutputFormat,
    output: Option<PathBuf>,
    data_uri: bool,
}

impl Settings {
    /// Merges the arguments over the config file; arguments win
    fn resolve(args: Args, config: ConfigFile, today: NaiveDate) -> Result<Self> {
        let format = args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default();

        let catalog_source = Self::resolve_catalog_source(&args, &config)?;

        let window = resolve_window(
            args.start_date.as_deref().or(config.start_date.as_deref()),
            args.end_date.as_deref().or(config.end_date.as_deref()),
            today,
        )?;

        let analysis = match (args.analysis, args.analysis_file) {
            (Some(text), _) => Analysis::Text(text),
            (None, Some(path)) => Analysis::File(path),
            (None, None) => config.analysis_file.map_or(Analysis::None, Analysis::File),
        };

        Ok(Self {
            catalog_source,
            setup: args.setup.or(config.setup),
            window,
            analysis,
            format,
            output: args.output.or(config.output),
            data_uri: args.data_uri,
        })
    }

    fn resolve_catalog_source(args: &Args, config: &ConfigFile) -> Result<CatalogSource> {
        // A workspace given on the command line overrides a snapshot from the config file
        let catalog = if args.base_url.is_some() {
            None
        } else {
            args.catalog.clone().or_else(|| config.catalog.clone())
        };

        if let Some(path) = catalog {
            return Ok(CatalogSource::Snapshot(path));
        }

        let base_url = args.base_url.clone().or_else(|| config.base_url.clone());
        let api_token = args.api_token.clone().or_else(|| config.api_token.clone());

        match (base_url, api_token) {
            (Some(base_url), Some(api_token)) => Ok(CatalogSource::Workspace {
                base_url,
                api_token,
            }),
            (Some(_), None) => Err(ReportError::Validation {
                message: "--api-token is required when reading from a LeanIX workspace"
                    .to_string(),
            }
            .into()),
            (None, _) => Err(ReportError::Validation {
                message: "No catalog source given. Use --catalog <FILE> or --base-url with --api-token"
                    .to_string(),
            }
            .into()),
        }
    }
}

/// Builds the reporting window; a missing start is today and a missing end
/// is the last day of the month after the start.
fn resolve_window(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> std::result::Result<DateWindow, ReportError> {
    let start = match start {
        Some(value) => parse_date(value, "window start date")?,
        None => today,
    };
    let end = match end {
        Some(value) => parse_date(value, "window end date")?,
        None => DateWindow::default_from(start).end(),
    };
    DateWindow::new(start, end)
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ReportError>() {
        Some(ReportError::Validation { .. }) | Some(ReportError::InvalidDateWindow { .. }) => {
            ExitCode::InvalidArguments
        }
        Some(ReportError::MalformedDate { context, .. }) if context.starts_with("window") => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}
