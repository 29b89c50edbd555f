use clap::Parser;
use obsolescence_report::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate obsolescence reports for IT components tracked in LeanIX
#[derive(Parser, Debug)]
#[command(name = "obsolescence-report")]
#[command(version)]
#[command(
    about = "Generate obsolescence reports for IT components tracked in LeanIX",
    long_about = None
)]
pub struct Args {
    /// Read the IT component catalog from a saved GraphQL response instead of a workspace
    #[arg(long, value_name = "FILE", conflicts_with = "base_url")]
    pub catalog: Option<PathBuf>,

    /// LeanIX workspace base URL (e.g. https://eu.leanix.net)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// LeanIX workspace API token
    #[arg(long, value_name = "TOKEN")]
    pub api_token: Option<String>,

    /// Report setup file providing category labels and colors
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// First day of the reporting window, YYYY-MM-DD (defaults to today)
    #[arg(short, long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Last day of the reporting window, YYYY-MM-DD (defaults to the end of next month)
    #[arg(short, long, value_name = "DATE")]
    pub end_date: Option<String>,

    /// Free-form analysis text for the Analysis section
    #[arg(short, long, conflicts_with = "analysis_file")]
    pub analysis: Option<String>,

    /// Read the analysis text from a file
    #[arg(long, value_name = "FILE")]
    pub analysis_file: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the document as a base64 `data:` URI instead of raw content
    #[arg(long)]
    pub data_uri: bool,

    /// Path to a config file (defaults to ./obsolescence-report.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["obsolescence-report", "--catalog", "catalog.json"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("catalog.json")));
        assert!(args.format.is_none());
        assert!(!args.data_uri);
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::try_parse_from([
            "obsolescence-report",
            "--base-url",
            "https://eu.leanix.net",
            "--api-token",
            "secret",
            "--setup",
            "setup.json",
            "-s",
            "2024-01-01",
            "-e",
            "2024-12-31",
            "-a",
            "Upgrade soon",
            "-f",
            "json",
            "-o",
            "report.json",
            "--data-uri",
        ])
        .unwrap();

        assert_eq!(args.base_url.as_deref(), Some("https://eu.leanix.net"));
        assert_eq!(args.api_token.as_deref(), Some("secret"));
        assert_eq!(args.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(args.end_date.as_deref(), Some("2024-12-31"));
        assert_eq!(args.analysis.as_deref(), Some("Upgrade soon"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert!(args.data_uri);
    }

    #[test]
    fn test_catalog_conflicts_with_base_url() {
        let result = Args::try_parse_from([
            "obsolescence-report",
            "--catalog",
            "catalog.json",
            "--base-url",
            "https://eu.leanix.net",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analysis_conflicts_with_analysis_file() {
        let result = Args::try_parse_from([
            "obsolescence-report",
            "-a",
            "text",
            "--analysis-file",
            "analysis.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["obsolescence-report", "-f", "pdf"]);
        assert!(result.is_err());
    }
}
