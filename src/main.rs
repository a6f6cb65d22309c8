mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use pkgcrit::adapters::outbound::console::StderrProgressReporter;
use pkgcrit::adapters::outbound::RoutingIndexSource;
use pkgcrit::application::dto::{AnalysisRequest, OutputFormat};
use pkgcrit::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pkgcrit::application::read_models::CriticalityReadModelBuilder;
use pkgcrit::application::use_cases::AnalyzeIndexUseCase;
use pkgcrit::config::{self, ConfigFile};
use pkgcrit::criticality::policies::{
    AlternativePolicy, AnalysisOptions, IngestOptions, PageRankParams, DEFAULT_DEPENDENCY_FIELD,
};
use pkgcrit::ports::outbound::IndexLocation;
use pkgcrit::shared::error::ExitCode;
use pkgcrit::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Index read when neither the CLI nor the config names one
const DEFAULT_INDEX: &str = "Packages";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Structured logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Everything a run needs after merging CLI, config file and defaults
#[derive(Debug)]
struct Settings {
    request: AnalysisRequest,
    format: OutputFormat,
    output: Option<PathBuf>,
    graph: Option<PathBuf>,
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let quiet = args.quiet;
    let settings = resolve_settings(args, config.unwrap_or_default())?;
    tracing::debug!(?settings, "settings resolved");

    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = AnalyzeIndexUseCase::new(RoutingIndexSource::new()?, progress_reporter);
    let response = use_case.execute(settings.request).await?;

    let model = CriticalityReadModelBuilder::build(&response);

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let report = FormatterFactory::create(settings.format).format(&model)?;
    PresenterFactory::create(PresenterType::from(settings.output)).present(&report)?;

    if let Some(graph_path) = settings.graph {
        let dot = FormatterFactory::create_graph().format(&model)?;
        PresenterFactory::create(PresenterType::File(graph_path)).present(&dot)?;
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// CLI flags override config values, which override defaults
fn resolve_settings(args: Args, config: ConfigFile) -> Result<Settings> {
    let index = args
        .index
        .or_else(|| config.index.clone())
        .unwrap_or_else(|| DEFAULT_INDEX.to_string());

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    let dependency_fields = if !args.dependency_fields.is_empty() {
        args.dependency_fields
    } else {
        config
            .dependency_fields
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_DEPENDENCY_FIELD.to_string()])
    };

    let alternative_policy = if args.all_alternatives {
        AlternativePolicy::AllAlternatives
    } else {
        config.alternative_policy()?.unwrap_or_default()
    };

    let defaults = PageRankParams::default();
    let page_rank_config = config.page_rank.unwrap_or_default();
    let page_rank = PageRankParams::new(
        page_rank_config
            .damping_factor
            .unwrap_or(defaults.damping_factor),
        page_rank_config.iterations.unwrap_or(defaults.iterations),
    )?;

    let request = AnalysisRequest::new(IndexLocation::parse(&index))
        .with_ingest_options(IngestOptions::new(dependency_fields, alternative_policy)?)
        .with_analysis_options(AnalysisOptions::new(
            args.workers.or(config.workers),
            page_rank,
        )?);

    Ok(Settings {
        request,
        format,
        output: args.output,
        graph: args.graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["pkgcrit"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(args(&[]), ConfigFile::default()).unwrap();

        assert_eq!(
            settings.request.location,
            IndexLocation::Path(PathBuf::from("Packages"))
        );
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.request.ingest.dependency_fields(), ["Depends".to_string()]);
        assert_eq!(
            settings.request.ingest.alternative_policy(),
            AlternativePolicy::FirstAlternative
        );
        assert_eq!(settings.request.analysis.workers(), None);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_config_values_apply() {
        let config = ConfigFile {
            index: Some("http://mirror/Packages.gz".to_string()),
            format: Some("json".to_string()),
            dependency_fields: Some(vec!["Pre-Depends".to_string()]),
            alternatives: Some("all".to_string()),
            workers: Some(3),
            ..Default::default()
        };
        let settings = resolve_settings(args(&[]), config).unwrap();

        assert!(matches!(settings.request.location, IndexLocation::Url(_)));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(
            settings.request.ingest.dependency_fields(),
            ["Pre-Depends".to_string()]
        );
        assert_eq!(
            settings.request.ingest.alternative_policy(),
            AlternativePolicy::AllAlternatives
        );
        assert_eq!(settings.request.analysis.workers(), Some(3));
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            index: Some("from-config/Packages".to_string()),
            format: Some("json".to_string()),
            dependency_fields: Some(vec!["Pre-Depends".to_string()]),
            workers: Some(3),
            ..Default::default()
        };
        let settings = resolve_settings(
            args(&["-i", "cli/Packages", "-f", "csv", "--dependency-field", "Depends", "-j", "1"]),
            config,
        )
        .unwrap();

        assert_eq!(
            settings.request.location,
            IndexLocation::Path(PathBuf::from("cli/Packages"))
        );
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.request.ingest.dependency_fields(), ["Depends".to_string()]);
        assert_eq!(settings.request.analysis.workers(), Some(1));
    }

    #[test]
    fn test_invalid_cli_dependency_field_is_error() {
        let result = resolve_settings(args(&["--dependency-field", " "]), ConfigFile::default());
        assert!(result.is_err());
    }
}
