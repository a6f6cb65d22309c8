use clap::Parser;
use pkgcrit::application::dto::OutputFormat;
use pkgcrit::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Rank packages of a package index by how many packages depend on them
#[derive(Parser, Debug)]
#[command(name = "pkgcrit")]
#[command(version)]
#[command(
    about = "Rank packages of a Debian-style package index by transitive reverse-dependency count",
    long_about = None
)]
pub struct Args {
    /// Package index: a Packages or Packages.gz file, or an http(s) mirror URL
    /// [default: Packages]
    #[arg(short, long, value_name = "PATH|URL")]
    pub index: Option<String>,

    /// Report format: csv or json [default: csv]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the dependency graph of defined packages as Graphviz DOT
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Index field holding dependencies [default: Depends]
    /// Can be specified multiple times: --dependency-field Pre-Depends --dependency-field Depends
    #[arg(long = "dependency-field", value_name = "NAME")]
    pub dependency_fields: Vec<String>,

    /// Follow every alternative of `a | b` clauses instead of only the first
    #[arg(long)]
    pub all_alternatives: bool,

    /// Number of closure worker threads [default: number of CPU cores]
    #[arg(short = 'j', long, value_name = "N", value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Configuration file [default: ./pkgcrit.config.yml when present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_workers(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("worker count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid worker count '{}': {}", value, e)),
    }
}

impl Args {
    /// Parses the process arguments, exiting with [`ExitCode::Success`] for
    /// `--help`/`--version` and [`ExitCode::InvalidArguments`] otherwise
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            process::exit(exit_code_for(&e).as_i32());
        })
    }
}

/// Exit code for a clap parse failure; help and version output count as success
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
