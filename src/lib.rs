//! pkgcrit - dependency criticality for package indexes
//!
//! Parses a Debian-style `Packages` index, builds the dependency graph of
//! every listed package and counts, for each package, how many packages
//! transitively depend on it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`criticality`): records, graph, closures, counting, PageRank
//! - **Application Layer** (`application`): use case, DTOs, read models, factories
//! - **Ports** (`ports`): interfaces for index sources, formatters and output
//! - **Adapters** (`adapters`): filesystem, mirror, console and formatter implementations
//! - **Shared** (`shared`): error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use pkgcrit::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = AnalyzeIndexUseCase::new(
//!     FileSystemIndexReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::new(IndexLocation::parse("Packages"));
//! let response = use_case.execute(request).await?;
//!
//! let model = CriticalityReadModelBuilder::build(&response);
//! print!("{}", CsvFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod criticality;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemIndexReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, DotFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::MirrorIndexClient;
    pub use crate::adapters::outbound::RoutingIndexSource;
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::read_models::{CriticalityReadModel, CriticalityReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeIndexUseCase;
    pub use crate::criticality::domain::{
        DependencyGraph, DependencyRef, PackageRecord, PackageSummary, PageRankTable,
        ParseDiagnostics, ReferenceCountTable, ReportMetadata,
    };
    pub use crate::criticality::policies::{
        AlternativePolicy, AnalysisOptions, IngestOptions, PageRankParams,
    };
    pub use crate::criticality::services::{
        ClauseExtractor, ClosureEngine, GraphBuilder, PageRankScorer, RecordParser,
        ReferenceCounter,
    };
    pub use crate::ports::outbound::{
        CriticalityFormatter, IndexLocation, IndexSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
