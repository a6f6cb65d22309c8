pub mod dependency_graph;
pub mod dependency_ref;
pub mod package_record;
pub mod package_summary;
pub mod parse_diagnostics;
pub mod rank_tables;
pub mod report_metadata;

pub use dependency_graph::{DependencyGraph, NodeId};
pub use dependency_ref::DependencyRef;
pub use package_record::PackageRecord;
pub use package_summary::PackageSummary;
pub use parse_diagnostics::ParseDiagnostics;
pub use rank_tables::{PageRankTable, ReferenceCountTable};
pub use report_metadata::ReportMetadata;
