//! Criticality read model for query operations

use super::package_view::PackageView;

/// Main read model of one analysis run
#[derive(Debug, Clone)]
pub struct CriticalityReadModel {
    pub metadata: ReportMetadataView,
    pub summary: GraphSummaryView,
    /// One entry per node, sorted by name
    pub packages: Vec<PackageView>,
    /// Edges between defined packages, by source name then dependency order
    pub edges: Vec<DependencyEdgeView>,
}

/// View representation of run metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
    pub source: String,
}

/// Size of the analysed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummaryView {
    pub defined: usize,
    pub stubs: usize,
    pub edges: usize,
}

/// One dependency edge between two defined packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdgeView {
    pub from: String,
    pub to: String,
    pub version_constraint: Option<String>,
}
