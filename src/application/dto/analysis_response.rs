use crate::criticality::domain::{
    DependencyGraph, PackageRecord, PageRankTable, ParseDiagnostics, ReferenceCountTable,
    ReportMetadata,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// AnalysisResponse - Internal response DTO from the analyze-index use case
///
/// Holds the domain results; the read model builder turns them into what
/// formatters consume.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub records: BTreeMap<String, PackageRecord>,
    pub graph: Arc<DependencyGraph>,
    pub reference_counts: ReferenceCountTable,
    pub page_ranks: PageRankTable,
    pub diagnostics: ParseDiagnostics,
    pub metadata: ReportMetadata,
}

impl AnalysisResponse {
    pub fn new(
        records: BTreeMap<String, PackageRecord>,
        graph: Arc<DependencyGraph>,
        reference_counts: ReferenceCountTable,
        page_ranks: PageRankTable,
        diagnostics: ParseDiagnostics,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            records,
            graph,
            reference_counts,
            page_ranks,
            diagnostics,
            metadata,
        }
    }
}
