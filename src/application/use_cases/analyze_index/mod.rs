use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::criticality::domain::{DependencyGraph, ReferenceCountTable};
use crate::criticality::services::{
    GraphBuilder, PageRankScorer, RecordParser, ReferenceCounter, ReportGenerator,
};
use crate::ports::outbound::{IndexSource, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How often closure progress is forwarded to the reporter
const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of top-ranked packages listed after counting
const TOP_PACKAGES_REPORTED: usize = 5;

/// AnalyzeIndexUseCase - Core use case computing dependency criticality
///
/// Reads an index through the injected [`IndexSource`], parses it, builds the
/// dependency graph and derives reference counts and PageRank scores.
///
/// # Type Parameters
/// * `S` - IndexSource implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeIndexUseCase<S, PR> {
    index_source: S,
    progress_reporter: PR,
}

impl<S, PR> AnalyzeIndexUseCase<S, PR>
where
    S: IndexSource,
    PR: ProgressReporter,
{
    pub fn new(index_source: S, progress_reporter: PR) -> Self {
        Self {
            index_source,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns an error if the index cannot be read or decoded, or if the
    /// closure workers fail. Malformed index content is never an error; it is
    /// reported as warnings.
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Read the raw index
        self.progress_reporter.report(&format!(
            "📖 Reading package index from: {}",
            request.location
        ));
        let text = self.index_source.read_index(&request.location).await?;

        // Step 2: Parse records
        let parsed = RecordParser::new(request.ingest.clone()).parse(&text);
        drop(text);
        self.progress_reporter
            .report(&format!("✅ Parsed {} package record(s)", parsed.len()));
        for warning in parsed.diagnostics().warnings() {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        // Step 3: Build the graph
        let graph = Arc::new(GraphBuilder::build(parsed.records()));
        self.progress_reporter.report(&format!(
            "🕸️  Dependency graph: {} defined, {} stub(s), {} edge(s)",
            graph.defined_count(),
            graph.stub_count(),
            graph.edge_count()
        ));

        // Step 4: Reference counts
        let reference_counts = self
            .count_references(Arc::clone(&graph), request.analysis.workers())
            .await?;
        self.report_most_referenced(&reference_counts);

        // Step 5: PageRank
        let page_ranks = PageRankScorer::new(request.analysis.page_rank()).score(&graph);
        tracing::debug!(ranked = page_ranks.len(), "page rank computed");

        let metadata = ReportGenerator::generate_default_metadata(&request.location.to_string());
        let diagnostics = *parsed.diagnostics();

        Ok(AnalysisResponse::new(
            parsed.into_records(),
            graph,
            reference_counts,
            page_ranks,
            diagnostics,
            metadata,
        ))
    }

    /// Runs the closure workers off the async runtime, forwarding progress
    /// to the reporter while they run
    async fn count_references(
        &self,
        graph: Arc<DependencyGraph>,
        workers: Option<usize>,
    ) -> Result<ReferenceCountTable> {
        let total = graph.defined_count();
        let completed = Arc::new(AtomicUsize::new(0));

        let mut task = {
            let completed = Arc::clone(&completed);
            tokio::task::spawn_blocking(move || {
                ReferenceCounter::new(workers).aggregate_with_progress(&graph, &completed)
            })
        };

        let counts = loop {
            tokio::select! {
                joined = &mut task => {
                    break joined.context("Closure worker task failed")??;
                }
                _ = tokio::time::sleep(PROGRESS_POLL_INTERVAL) => {
                    self.progress_reporter.report_progress(
                        completed.load(Ordering::Relaxed),
                        total,
                        Some("Computing dependency closures..."),
                    );
                }
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Reference counts computed from {} closure(s)",
            completed.load(Ordering::Relaxed)
        ));
        Ok(counts)
    }

    fn report_most_referenced(&self, counts: &ReferenceCountTable) {
        let top = counts.most_referenced(TOP_PACKAGES_REPORTED);
        if top.is_empty() {
            return;
        }
        let listing: Vec<String> = top
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        self.progress_reporter
            .report(&format!("   - Most referenced: {}", listing.join(", ")));
    }
}

#[cfg(test)]
mod tests;
