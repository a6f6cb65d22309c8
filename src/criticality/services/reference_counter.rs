use super::ClosureEngine;
use crate::criticality::domain::{DependencyGraph, NodeId, ReferenceCountTable};
use crate::shared::Result;
use anyhow::Context;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Minimum number of closures one rayon job computes before splitting further
///
/// Each split allocates its own count vector, so this bounds memory.
const MIN_CLOSURES_PER_JOB: usize = 64;

/// ReferenceCounter service aggregating closures into reference counts
///
/// Every defined package contributes one to each member of its closure,
/// itself included. Stub nodes are counted but never used as starting points.
/// Closures are independent reads of the shared graph, so they are computed on
/// a rayon pool with one local count vector per job, summed at the end.
pub struct ReferenceCounter {
    workers: Option<usize>,
}

impl ReferenceCounter {
    /// `workers = None` uses one thread per available core
    pub fn new(workers: Option<usize>) -> Self {
        Self { workers }
    }

    pub fn aggregate(&self, graph: &DependencyGraph) -> Result<ReferenceCountTable> {
        self.aggregate_with_progress(graph, &AtomicUsize::new(0))
    }

    /// Aggregates counts, bumping `completed` once per finished closure
    ///
    /// # Errors
    /// Returns an error if the worker pool cannot be started
    pub fn aggregate_with_progress(
        &self,
        graph: &DependencyGraph,
        completed: &AtomicUsize,
    ) -> Result<ReferenceCountTable> {
        if self.workers == Some(1) {
            return Ok(Self::aggregate_sequential_with_progress(graph, completed));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers.unwrap_or(0))
            .thread_name(|i| format!("pkgcrit-closure-{}", i))
            .build()
            .context("Failed to start closure worker pool")?;

        let node_count = graph.node_count();
        let starts: Vec<NodeId> = graph.defined_nodes().collect();

        let counts = pool.install(|| {
            starts
                .par_iter()
                .with_min_len(MIN_CLOSURES_PER_JOB)
                .fold(
                    || vec![0u64; node_count],
                    |mut local, &start| {
                        Self::count_closure(graph, start, &mut local);
                        completed.fetch_add(1, Ordering::Relaxed);
                        local
                    },
                )
                .reduce(
                    || vec![0u64; node_count],
                    |mut total, local| {
                        for (sum, count) in total.iter_mut().zip(local) {
                            *sum += count;
                        }
                        total
                    },
                )
        });

        Ok(Self::into_table(graph, &counts))
    }

    /// Single-threaded aggregation, the reference the parallel path must match
    pub fn aggregate_sequential(graph: &DependencyGraph) -> ReferenceCountTable {
        Self::aggregate_sequential_with_progress(graph, &AtomicUsize::new(0))
    }

    fn aggregate_sequential_with_progress(
        graph: &DependencyGraph,
        completed: &AtomicUsize,
    ) -> ReferenceCountTable {
        let mut counts = vec![0u64; graph.node_count()];
        for start in graph.defined_nodes() {
            Self::count_closure(graph, start, &mut counts);
            completed.fetch_add(1, Ordering::Relaxed);
        }
        Self::into_table(graph, &counts)
    }

    fn count_closure(graph: &DependencyGraph, start: NodeId, counts: &mut [u64]) {
        for member in ClosureEngine::closure_ids(graph, start) {
            counts[member.index()] += 1;
        }
    }

    fn into_table(graph: &DependencyGraph, counts: &[u64]) -> ReferenceCountTable {
        let table: BTreeMap<String, u64> = graph
            .nodes()
            .filter(|id| counts[id.index()] > 0)
            .map(|id| (graph.name(id).to_string(), counts[id.index()]))
            .collect();
        ReferenceCountTable::new(table)
    }
}

impl Default for ReferenceCounter {
    fn default() -> Self {
        Self::new(None)
    }
}
