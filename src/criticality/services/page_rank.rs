use crate::criticality::domain::{DependencyGraph, NodeId, PageRankTable};
use crate::criticality::policies::PageRankParams;
use std::collections::BTreeMap;

/// PageRankScorer service ranking defined packages by incoming dependencies
///
/// Stubs take no part: only edges between defined packages spread rank, and a
/// package whose dependencies are all stubs spreads nothing. Duplicate edges
/// each receive their share.
pub struct PageRankScorer {
    params: PageRankParams,
}

impl PageRankScorer {
    pub fn new(params: PageRankParams) -> Self {
        Self { params }
    }

    pub fn score(&self, graph: &DependencyGraph) -> PageRankTable {
        let defined: Vec<NodeId> = graph.defined_nodes().collect();
        if defined.is_empty() {
            return PageRankTable::default();
        }

        // node index -> position in `defined`
        let mut position = vec![None; graph.node_count()];
        for (i, id) in defined.iter().enumerate() {
            position[id.index()] = Some(i);
        }
        let links: Vec<Vec<usize>> = defined
            .iter()
            .map(|id| {
                graph
                    .dependencies(*id)
                    .iter()
                    .filter_map(|target| position[target.index()])
                    .collect()
            })
            .collect();

        let n = defined.len() as f64;
        let d = self.params.damping_factor;
        let mut ranks = vec![1.0 / n; defined.len()];

        for _ in 0..self.params.iterations {
            let mut next = vec![(1.0 - d) / n; defined.len()];
            for (source, targets) in links.iter().enumerate() {
                if targets.is_empty() {
                    continue;
                }
                let share = d * ranks[source] / targets.len() as f64;
                for &target in targets {
                    next[target] += share;
                }
            }
            ranks = next;
        }

        let table: BTreeMap<String, f64> = defined
            .iter()
            .zip(ranks)
            .map(|(id, rank)| (graph.name(*id).to_string(), rank))
            .collect();
        PageRankTable::new(table)
    }
}

impl Default for PageRankScorer {
    fn default() -> Self {
        Self::new(PageRankParams::default())
    }
}
