use crate::criticality::domain::{DependencyGraph, PackageRecord};
use std::collections::BTreeMap;

/// GraphBuilder service assembling the [`DependencyGraph`] of an index
///
/// Every record becomes a defined node before any edge is added, so forward
/// references resolve regardless of record order. Targets without a record
/// become stub nodes.
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn build(records: &BTreeMap<String, PackageRecord>) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for name in records.keys() {
            let id = graph.intern(name);
            graph.mark_defined(id);
        }

        for (name, record) in records {
            let from = graph.intern(name);
            for dependency in record.dependencies() {
                let to = graph.intern(dependency.name());
                graph.add_edge(from, to);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            stubs = graph.stub_count(),
            "dependency graph built"
        );

        graph
    }
}
