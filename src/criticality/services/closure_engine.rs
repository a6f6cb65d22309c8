use crate::criticality::domain::{DependencyGraph, NodeId};
use std::collections::HashSet;

/// ClosureEngine service computing transitive dependency sets
///
/// Traversal is an iterative depth-first walk with an explicit stack, so
/// chain length is bounded by heap rather than call stack. Membership uses a
/// hash set, which is what keeps cycles finite: a node already accumulated is
/// never pushed again.
pub struct ClosureEngine;

impl ClosureEngine {
    /// Closure of `start` by name: `start` first, then every reachable node
    /// exactly once in depth-first pre-order.
    ///
    /// A name that is not in the graph yields just itself.
    pub fn closure(graph: &DependencyGraph, start: &str) -> Vec<String> {
        match graph.node_id(start) {
            Some(id) => Self::closure_ids(graph, id)
                .into_iter()
                .map(|member| graph.name(member).to_string())
                .collect(),
            None => vec![start.to_string()],
        }
    }

    /// Closure of `start` as node ids, in the same order as [`ClosureEngine::closure`]
    pub fn closure_ids(graph: &DependencyGraph, start: NodeId) -> Vec<NodeId> {
        let mut visited = HashSet::from([start]);
        let mut order = vec![start];
        // (node, index of the next edge to follow)
        let mut stack = vec![(start, 0usize)];

        while let Some((node, next_edge)) = stack.last_mut() {
            let edges = graph.dependencies(*node);
            if *next_edge < edges.len() {
                let target = edges[*next_edge];
                *next_edge += 1;
                if visited.insert(target) {
                    order.push(target);
                    stack.push((target, 0));
                }
            } else {
                stack.pop();
            }
        }

        order
    }
}
