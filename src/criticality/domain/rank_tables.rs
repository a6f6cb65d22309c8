use std::collections::BTreeMap;

/// Reference count per node: how many defined packages have it in their closure
///
/// Keyed by name so iteration (and therefore every report) is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCountTable {
    counts: BTreeMap<String, u64>,
}

impl ReferenceCountTable {
    pub fn new(counts: BTreeMap<String, u64>) -> Self {
        Self { counts }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Nodes with the highest counts first, ties broken by name
    pub fn most_referenced(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

/// PageRank score per defined package
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRankTable {
    ranks: BTreeMap<String, f64>,
}

impl PageRankTable {
    pub fn new(ranks: BTreeMap<String, f64>) -> Self {
        Self { ranks }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.ranks.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(name, rank)| (name.as_str(), *rank))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
