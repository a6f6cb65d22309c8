//! Per-node view for the read model

/// View of one graph node with its criticality figures
#[derive(Debug, Clone, PartialEq)]
pub struct PackageView {
    pub name: String,
    /// Number of defined packages whose closure contains this node
    pub refcount: u64,
    /// False for stubs: referenced but without a record of their own
    pub defined: bool,
    /// `refcount` divided by the number of defined packages
    pub impact: f64,
    /// Present for defined packages only
    pub page_rank: Option<f64>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub description: Option<String>,
}
