mod alternative_policy;
mod options;

pub use alternative_policy::AlternativePolicy;
pub use options::{AnalysisOptions, IngestOptions, PageRankParams, DEFAULT_DEPENDENCY_FIELD};
