use crate::criticality::policies::{AnalysisOptions, IngestOptions};
use crate::ports::outbound::IndexLocation;

/// AnalysisRequest - Internal request DTO for the analyze-index use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Where the package index is read from
    pub location: IndexLocation,
    /// Dependency fields and alternative policy used while parsing
    pub ingest: IngestOptions,
    /// Worker count and PageRank parameters
    pub analysis: AnalysisOptions,
}

impl AnalysisRequest {
    /// Request with default ingest and analysis options
    pub fn new(location: IndexLocation) -> Self {
        Self {
            location,
            ingest: IngestOptions::default(),
            analysis: AnalysisOptions::default(),
        }
    }

    pub fn with_ingest_options(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    pub fn with_analysis_options(mut self, analysis: AnalysisOptions) -> Self {
        self.analysis = analysis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criticality::policies::{AlternativePolicy, PageRankParams};

    #[test]
    fn test_request_defaults() {
        let request = AnalysisRequest::new(IndexLocation::parse("Packages"));

        assert_eq!(request.ingest.dependency_fields(), ["Depends".to_string()]);
        assert_eq!(request.ingest.alternative_policy(), AlternativePolicy::FirstAlternative);
        assert_eq!(request.analysis.workers(), None);
    }

    #[test]
    fn test_request_builder_replaces_options() {
        let ingest = IngestOptions::new(
            vec!["Pre-Depends".to_string()],
            AlternativePolicy::AllAlternatives,
        )
        .unwrap();
        let analysis = AnalysisOptions::new(Some(2), PageRankParams::default()).unwrap();

        let request = AnalysisRequest::new(IndexLocation::parse("Packages"))
            .with_ingest_options(ingest)
            .with_analysis_options(analysis);

        assert_eq!(request.ingest.dependency_fields(), ["Pre-Depends".to_string()]);
        assert_eq!(request.analysis.workers(), Some(2));
    }
}
