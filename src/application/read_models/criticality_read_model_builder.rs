//! Builder for constructing CriticalityReadModel from an AnalysisResponse

use super::criticality_read_model::{
    CriticalityReadModel, DependencyEdgeView, GraphSummaryView, ReportMetadataView,
};
use super::package_view::PackageView;
use crate::application::dto::AnalysisResponse;
use crate::criticality::domain::PackageSummary;

/// Builder transforming analysis results into the read model
pub struct CriticalityReadModelBuilder;

impl CriticalityReadModelBuilder {
    pub fn build(response: &AnalysisResponse) -> CriticalityReadModel {
        CriticalityReadModel {
            metadata: Self::build_metadata(response),
            summary: GraphSummaryView {
                defined: response.graph.defined_count(),
                stubs: response.graph.stub_count(),
                edges: response.graph.edge_count(),
            },
            packages: Self::build_packages(response),
            edges: Self::build_edges(response),
        }
    }

    fn build_metadata(response: &AnalysisResponse) -> ReportMetadataView {
        let metadata = &response.metadata;
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
            source: metadata.source().to_string(),
        }
    }

    /// Rows follow the count table, so they are sorted by name
    fn build_packages(response: &AnalysisResponse) -> Vec<PackageView> {
        let defined_total = response.graph.defined_count();

        response
            .reference_counts
            .iter()
            .map(|(name, refcount)| {
                let summary = response
                    .records
                    .get(name)
                    .map(PackageSummary::from_record)
                    .unwrap_or_default();
                let impact = if defined_total == 0 {
                    0.0
                } else {
                    refcount as f64 / defined_total as f64
                };

                PackageView {
                    name: name.to_string(),
                    refcount,
                    defined: response.records.contains_key(name),
                    impact,
                    page_rank: response.page_ranks.get(name),
                    version: summary.version().map(String::from),
                    homepage: summary.homepage().map(String::from),
                    description: summary.description().map(String::from),
                }
            })
            .collect()
    }

    fn build_edges(response: &AnalysisResponse) -> Vec<DependencyEdgeView> {
        response
            .records
            .values()
            .flat_map(|record| {
                record
                    .dependencies()
                    .iter()
                    .filter(|dependency| response.records.contains_key(dependency.name()))
                    .map(|dependency| DependencyEdgeView {
                        from: record.name().to_string(),
                        to: dependency.name().to_string(),
                        version_constraint: dependency.version_constraint().map(String::from),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criticality::domain::ReportMetadata;
    use crate::criticality::services::{GraphBuilder, PageRankScorer, RecordParser, ReferenceCounter};
    use std::sync::Arc;

    fn response_for(text: &str) -> AnalysisResponse {
        let parsed = RecordParser::default().parse(text);
        let graph = GraphBuilder::build(parsed.records());
        let counts = ReferenceCounter::aggregate_sequential(&graph);
        let ranks = PageRankScorer::default().score(&graph);
        let diagnostics = *parsed.diagnostics();
        let metadata = ReportMetadata::new(
            "2024-01-15T10:30:00Z".to_string(),
            "pkgcrit".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:00000000-0000-4000-8000-000000000000".to_string(),
            "Packages".to_string(),
        );
        AnalysisResponse::new(
            parsed.into_records(),
            Arc::new(graph),
            counts,
            ranks,
            diagnostics,
            metadata,
        )
    }

    const INDEX: &str = "Package: app\nVersion: 2.0\nHomepage: https://app.example\nDescription: an app\nDepends: libc6 (>= 2.36), ghost\n\nPackage: libc6\nVersion: 2.36-9\n";

    #[test]
    fn test_build_metadata_and_summary() {
        let model = CriticalityReadModelBuilder::build(&response_for(INDEX));

        assert_eq!(model.metadata.tool_name, "pkgcrit");
        assert_eq!(model.metadata.source, "Packages");
        assert_eq!(
            model.summary,
            GraphSummaryView {
                defined: 2,
                stubs: 1,
                edges: 2
            }
        );
    }

    #[test]
    fn test_build_packages() {
        let model = CriticalityReadModelBuilder::build(&response_for(INDEX));
        let names: Vec<&str> = model.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["app", "ghost", "libc6"]);

        let app = &model.packages[0];
        assert_eq!(app.refcount, 1);
        assert!(app.defined);
        assert_eq!(app.version.as_deref(), Some("2.0"));
        assert_eq!(app.homepage.as_deref(), Some("https://app.example"));
        assert!((app.impact - 0.5).abs() < f64::EPSILON);
        assert!(app.page_rank.is_some());

        let ghost = &model.packages[1];
        assert!(!ghost.defined);
        assert!(ghost.page_rank.is_none());
        assert!(ghost.version.is_none());

        let libc = &model.packages[2];
        assert_eq!(libc.refcount, 2);
        assert!((libc.impact - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_edges_only_between_defined_packages() {
        let model = CriticalityReadModelBuilder::build(&response_for(INDEX));
        assert_eq!(
            model.edges,
            vec![DependencyEdgeView {
                from: "app".to_string(),
                to: "libc6".to_string(),
                version_constraint: Some(">= 2.36".to_string()),
            }]
        );
    }

    #[test]
    fn test_build_empty() {
        let model = CriticalityReadModelBuilder::build(&response_for(""));
        assert!(model.packages.is_empty());
        assert!(model.edges.is_empty());
        assert_eq!(model.summary.defined, 0);
    }
}
