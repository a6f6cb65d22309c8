use super::*;
use crate::criticality::policies::{AlternativePolicy, AnalysisOptions, IngestOptions, PageRankParams};
use crate::ports::outbound::IndexLocation;
use async_trait::async_trait;
use std::cell::RefCell;

struct MockIndexSource {
    content: Option<String>,
}

impl MockIndexSource {
    fn with(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    fn failing() -> Self {
        Self { content: None }
    }
}

#[async_trait]
impl IndexSource for MockIndexSource {
    async fn read_index(&self, location: &IndexLocation) -> Result<String> {
        self.content
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Package index not found: {}", location))
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for &RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(IndexLocation::parse("Packages"))
}

fn counts(response: &AnalysisResponse) -> Vec<(String, u64)> {
    response
        .reference_counts
        .iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

const SIMPLE_INDEX: &str = "Package: a\nVersion: 1\nDepends: b, c\n\nPackage: b\n\nPackage: c\n";

#[tokio::test]
async fn test_execute_simple_tree() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(MockIndexSource::with(SIMPLE_INDEX), &reporter);

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(
        counts(&response),
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 2)
        ]
    );
    assert_eq!(response.records.len(), 3);
    assert_eq!(response.page_ranks.len(), 3);
    assert_eq!(response.metadata.source(), "Packages");
    assert!(reporter.errors.borrow().is_empty());
}

#[tokio::test]
async fn test_execute_reports_progress_steps() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(MockIndexSource::with(SIMPLE_INDEX), &reporter);
    use_case.execute(request()).await.unwrap();

    let messages = reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Reading package index from: Packages")));
    assert!(messages.iter().any(|m| m.contains("Parsed 3 package record(s)")));
    assert!(messages.iter().any(|m| m.contains("3 defined, 0 stub(s), 2 edge(s)")));
    assert!(messages.iter().any(|m| m.contains("Most referenced: b (2), c (2), a (1)")));
}

#[tokio::test]
async fn test_execute_cycle() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(
        MockIndexSource::with("Package: a\nDepends: b\n\nPackage: b\nDepends: a\n"),
        &reporter,
    );

    let response = use_case.execute(request()).await.unwrap();
    assert_eq!(
        counts(&response),
        vec![("a".to_string(), 2), ("b".to_string(), 2)]
    );
}

#[tokio::test]
async fn test_execute_stub_dependency() {
    let reporter = RecordingProgressReporter::default();
    let use_case =
        AnalyzeIndexUseCase::new(MockIndexSource::with("Package: a\nDepends: ghost\n"), &reporter);

    let response = use_case.execute(request()).await.unwrap();
    assert_eq!(response.reference_counts.get("ghost"), Some(1));
    assert_eq!(response.graph.stub_count(), 1);
    assert!(response.page_ranks.get("ghost").is_none());
}

#[tokio::test]
async fn test_execute_empty_index() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(MockIndexSource::with(""), &reporter);

    let response = use_case.execute(request()).await.unwrap();
    assert!(response.records.is_empty());
    assert!(response.graph.is_empty());
    assert!(response.reference_counts.is_empty());
    assert!(response.page_ranks.is_empty());
}

#[tokio::test]
async fn test_execute_reports_parse_warnings() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(
        MockIndexSource::with("Version: 1\n\nPackage: a\njunk line\nDepends: b [i386]\n"),
        &reporter,
    );

    let response = use_case.execute(request()).await.unwrap();
    assert_eq!(response.diagnostics.records_without_name, 1);

    let errors = reporter.errors.borrow();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.starts_with("⚠️  Warning: ")));
    assert!(errors.iter().any(|e| e.contains("1 unrecognized line(s)")));
}

#[tokio::test]
async fn test_execute_source_error_propagates() {
    let reporter = RecordingProgressReporter::default();
    let use_case = AnalyzeIndexUseCase::new(MockIndexSource::failing(), &reporter);

    let err = use_case.execute(request()).await.unwrap_err();
    assert!(err.to_string().contains("Package index not found"));
}

#[tokio::test]
async fn test_execute_with_all_alternatives_and_extra_field() {
    let reporter = RecordingProgressReporter::default();
    let text = "Package: a\nPre-Depends: x\nDepends: b | c\n\nPackage: b\n\nPackage: c\n\nPackage: x\n";
    let use_case = AnalyzeIndexUseCase::new(MockIndexSource::with(text), &reporter);

    let ingest = IngestOptions::new(
        vec!["Pre-Depends".to_string(), "Depends".to_string()],
        AlternativePolicy::AllAlternatives,
    )
    .unwrap();
    let response = use_case
        .execute(request().with_ingest_options(ingest))
        .await
        .unwrap();

    assert_eq!(response.reference_counts.get("b"), Some(2));
    assert_eq!(response.reference_counts.get("c"), Some(2));
    assert_eq!(response.reference_counts.get("x"), Some(2));
}

#[tokio::test]
async fn test_execute_worker_count_does_not_change_counts() {
    let text: String = (0..300)
        .map(|i| format!("Package: p{}\nDepends: p{}, p{}\n\n", i, (i * 3 + 1) % 300, i / 3))
        .collect();

    let mut results = Vec::new();
    for workers in [Some(1), Some(4)] {
        let reporter = RecordingProgressReporter::default();
        let use_case = AnalyzeIndexUseCase::new(MockIndexSource::with(&text), &reporter);
        let analysis = AnalysisOptions::new(workers, PageRankParams::default()).unwrap();
        let response = use_case
            .execute(request().with_analysis_options(analysis))
            .await
            .unwrap();
        results.push(counts(&response));
    }

    assert_eq!(results[0], results[1]);
}
