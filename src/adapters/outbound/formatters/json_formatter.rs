use crate::application::read_models::{CriticalityReadModel, PackageView};
use crate::ports::outbound::CriticalityFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    packages: Vec<Package<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    tool: &'a str,
    version: &'a str,
    timestamp: &'a str,
    run_id: &'a str,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    defined: usize,
    stubs: usize,
    edges: usize,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    name: &'a str,
    refcount: u64,
    defined: bool,
    impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a PackageView> for Package<'a> {
    fn from(view: &'a PackageView) -> Self {
        Self {
            name: &view.name,
            refcount: view.refcount,
            defined: view.defined,
            impact: view.impact,
            page_rank: view.page_rank,
            version: view.version.as_deref(),
            homepage: view.homepage.as_deref(),
            description: view.description.as_deref(),
        }
    }
}

/// JsonFormatter adapter producing the full criticality report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CriticalityFormatter for JsonFormatter {
    fn format(&self, model: &CriticalityReadModel) -> Result<String> {
        let report = Report {
            metadata: Metadata {
                tool: &model.metadata.tool_name,
                version: &model.metadata.tool_version,
                timestamp: &model.metadata.timestamp,
                run_id: &model.metadata.run_id,
                source: &model.metadata.source,
            },
            summary: Summary {
                defined: model.summary.defined,
                stubs: model.summary.stubs,
                edges: model.summary.edges,
            },
            packages: model.packages.iter().map(Package::from).collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
