use crate::application::read_models::CriticalityReadModel;
use crate::ports::outbound::CriticalityFormatter;
use crate::shared::Result;
use std::collections::HashMap;
use std::fmt::Write;

/// DotFormatter adapter rendering the defined packages as a Graphviz digraph
///
/// Nodes are numbered in name order and labelled `name@version`; each edge is
/// labelled with its version constraint. Stubs are left out.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl CriticalityFormatter for DotFormatter {
    fn format(&self, model: &CriticalityReadModel) -> Result<String> {
        let mut output = String::from("digraph {\n");
        let mut indices = HashMap::new();

        for package in model.packages.iter().filter(|p| p.defined) {
            let index = indices.len();
            indices.insert(package.name.as_str(), index);
            let label = format!(
                "{}@{}",
                package.name,
                package.version.as_deref().unwrap_or_default()
            );
            writeln!(output, "  {} [label=\"{}\"];", index, escape_label(&label))?;
        }

        for edge in &model.edges {
            let (Some(from), Some(to)) = (
                indices.get(edge.from.as_str()),
                indices.get(edge.to.as_str()),
            ) else {
                continue;
            };
            writeln!(
                output,
                "  {} -> {} [label=\"{}\"];",
                from,
                to,
                escape_label(edge.version_constraint.as_deref().unwrap_or_default())
            )?;
        }

        output.push_str("}\n");
        Ok(output)
    }
}
