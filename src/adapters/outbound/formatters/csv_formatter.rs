use crate::application::read_models::CriticalityReadModel;
use crate::ports::outbound::CriticalityFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// CsvFormatter adapter producing `name,refcount` rows
///
/// Rows come out in read model order, which is sorted by name, so two runs
/// over the same index produce byte-identical output.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quotes a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl CriticalityFormatter for CsvFormatter {
    fn format(&self, model: &CriticalityReadModel) -> Result<String> {
        let mut output = String::from("name,refcount\n");
        for package in &model.packages {
            writeln!(output, "{},{}", escape_field(&package.name), package.refcount)?;
        }
        Ok(output)
    }
}
