use super::line_classifier::{LineClass, LineClassifier};
use super::ClauseExtractor;
use crate::criticality::domain::{PackageRecord, ParseDiagnostics};
use crate::criticality::policies::IngestOptions;
use std::collections::{BTreeMap, HashMap};

/// Field that names a record
const PACKAGE_FIELD: &str = "Package";

/// Records of one index snapshot, keyed (and iterated) by package name
#[derive(Debug, Clone, Default)]
pub struct ParsedIndex {
    records: BTreeMap<String, PackageRecord>,
    diagnostics: ParseDiagnostics,
}

impl ParsedIndex {
    pub fn records(&self) -> &BTreeMap<String, PackageRecord> {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(name)
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> BTreeMap<String, PackageRecord> {
        self.records
    }
}

/// RecordParser service for blank-line separated package indexes
///
/// Drives a small state machine over [`LineClass`]es: `Blank` lines close the
/// record being built, `FieldStart` opens a field and makes it current,
/// `Continuation` folds into the current field and `Unrecognized` is skipped.
/// Malformed input is counted in [`ParseDiagnostics`], never returned as an
/// error.
pub struct RecordParser {
    options: IngestOptions,
    extractor: ClauseExtractor,
}

impl RecordParser {
    pub fn new(options: IngestOptions) -> Self {
        let extractor = ClauseExtractor::new(options.alternative_policy());
        Self { options, extractor }
    }

    pub fn parse(&self, text: &str) -> ParsedIndex {
        let mut index = ParsedIndex::default();
        let mut builder = RecordBuilder::default();

        for (line_number, line) in text.lines().enumerate() {
            match LineClassifier::classify(line) {
                LineClass::Blank => {
                    let finished = std::mem::take(&mut builder);
                    self.finish_record(finished, &mut index);
                }
                LineClass::FieldStart { key, value } => builder.start_field(key, value),
                LineClass::Continuation(content) => {
                    if !builder.continue_field(content) {
                        tracing::debug!(line = line_number + 1, "continuation without a field");
                        builder.diagnostics.orphan_continuations += 1;
                    }
                }
                LineClass::Unrecognized => {
                    tracing::debug!(line = line_number + 1, "unrecognized index line");
                    builder.has_content = true;
                    builder.diagnostics.unrecognized_lines += 1;
                }
            }
        }
        self.finish_record(builder, &mut index);

        index
    }

    fn finish_record(&self, builder: RecordBuilder, index: &mut ParsedIndex) {
        let RecordBuilder {
            fields,
            mut diagnostics,
            has_content,
            ..
        } = builder;

        if !has_content {
            index.diagnostics.merge(&diagnostics);
            return;
        }

        let name = fields
            .get(PACKAGE_FIELD)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(String::from);

        let Some(name) = name else {
            tracing::debug!(fields = fields.len(), "record without Package field dropped");
            diagnostics.records_without_name += 1;
            index.diagnostics.merge(&diagnostics);
            return;
        };

        let mut dependencies = Vec::new();
        for field in self.options.dependency_fields() {
            dependencies.extend(
                self.extractor
                    .extract_with_diagnostics(fields.get(field).map(String::as_str), &mut diagnostics),
            );
        }

        let record = PackageRecord::new(name.clone(), fields, dependencies);
        if index.records.insert(name.clone(), record).is_some() {
            tracing::warn!(package = %name, "duplicate record replaces earlier one");
            diagnostics.duplicate_records += 1;
        }
        index.diagnostics.merge(&diagnostics);
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}

#[derive(Default)]
struct RecordBuilder {
    fields: HashMap<String, String>,
    current_field: Option<String>,
    diagnostics: ParseDiagnostics,
    has_content: bool,
}

impl RecordBuilder {
    fn start_field(&mut self, key: &str, value: &str) {
        self.has_content = true;
        self.fields.insert(key.to_string(), value.to_string());
        self.current_field = Some(key.to_string());
    }

    /// Appends to the current field; returns false when there is none
    fn continue_field(&mut self, content: &str) -> bool {
        self.has_content = true;
        let Some(value) = self
            .current_field
            .as_ref()
            .and_then(|key| self.fields.get_mut(key))
        else {
            return false;
        };
        value.push(' ');
        value.push_str(content);
        true
    }
}
