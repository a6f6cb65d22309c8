/// Counters for input that was dropped or degraded while parsing an index
///
/// None of these abort a run; they are surfaced as warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    /// Records without a usable `Package:` field
    pub records_without_name: usize,
    /// Records whose name was already seen (the later record wins)
    pub duplicate_records: usize,
    /// Lines that matched no line class
    pub unrecognized_lines: usize,
    /// Continuation lines with no field to attach to
    pub orphan_continuations: usize,
    /// Dependency clauses that fell back to their raw text
    pub degraded_clauses: usize,
}

impl ParseDiagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Human-readable warnings, one per non-zero counter
    pub fn warnings(&self) -> Vec<String> {
        let entries = [
            (self.records_without_name, "record(s) without a Package field were dropped"),
            (self.duplicate_records, "duplicate record(s) replaced an earlier record of the same name"),
            (self.unrecognized_lines, "unrecognized line(s) were ignored"),
            (self.orphan_continuations, "continuation line(s) without a preceding field were ignored"),
            (self.degraded_clauses, "dependency clause(s) could not be parsed and were kept verbatim"),
        ];

        entries
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, message)| format!("{} {}", count, message))
            .collect()
    }

    pub(crate) fn merge(&mut self, other: &ParseDiagnostics) {
        self.records_without_name += other.records_without_name;
        self.duplicate_records += other.duplicate_records;
        self.unrecognized_lines += other.unrecognized_lines;
        self.orphan_continuations += other.orphan_continuations;
        self.degraded_clauses += other.degraded_clauses;
    }
}
