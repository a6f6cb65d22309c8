use crate::criticality::domain::{DependencyRef, ParseDiagnostics};
use crate::criticality::policies::AlternativePolicy;

/// ClauseExtractor service turning a dependency field into [`DependencyRef`]s
///
/// A field is a comma-separated list of clauses, each clause a `|`-separated
/// list of alternatives shaped like `name[:arch] [(constraint)]`. Clauses that
/// do not have that shape degrade to a bare reference named after their raw
/// text; extraction never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseExtractor {
    policy: AlternativePolicy,
}

impl ClauseExtractor {
    pub fn new(policy: AlternativePolicy) -> Self {
        Self { policy }
    }

    /// Extracts the dependency references of one field value.
    ///
    /// An absent field yields an empty list; empty clauses are skipped.
    pub fn extract(&self, field: Option<&str>) -> Vec<DependencyRef> {
        let mut diagnostics = ParseDiagnostics::default();
        self.extract_with_diagnostics(field, &mut diagnostics)
    }

    /// Same as [`ClauseExtractor::extract`], counting degraded clauses
    pub fn extract_with_diagnostics(
        &self,
        field: Option<&str>,
        diagnostics: &mut ParseDiagnostics,
    ) -> Vec<DependencyRef> {
        let Some(field) = field else {
            return Vec::new();
        };

        let mut refs = Vec::new();
        for clause in field.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            match self.policy {
                AlternativePolicy::FirstAlternative => {
                    let first = clause.split('|').next().unwrap_or(clause);
                    refs.push(Self::parse_or_degrade(first, clause, diagnostics));
                }
                AlternativePolicy::AllAlternatives => {
                    for alternative in clause.split('|').map(str::trim).filter(|a| !a.is_empty()) {
                        refs.push(Self::parse_or_degrade(alternative, alternative, diagnostics));
                    }
                }
            }
        }
        refs
    }

    fn parse_or_degrade(
        alternative: &str,
        raw: &str,
        diagnostics: &mut ParseDiagnostics,
    ) -> DependencyRef {
        Self::parse_alternative(alternative).unwrap_or_else(|| {
            tracing::debug!(clause = raw, "dependency clause kept verbatim");
            diagnostics.degraded_clauses += 1;
            DependencyRef::bare(raw.trim())
        })
    }

    /// Parses `name[:arch] [(constraint)]`, returning `None` on any other shape
    fn parse_alternative(alternative: &str) -> Option<DependencyRef> {
        let text = alternative.trim();

        let name_end = text
            .find(|c: char| !is_name_char(c))
            .unwrap_or(text.len());
        if name_end == 0 {
            return None;
        }
        let (name, mut rest) = text.split_at(name_end);

        let mut arch_qualifier = None;
        if let Some(after_colon) = rest.strip_prefix(':') {
            let arch_end = after_colon
                .find(|c: char| !(c.is_alphanumeric() || c == '-'))
                .unwrap_or(after_colon.len());
            if arch_end == 0 {
                return None;
            }
            arch_qualifier = Some(format!(":{}", &after_colon[..arch_end]));
            rest = &after_colon[arch_end..];
        }

        let rest = rest.trim_start();
        let mut version_constraint = None;
        let rest = match rest.strip_prefix('(') {
            Some(inner) => {
                let close = inner.find(')')?;
                let constraint = inner[..close].trim();
                if constraint.is_empty() {
                    return None;
                }
                version_constraint = Some(constraint.to_string());
                &inner[close + 1..]
            }
            None => rest,
        };

        if !rest.trim().is_empty() {
            return None;
        }

        Some(DependencyRef::new(name, arch_qualifier, version_constraint))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '-' | '.')
}
