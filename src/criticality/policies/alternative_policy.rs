use std::fmt;
use std::str::FromStr;

/// AlternativePolicy for `a | b` dependency clauses
///
/// The default keeps only the first alternative, which is what the reference
/// counts have always been computed with. Switching policy changes the counts:
/// with [`AlternativePolicy::AllAlternatives`] every alternative becomes an
/// edge, so packages that are only ever a fallback gain references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlternativePolicy {
    /// Keep the text before the first `|`; later alternatives are discarded
    #[default]
    FirstAlternative,
    /// Every `|`-separated alternative yields its own dependency reference
    AllAlternatives,
}

impl FromStr for AlternativePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(AlternativePolicy::FirstAlternative),
            "all" => Ok(AlternativePolicy::AllAlternatives),
            _ => Err(format!(
                "Invalid alternative policy: {}. Please specify 'first' or 'all'",
                s
            )),
        }
    }
}

impl fmt::Display for AlternativePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlternativePolicy::FirstAlternative => write!(f, "first"),
            AlternativePolicy::AllAlternatives => write!(f, "all"),
        }
    }
}
