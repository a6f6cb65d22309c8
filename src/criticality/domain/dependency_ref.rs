use std::fmt;

/// One dependency target extracted from a clause of a dependency field
///
/// Only `name` takes part in graph construction. The architecture qualifier
/// and version constraint are kept verbatim for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyRef {
    name: String,
    arch_qualifier: Option<String>,
    version_constraint: Option<String>,
}

impl DependencyRef {
    pub fn new(
        name: impl Into<String>,
        arch_qualifier: Option<String>,
        version_constraint: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arch_qualifier,
            version_constraint,
        }
    }

    /// A reference carrying only a name, used when a clause does not parse
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, None, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `:arch` suffix including its leading colon, e.g. `":amd64"`
    pub fn arch_qualifier(&self) -> Option<&str> {
        self.arch_qualifier.as_deref()
    }

    /// Inner text of the parenthesized constraint, e.g. `">= 1.0"`
    pub fn version_constraint(&self) -> Option<&str> {
        self.version_constraint.as_deref()
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(arch) = &self.arch_qualifier {
            write!(f, "{}", arch)?;
        }
        if let Some(version) = &self.version_constraint {
            write!(f, " ({})", version)?;
        }
        Ok(())
    }
}
