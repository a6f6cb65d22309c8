use super::DependencyRef;
use std::collections::HashMap;

/// PackageRecord entity - one package's metadata block from the index
///
/// Raw fields and the structured dependency list live in separate slots, so
/// a field value is always a plain string.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: String,
    fields: HashMap<String, String>,
    dependencies: Vec<DependencyRef>,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        fields: HashMap<String, String>,
        dependencies: Vec<DependencyRef>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn dependencies(&self) -> &[DependencyRef] {
        &self.dependencies
    }

    pub fn version(&self) -> Option<&str> {
        self.field("Version")
    }

    pub fn description(&self) -> Option<&str> {
        self.field("Description")
    }

    pub fn homepage(&self) -> Option<&str> {
        self.field("Homepage")
    }
}
