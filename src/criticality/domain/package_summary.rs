use super::PackageRecord;

/// Maximum number of characters kept from a package description
const MAX_DESCRIPTION_CHARS: usize = 255;

/// Descriptive fields of a defined package, as shown in reports
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageSummary {
    version: Option<String>,
    description: Option<String>,
    homepage: Option<String>,
}

impl PackageSummary {
    pub fn new(
        version: Option<String>,
        description: Option<String>,
        homepage: Option<String>,
    ) -> Self {
        Self {
            version,
            description: description.map(|d| truncate_chars(&d, MAX_DESCRIPTION_CHARS)),
            homepage,
        }
    }

    pub fn from_record(record: &PackageRecord) -> Self {
        let non_empty = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(String::from);
        Self::new(
            non_empty(record.version()),
            non_empty(record.description()),
            non_empty(record.homepage()),
        )
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
