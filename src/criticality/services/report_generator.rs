use crate::criticality::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service stamping a run with time and identity
pub struct ReportGenerator;

impl ReportGenerator {
    /// Metadata with the current UTC timestamp (RFC 3339) and a fresh
    /// `urn:uuid:` run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str, source: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
            source.to_string(),
        )
    }

    pub fn generate_default_metadata(source: &str) -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportGenerator::generate_metadata("crit", "9.9.9", "mirror/Packages");

        assert_eq!(metadata.tool_name(), "crit");
        assert_eq!(metadata.tool_version(), "9.9.9");
        assert_eq!(metadata.source(), "mirror/Packages");
        assert!(metadata.run_id().starts_with("urn:uuid:"));
        assert!(metadata.timestamp().contains('T'));
    }

    #[test]
    fn test_default_metadata_uses_package_info() {
        let metadata = ReportGenerator::generate_default_metadata("Packages");
        assert_eq!(metadata.tool_name(), "pkgcrit");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let first = ReportGenerator::generate_default_metadata("Packages");
        let second = ReportGenerator::generate_default_metadata("Packages");
        assert_ne!(first.run_id(), second.run_id());
    }
}
