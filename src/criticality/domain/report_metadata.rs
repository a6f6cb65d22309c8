/// ReportMetadata value object describing one analysis run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
    source: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
        source: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
            source,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Index location the run was computed from
    pub fn source(&self) -> &str {
        &self.source
    }
}
