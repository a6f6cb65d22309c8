use super::AlternativePolicy;
use crate::shared::error::CritError;
use crate::shared::Result;

/// Default dependency field of a Debian `Packages` record
pub const DEFAULT_DEPENDENCY_FIELD: &str = "Depends";

/// Options controlling how an index is turned into records and edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    dependency_fields: Vec<String>,
    alternative_policy: AlternativePolicy,
}

impl IngestOptions {
    /// # Errors
    /// Returns a validation error if `dependency_fields` is empty or contains
    /// a blank or colon-bearing name
    pub fn new(dependency_fields: Vec<String>, alternative_policy: AlternativePolicy) -> Result<Self> {
        if dependency_fields.is_empty() {
            return Err(CritError::Validation {
                message: "At least one dependency field is required".to_string(),
            }
            .into());
        }
        if let Some(field) = dependency_fields
            .iter()
            .find(|f| f.trim().is_empty() || f.contains(':'))
        {
            return Err(CritError::Validation {
                message: format!("Invalid dependency field name: '{}'", field),
            }
            .into());
        }

        Ok(Self {
            dependency_fields: dependency_fields
                .into_iter()
                .map(|f| f.trim().to_string())
                .collect(),
            alternative_policy,
        })
    }

    /// Field names whose clauses become edges, in concatenation order
    pub fn dependency_fields(&self) -> &[String] {
        &self.dependency_fields
    }

    pub fn alternative_policy(&self) -> AlternativePolicy {
        self.alternative_policy
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            dependency_fields: vec![DEFAULT_DEPENDENCY_FIELD.to_string()],
            alternative_policy: AlternativePolicy::default(),
        }
    }
}

/// PageRank parameters; the defaults are the ones the scores have always used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    pub damping_factor: f64,
    pub iterations: usize,
}

impl PageRankParams {
    /// # Errors
    /// Returns a validation error unless `0 < damping_factor < 1`
    pub fn new(damping_factor: f64, iterations: usize) -> Result<Self> {
        if !(damping_factor > 0.0 && damping_factor < 1.0) {
            return Err(CritError::Validation {
                message: format!(
                    "damping factor must be between 0 and 1 (exclusive), got {}",
                    damping_factor
                ),
            }
            .into());
        }
        Ok(Self {
            damping_factor,
            iterations,
        })
    }
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Options for the closure / counting phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisOptions {
    workers: Option<usize>,
    page_rank: PageRankParams,
}

impl AnalysisOptions {
    /// # Errors
    /// Returns a validation error if `workers` is `Some(0)`
    pub fn new(workers: Option<usize>, page_rank: PageRankParams) -> Result<Self> {
        if workers == Some(0) {
            return Err(CritError::Validation {
                message: "workers must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self { workers, page_rank })
    }

    /// Worker threads for closure computation; `None` uses all available cores
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    pub fn page_rank(&self) -> PageRankParams {
        self.page_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_defaults() {
        let options = IngestOptions::default();
        assert_eq!(options.dependency_fields(), &["Depends".to_string()]);
        assert_eq!(
            options.alternative_policy(),
            AlternativePolicy::FirstAlternative
        );
    }

    #[test]
    fn test_ingest_rejects_empty_field_list() {
        let result = IngestOptions::new(vec![], AlternativePolicy::default());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("At least one dependency field"));
    }

    #[test]
    fn test_ingest_rejects_blank_field_name() {
        let result = IngestOptions::new(
            vec!["Depends".to_string(), "  ".to_string()],
            AlternativePolicy::default(),
        );
        assert!(result.is_err());

        let result = IngestOptions::new(vec!["Pre:Depends".to_string()], AlternativePolicy::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_page_rank_defaults() {
        let params = PageRankParams::default();
        assert_eq!(params.damping_factor, 0.85);
        assert_eq!(params.iterations, 20);
    }

    #[test]
    fn test_page_rank_rejects_out_of_range_damping() {
        assert!(PageRankParams::new(0.0, 20).is_err());
        assert!(PageRankParams::new(1.0, 20).is_err());
        assert!(PageRankParams::new(f64::NAN, 20).is_err());
        assert!(PageRankParams::new(0.5, 0).is_ok());
    }

    #[test]
    fn test_analysis_rejects_zero_workers() {
        let result = AnalysisOptions::new(Some(0), PageRankParams::default());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("workers must be at least 1"));
        assert_eq!(
            AnalysisOptions::new(Some(4), PageRankParams::default())
                .unwrap()
                .workers(),
            Some(4)
        );
    }
}
