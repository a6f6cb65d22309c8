//! Configuration file support for pkgcrit.
//!
//! Provides YAML-based configuration through `pkgcrit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::criticality::policies::AlternativePolicy;
use crate::shared::error::CritError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkgcrit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Index path or mirror URL
    pub index: Option<String>,
    pub format: Option<String>,
    pub dependency_fields: Option<Vec<String>>,
    /// `first` or `all`
    pub alternatives: Option<String>,
    pub workers: Option<usize>,
    pub page_rank: Option<PageRankConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct PageRankConfig {
    pub damping_factor: Option<f64>,
    pub iterations: Option<usize>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                OutputFormat::from_str(format)
                    .map_err(|message| invalid(message, "Use 'csv' or 'json'."))
            })
            .transpose()
    }

    pub fn alternative_policy(&self) -> Result<Option<AlternativePolicy>> {
        self.alternatives
            .as_deref()
            .map(|policy| {
                AlternativePolicy::from_str(policy)
                    .map_err(|message| invalid(message, "Use 'first' or 'all'."))
            })
            .transpose()
    }
}

fn invalid(message: impl Into<String>, hint: &str) -> anyhow::Error {
    CritError::InvalidConfig {
        message: message.into(),
        hint: hint.to_string(),
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config file loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.workers == Some(0) {
        return Err(invalid(
            "workers must be at least 1",
            "Omit 'workers' to use one worker per CPU core.",
        ));
    }

    if let Some(fields) = &config.dependency_fields {
        if fields.is_empty() {
            return Err(invalid(
                "dependency_fields must not be empty",
                "List at least one field, e.g. [Depends, Pre-Depends].",
            ));
        }
        if let Some(i) = fields.iter().position(|f| f.trim().is_empty()) {
            return Err(invalid(
                format!("dependency_fields[{}] must not be empty", i),
                "Each entry names an index field such as 'Depends'.",
            ));
        }
    }

    if let Some(damping) = config.page_rank.and_then(|p| p.damping_factor) {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(invalid(
                format!("page_rank.damping_factor must be between 0 and 1, got {}", damping),
                "The usual value is 0.85.",
            ));
        }
    }

    config.output_format()?;
    config.alternative_policy()?;
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
