//! CLI configuration.
//!
//! Sources, highest precedence first:
//! 1. Environment variables (`QLIST_PARAMETRIZATION`, `QLIST_DEGREES`)
//! 2. Configuration file (YAML)
//! 3. Default values

use std::path::Path;

use anyhow::{Context, Result};
use qlist_gates::ParametrizationKind;
use serde::{Deserialize, Serialize};

/// Settings shared by the gate-printing commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// How unitaries are produced (`closed-form` or `general-u2`).
    pub parametrization: ParametrizationKind,

    /// Interpret command-line angles as degrees instead of radians.
    pub degrees: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            parametrization: ParametrizationKind::ClosedForm,
            degrees: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// File (or defaults), then environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides for the variables `lookup` reports as set.
    fn merge_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(v) = lookup("QLIST_PARAMETRIZATION") {
            self.parametrization = serde_yaml_ng::from_str(&v)
                .with_context(|| format!("Invalid QLIST_PARAMETRIZATION: '{v}'"))?;
        }
        if let Some(v) = lookup("QLIST_DEGREES") {
            self.degrees = matches!(v.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(self)
    }

    /// Convert a command-line angle to radians.
    pub fn to_radians(&self, angle: f64) -> f64 {
        if self.degrees {
            angle.to_radians()
        } else {
            angle
        }
    }
}
