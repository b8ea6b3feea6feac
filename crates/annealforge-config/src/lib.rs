//! Configuration system for AnnealForge.
//!
//! Describe a cooling schedule and an acceptance criterion in TOML, YAML
//! or JSON and hand the parsed records to the solver factories.
//!
//! # Examples
//!
//! Load a whole annealing run from a TOML string:
//!
//! ```
//! use annealforge_config::{AcceptanceCriterionType, AnnealingConfig, CoolingScheduleType};
//!
//! let config = AnnealingConfig::from_toml_str(r#"
//!     [cooling_schedule]
//!     type = "bounded_exponential"
//!     temp_start = 100.0
//!     temp_end = 0.1
//!     max_iter = 5000
//!     cooling_cycle = 10
//!
//!     [acceptance_criterion]
//!     type = "adaptive_boltzmann"
//!     seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.cooling_schedule.schedule_type, CoolingScheduleType::BoundedExponential);
//! assert_eq!(config.cooling_schedule.cooling_cycle, 10);
//! assert_eq!(config.acceptance_criterion.criterion_type, AcceptanceCriterionType::AdaptiveBoltzmann);
//! ```
//!
//! Unknown types are rejected while parsing, naming the offending value:
//!
//! ```
//! use annealforge_config::CoolingScheduleConfig;
//!
//! let err = CoolingScheduleConfig::from_toml_str(r#"
//!     type = "unknown"
//!     temp_start = 1.0
//!     temp_end = 0.5
//!     max_iter = 10
//! "#).unwrap_err();
//!
//! assert!(err.to_string().contains("unknown"));
//! ```

mod acceptance;
mod cooling;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use acceptance::{AcceptanceCriterionConfig, AcceptanceCriterionType};
pub use cooling::{CoolingScheduleConfig, CoolingScheduleType, DEFAULT_COOLING_CYCLE};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The `type` key names a variant this build does not know.
    #[error("Unknown {family} type: {value}")]
    UnknownType { family: &'static str, value: String },

    /// A field holds a value outside its valid range.
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    /// Builds an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        ConfigError::InvalidValue {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

/// Configuration for a complete annealing run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AnnealingConfig {
    /// Temperature trajectory.
    pub cooling_schedule: CoolingScheduleConfig,

    /// Move acceptance policy.
    pub acceptance_criterion: AcceptanceCriterionConfig,
}

impl AnnealingConfig {
    /// Creates a configuration from its two parts.
    pub fn new(
        cooling_schedule: CoolingScheduleConfig,
        acceptance_criterion: AcceptanceCriterionConfig,
    ) -> Self {
        Self {
            cooling_schedule,
            acceptance_criterion,
        }
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, `.json` as JSON, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        parse_toml(s)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        parse_yaml(s)
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        parse_json(s)
    }

    /// Checks both parts for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cooling_schedule.validate()?;
        self.acceptance_criterion.validate()
    }
}

pub(crate) fn parse_toml<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(s)?)
}

pub(crate) fn parse_yaml<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(s)?)
}

pub(crate) fn parse_json<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(s)?)
}
