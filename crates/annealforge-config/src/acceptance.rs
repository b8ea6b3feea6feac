//! Acceptance criterion configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{parse_json, parse_toml, parse_yaml, ConfigError};

/// Acceptance criterion variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum AcceptanceCriterionType {
    /// Accept a worsening move with probability `exp(delta / T)`.
    Boltzmann,

    /// Boltzmann acceptance scaled by the gap between best and mean score.
    AdaptiveBoltzmann,
}

impl AcceptanceCriterionType {
    /// Every variant, in declaration order.
    pub const ALL: [AcceptanceCriterionType; 2] = [
        AcceptanceCriterionType::Boltzmann,
        AcceptanceCriterionType::AdaptiveBoltzmann,
    ];

    /// Configuration name of this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            AcceptanceCriterionType::Boltzmann => "boltzmann",
            AcceptanceCriterionType::AdaptiveBoltzmann => "adaptive_boltzmann",
        }
    }
}

impl fmt::Display for AcceptanceCriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcceptanceCriterionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownType {
                family: "acceptance criterion",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for AcceptanceCriterionType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AcceptanceCriterionType> for String {
    fn from(t: AcceptanceCriterionType) -> Self {
        t.as_str().to_string()
    }
}

/// Acceptance criterion configuration.
///
/// The seed is mandatory: two criteria built from the same record produce
/// the same decisions for the same calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AcceptanceCriterionConfig {
    /// Criterion variant.
    #[serde(rename = "type")]
    pub criterion_type: AcceptanceCriterionType,

    /// Seed of the criterion's random source. Any integer, negative
    /// values included.
    pub seed: i64,
}

impl AcceptanceCriterionConfig {
    pub fn new(criterion_type: AcceptanceCriterionType, seed: i64) -> Self {
        Self {
            criterion_type,
            seed,
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        parse_toml(s)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        parse_yaml(s)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        parse_json(s)
    }

    /// Seed for a 64-bit generator, keeping the bits of `seed`, so `-1`
    /// maps to `u64::MAX`.
    pub fn random_seed(&self) -> u64 {
        self.seed as u64
    }

    /// Always succeeds: every well-typed record is valid. Kept for
    /// call-site symmetry with [`CoolingScheduleConfig::validate`].
    ///
    /// [`CoolingScheduleConfig::validate`]: crate::CoolingScheduleConfig::validate
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
