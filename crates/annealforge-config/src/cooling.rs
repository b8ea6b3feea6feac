//! Cooling schedule configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{parse_json, parse_toml, parse_yaml, ConfigError};

/// Iterations between temperature updates when `cooling_cycle` is omitted.
pub const DEFAULT_COOLING_CYCLE: u64 = 1;

/// Cooling schedule variants.
///
/// Bounded schedules reheat on their own after `max_iter` iterations.
/// Unbounded schedules never reheat on their own and never cool below
/// `temp_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum CoolingScheduleType {
    /// Geometric decay from `temp_start` to `temp_end`, reheating every `max_iter`.
    BoundedExponential,

    /// Straight-line decay from `temp_start` to `temp_end`, reheating every `max_iter`.
    BoundedLinear,

    /// Logarithmic decay from `temp_start` to `temp_end`, reheating every `max_iter`.
    BoundedLogarithmic,

    /// Geometric decay floored at `temp_end`.
    UnboundedExponential,

    /// Straight-line decay floored at `temp_end`.
    UnboundedLinear,

    /// Logarithmic decay floored at `temp_end`.
    UnboundedLogarithmic,
}

impl CoolingScheduleType {
    /// Every variant, in declaration order.
    pub const ALL: [CoolingScheduleType; 6] = [
        CoolingScheduleType::BoundedExponential,
        CoolingScheduleType::BoundedLinear,
        CoolingScheduleType::BoundedLogarithmic,
        CoolingScheduleType::UnboundedExponential,
        CoolingScheduleType::UnboundedLinear,
        CoolingScheduleType::UnboundedLogarithmic,
    ];

    /// Configuration name of this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            CoolingScheduleType::BoundedExponential => "bounded_exponential",
            CoolingScheduleType::BoundedLinear => "bounded_linear",
            CoolingScheduleType::BoundedLogarithmic => "bounded_logarithmic",
            CoolingScheduleType::UnboundedExponential => "unbounded_exponential",
            CoolingScheduleType::UnboundedLinear => "unbounded_linear",
            CoolingScheduleType::UnboundedLogarithmic => "unbounded_logarithmic",
        }
    }
}

impl fmt::Display for CoolingScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoolingScheduleType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownType {
                family: "cooling schedule",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for CoolingScheduleType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoolingScheduleType> for String {
    fn from(t: CoolingScheduleType) -> Self {
        t.as_str().to_string()
    }
}

/// Cooling schedule configuration.
///
/// # Examples
///
/// ```
/// use annealforge_config::{CoolingScheduleConfig, CoolingScheduleType};
///
/// let config = CoolingScheduleConfig::new(CoolingScheduleType::UnboundedLinear, 50.0, 0.5, 1000)
///     .with_cooling_cycle(25);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cooling_cycle, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CoolingScheduleConfig {
    /// Schedule variant.
    #[serde(rename = "type")]
    pub schedule_type: CoolingScheduleType,

    /// Temperature at iteration 0.
    pub temp_start: f64,

    /// Terminal temperature, and the floor of unbounded schedules.
    pub temp_end: f64,

    /// Iterations over which one cooling cycle runs from start to end.
    pub max_iter: u64,

    /// Raw iterations between temperature updates.
    #[serde(default = "default_cooling_cycle")]
    pub cooling_cycle: u64,
}

fn default_cooling_cycle() -> u64 {
    DEFAULT_COOLING_CYCLE
}

impl CoolingScheduleConfig {
    /// Creates a configuration with the default cooling cycle.
    pub fn new(
        schedule_type: CoolingScheduleType,
        temp_start: f64,
        temp_end: f64,
        max_iter: u64,
    ) -> Self {
        Self {
            schedule_type,
            temp_start,
            temp_end,
            max_iter,
            cooling_cycle: DEFAULT_COOLING_CYCLE,
        }
    }

    /// Sets the number of raw iterations between temperature updates.
    pub fn with_cooling_cycle(mut self, cooling_cycle: u64) -> Self {
        self.cooling_cycle = cooling_cycle;
        self
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

    /// Rejects iteration counts the schedule cannot divide by.
    ///
    /// Temperatures are not range-checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iter == 0 {
            return Err(ConfigError::invalid(
                "max_iter",
                self.max_iter,
                "must be greater than zero",
            ));
        }
        if self.cooling_cycle == 0 {
            return Err(ConfigError::invalid(
                "cooling_cycle",
                self.cooling_cycle,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
