//! Builder module for constructing annealing components from configuration
//!
//! This module provides the wiring between configuration records and
//! the cooling schedule and acceptance criterion implementations.

use annealforge_config::{
    AcceptanceCriterionConfig, AcceptanceCriterionType, ConfigError, CoolingScheduleConfig,
};
use tracing::info;

use crate::acceptance::{AcceptanceCriterion, AcceptanceKind};
use crate::schedule::{split_schedule_type, CoolingSchedule};

/// Creates the cooling schedule described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `max_iter` or `cooling_cycle`
/// is zero.
///
/// # Example
///
/// ```
/// use annealforge_config::{CoolingScheduleConfig, CoolingScheduleType};
/// use annealforge_solver::create_cooling_schedule;
///
/// let config = CoolingScheduleConfig::new(CoolingScheduleType::BoundedLinear, 10.0, 1.0, 9);
/// let schedule = create_cooling_schedule(&config).unwrap();
///
/// assert_eq!(schedule.temperature_at(3), 7.0);
/// ```
pub fn create_cooling_schedule(
    config: &CoolingScheduleConfig,
) -> Result<CoolingSchedule, ConfigError> {
    CoolingScheduleBuilder::build(config)
}

/// Creates the acceptance criterion described by `config`, seeded from
/// the bits of `config.seed`.
pub fn create_acceptance_criterion(
    config: &AcceptanceCriterionConfig,
) -> Result<AcceptanceCriterion, ConfigError> {
    AcceptanceCriterionBuilder::build(config)
}

/// Builder for constructing cooling schedules from configuration.
pub struct CoolingScheduleBuilder;

impl CoolingScheduleBuilder {
    /// Builds a cooling schedule from configuration.
    pub fn build(config: &CoolingScheduleConfig) -> Result<CoolingSchedule, ConfigError> {
        config.validate()?;
        let (boundedness, shape) = split_schedule_type(config.schedule_type);
        let schedule = CoolingSchedule::new(
            boundedness,
            shape,
            config.temp_start,
            config.temp_end,
            config.max_iter,
            config.cooling_cycle,
        )?;

        info!(
            event = "cooling_schedule_created",
            schedule_type = %config.schedule_type,
            temp_start = config.temp_start,
            temp_end = config.temp_end,
            max_iter = config.max_iter,
            cooling_cycle = config.cooling_cycle,
        );
        Ok(schedule)
    }
}

/// Builder for constructing acceptance criteria from configuration.
pub struct AcceptanceCriterionBuilder;

impl AcceptanceCriterionBuilder {
    /// Builds an acceptance criterion from configuration.
    pub fn build(config: &AcceptanceCriterionConfig) -> Result<AcceptanceCriterion, ConfigError> {
        config.validate()?;
        let kind = Self::kind(config.criterion_type);

        info!(
            event = "acceptance_criterion_created",
            criterion_type = %config.criterion_type,
            seed = config.seed,
        );
        Ok(AcceptanceCriterion::from_seed(kind, config.random_seed()))
    }

    pub fn kind(criterion_type: AcceptanceCriterionType) -> AcceptanceKind {
        match criterion_type {
            AcceptanceCriterionType::Boltzmann => AcceptanceKind::Boltzmann,
            AcceptanceCriterionType::AdaptiveBoltzmann => AcceptanceKind::AdaptiveBoltzmann,
        }
    }

    /// Creates a Boltzmann criterion.
    pub fn boltzmann(seed: u64) -> AcceptanceCriterion {
        AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, seed)
    }

    /// Creates an adaptive Boltzmann criterion.
    pub fn adaptive_boltzmann(seed: u64) -> AcceptanceCriterion {
        AcceptanceCriterion::from_seed(AcceptanceKind::AdaptiveBoltzmann, seed)
    }
}
