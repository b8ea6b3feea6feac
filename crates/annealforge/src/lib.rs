//! AnnealForge - Simulated Annealing Control Policies in Rust
//!
//! Cooling schedules and acceptance criteria, built from a configuration
//! file. Bring your own search loop.
//!
//! # Example
//!
//! ```rust
//! use annealforge::prelude::*;
//!
//! let config = AnnealingConfig::new(
//!     CoolingScheduleConfig::new(CoolingScheduleType::BoundedExponential, 100.0, 1.0, 1_000),
//!     AcceptanceCriterionConfig::new(AcceptanceCriterionType::Boltzmann, 42),
//! );
//!
//! let schedule = create_cooling_schedule(&config.cooling_schedule).unwrap();
//! let mut criterion = create_acceptance_criterion(&config.acceptance_criterion).unwrap();
//!
//! assert_eq!(schedule.temperature(), 100.0);
//! assert!(criterion.accept(1.0, schedule.temperature()));
//! ```

// Configuration records
pub use annealforge_config::{
    AcceptanceCriterionConfig, AcceptanceCriterionType, AnnealingConfig, ConfigError,
    CoolingScheduleConfig, CoolingScheduleType, DEFAULT_COOLING_CYCLE,
};

// Cooling schedules and acceptance criteria
pub use annealforge_solver::{
    acceptance, schedule, AcceptanceCriterion, AcceptanceKind, Boundedness, CoolingSchedule,
    CoolingShape, ScoreStatistics,
};

// Factories
pub use annealforge_solver::{
    create_acceptance_criterion, create_cooling_schedule, AcceptanceCriterionBuilder,
    CoolingScheduleBuilder,
};

/// Console output for annealing runs.
#[cfg(feature = "console")]
pub use annealforge_console as console;

pub mod prelude {
    pub use super::{
        AcceptanceCriterionConfig, AcceptanceCriterionType, AnnealingConfig, ConfigError,
        CoolingScheduleConfig, CoolingScheduleType,
    };
    pub use super::{AcceptanceCriterion, AcceptanceKind, CoolingSchedule};
    pub use super::{create_acceptance_criterion, create_cooling_schedule};
}
