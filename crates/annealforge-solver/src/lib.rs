//! AnnealForge Solver Engine
//!
//! This crate provides the control policies of simulated annealing:
//! - Cooling schedules (bounded and unbounded; exponential, linear and logarithmic)
//! - Acceptance criteria (Boltzmann and adaptive Boltzmann)
//! - Configuration wiring (builder module)
//!
//! The search loop itself lives with the caller. Each iteration it reads
//! the schedule's temperature, asks the criterion about a move, reports the
//! evaluated score and advances the schedule:
//!
//! ```
//! use annealforge_config::AnnealingConfig;
//! use annealforge_solver::{create_acceptance_criterion, create_cooling_schedule};
//!
//! let config = AnnealingConfig::from_toml_str(r#"
//!     [cooling_schedule]
//!     type = "unbounded_linear"
//!     temp_start = 5.0
//!     temp_end = 0.5
//!     max_iter = 100
//!
//!     [acceptance_criterion]
//!     type = "boltzmann"
//!     seed = 7
//! "#).unwrap();
//!
//! let mut schedule = create_cooling_schedule(&config.cooling_schedule).unwrap();
//! let mut criterion = create_acceptance_criterion(&config.acceptance_criterion).unwrap();
//!
//! let mut score = 0.0;
//! for step in 0..100 {
//!     let temperature = schedule.temperature();
//!     let delta = if step % 3 == 0 { 1.0 } else { -0.5 };
//!     if criterion.accept(delta, temperature) {
//!         score += delta;
//!     }
//!     criterion.update_score(score);
//!     schedule.increase_iter_count();
//! }
//!
//! assert_eq!(schedule.temperature(), 0.5);
//! ```

pub mod acceptance;
pub mod builder;
pub mod schedule;

pub use acceptance::{AcceptanceCriterion, AcceptanceKind, ScoreStatistics};
pub use annealforge_config::ConfigError;
pub use builder::{
    create_acceptance_criterion, create_cooling_schedule, AcceptanceCriterionBuilder,
    CoolingScheduleBuilder,
};
pub use schedule::{Boundedness, CoolingSchedule, CoolingShape};
