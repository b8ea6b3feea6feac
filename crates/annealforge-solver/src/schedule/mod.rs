//! Cooling schedules.
//!
//! A cooling schedule counts iterations and turns the count into a
//! temperature. The effective iteration only advances at cooling-cycle
//! boundaries, so with `cooling_cycle = k` the temperature moves in steps
//! of `k` iterations.

mod formula;

use annealforge_config::{ConfigError, CoolingScheduleType};
use tracing::debug;

pub use formula::{exponential, linear, logarithmic, progress, Boundedness, CoolingShape};

/// Splits a configured schedule type into its reheat policy and curve.
pub fn split_schedule_type(schedule_type: CoolingScheduleType) -> (Boundedness, CoolingShape) {
    use CoolingScheduleType::*;

    match schedule_type {
        BoundedExponential => (Boundedness::Bounded, CoolingShape::Exponential),
        BoundedLinear => (Boundedness::Bounded, CoolingShape::Linear),
        BoundedLogarithmic => (Boundedness::Bounded, CoolingShape::Logarithmic),
        UnboundedExponential => (Boundedness::Unbounded, CoolingShape::Exponential),
        UnboundedLinear => (Boundedness::Unbounded, CoolingShape::Linear),
        UnboundedLogarithmic => (Boundedness::Unbounded, CoolingShape::Logarithmic),
    }
}

/// Iteration counter and temperature source for one annealing run.
///
/// # Example
///
/// ```
/// use annealforge_solver::schedule::{Boundedness, CoolingSchedule, CoolingShape};
///
/// let mut schedule =
///     CoolingSchedule::new(Boundedness::Bounded, CoolingShape::Linear, 10.0, 1.0, 9, 1).unwrap();
/// assert_eq!(schedule.temperature(), 10.0);
///
/// for _ in 0..3 {
///     schedule.increase_iter_count();
/// }
/// assert_eq!(schedule.temperature(), 7.0);
///
/// schedule.reheat();
/// assert_eq!(schedule.temperature(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingSchedule {
    boundedness: Boundedness,
    shape: CoolingShape,
    temp_start: f64,
    temp_end: f64,
    /// Iterations in one cooling cycle.
    max_iter: u64,
    /// Raw iterations between temperature updates.
    cooling_cycle: u64,
    /// Raw iterations since the last reheat.
    current_iter: u64,
    /// Iteration the temperature formula is evaluated at.
    current_cooling_iter: u64,
    reheat_count: u64,
}

impl CoolingSchedule {
    /// Creates a schedule at iteration 0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `max_iter` or
    /// `cooling_cycle` is zero.
    pub fn new(
        boundedness: Boundedness,
        shape: CoolingShape,
        temp_start: f64,
        temp_end: f64,
        max_iter: u64,
        cooling_cycle: u64,
    ) -> Result<Self, ConfigError> {
        if max_iter == 0 {
            return Err(ConfigError::invalid(
                "max_iter",
                max_iter,
                "must be greater than zero",
            ));
        }
        if cooling_cycle == 0 {
            return Err(ConfigError::invalid(
                "cooling_cycle",
                cooling_cycle,
                "must be at least 1",
            ));
        }
        Ok(Self {
            boundedness,
            shape,
            temp_start,
            temp_end,
            max_iter,
            cooling_cycle,
            current_iter: 0,
            current_cooling_iter: 0,
            reheat_count: 0,
        })
    }

    /// Current temperature. Has no side effects.
    pub fn temperature(&self) -> f64 {
        self.temperature_at(self.current_cooling_iter)
    }

    /// Temperature this schedule reports at effective iteration `cooling_iter`.
    pub fn temperature_at(&self, cooling_iter: u64) -> f64 {
        let temperature =
            self.shape
                .temperature(self.temp_start, self.temp_end, cooling_iter, self.max_iter);
        self.boundedness.apply_floor(temperature, self.temp_end)
    }

    /// Advances the schedule by one raw iteration.
    ///
    /// Bounded schedules reheat once `max_iter` iterations have elapsed.
    /// The effective iteration catches up with the raw count only when the
    /// raw count ends a cooling cycle.
    pub fn increase_iter_count(&mut self) {
        self.current_iter += 1;
        if self.boundedness == Boundedness::Bounded && self.current_iter >= self.max_iter {
            self.restart(true);
        }
        if self.current_iter % self.cooling_cycle == self.cooling_cycle - 1 {
            self.current_cooling_iter = self.current_iter;
        }
    }

    /// Restarts cooling from `temp_start`.
    pub fn reheat(&mut self) {
        self.restart(false);
    }

    fn restart(&mut self, automatic: bool) {
        debug!(
            event = "reheat",
            automatic,
            iterations = self.current_iter,
            temperature = self.temperature(),
            reheat_count = self.reheat_count + 1,
        );
        self.current_iter = 0;
        self.current_cooling_iter = 0;
        self.reheat_count += 1;
    }

    /// The configuration name of this schedule's variant.
    pub fn schedule_type(&self) -> CoolingScheduleType {
        let variant = (self.boundedness, self.shape);
        CoolingScheduleType::ALL
            .into_iter()
            .find(|&t| split_schedule_type(t) == variant)
            .expect("every boundedness and shape pair has a schedule type")
    }

    pub fn boundedness(&self) -> Boundedness {
        self.boundedness
    }

    pub fn shape(&self) -> CoolingShape {
        self.shape
    }

    pub fn temp_start(&self) -> f64 {
        self.temp_start
    }

    pub fn temp_end(&self) -> f64 {
        self.temp_end
    }

    pub fn max_iter(&self) -> u64 {
        self.max_iter
    }

    pub fn cooling_cycle(&self) -> u64 {
        self.cooling_cycle
    }

    /// Raw iterations since the last reheat.
    pub fn current_iter(&self) -> u64 {
        self.current_iter
    }

    /// Effective iteration used by the temperature formula.
    pub fn current_cooling_iter(&self) -> u64 {
        self.current_cooling_iter
    }

    /// Reheats since construction, manual and automatic.
    pub fn reheat_count(&self) -> u64 {
        self.reheat_count
    }
}
