//! Temperature curves.
//!
//! Pure functions of the schedule parameters and the effective iteration.

/// Shape of the temperature curve between `temp_start` and `temp_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoolingShape {
    /// `temp_start * (temp_end / temp_start)^(i / max_iter)`
    Exponential,
    /// `temp_start - (temp_start - temp_end) * i / max_iter`
    Linear,
    /// `temp_start - (temp_start - temp_end) * ln(i + 1) / ln(max_iter + 1)`
    Logarithmic,
}

impl CoolingShape {
    /// Temperature at effective iteration `cooling_iter` of a cycle of
    /// `max_iter` iterations.
    ///
    /// Returns `temp_start` at iteration 0 and exactly `temp_end` at
    /// `max_iter`. Past `max_iter` the curve keeps going; callers that need
    /// a floor apply [`Boundedness::apply_floor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use annealforge_solver::schedule::CoolingShape;
    ///
    /// assert_eq!(CoolingShape::Linear.temperature(10.0, 1.0, 3, 9), 7.0);
    /// assert_eq!(CoolingShape::Exponential.temperature(100.0, 10.0, 10, 10), 10.0);
    /// ```
    pub fn temperature(self, temp_start: f64, temp_end: f64, cooling_iter: u64, max_iter: u64) -> f64 {
        if cooling_iter == max_iter {
            return temp_end;
        }
        match self {
            CoolingShape::Exponential => {
                exponential(temp_start, temp_end, progress(cooling_iter, max_iter))
            }
            CoolingShape::Linear => linear(temp_start, temp_end, progress(cooling_iter, max_iter)),
            CoolingShape::Logarithmic => logarithmic(temp_start, temp_end, cooling_iter, max_iter),
        }
    }
}

/// Whether a schedule restarts on its own and whether it is floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundedness {
    /// Reheats automatically every `max_iter` iterations. No floor.
    Bounded,
    /// Reheats only on request. Temperature never drops below `temp_end`.
    Unbounded,
}

impl Boundedness {
    /// Clamps `temperature` to `temp_end` for unbounded schedules.
    pub fn apply_floor(self, temperature: f64, temp_end: f64) -> f64 {
        match self {
            Boundedness::Bounded => temperature,
            Boundedness::Unbounded => temperature.max(temp_end),
        }
    }
}

/// Fraction of the cycle completed, `i / max_iter`.
#[inline]
pub fn progress(cooling_iter: u64, max_iter: u64) -> f64 {
    cooling_iter as f64 / max_iter as f64
}

/// Geometric interpolation from `temp_start` to `temp_end`.
///
/// Both temperatures must be positive.
#[inline]
pub fn exponential(temp_start: f64, temp_end: f64, progress: f64) -> f64 {
    temp_start * (temp_end / temp_start).powf(progress)
}

/// Straight-line interpolation from `temp_start` to `temp_end`.
#[inline]
pub fn linear(temp_start: f64, temp_end: f64, progress: f64) -> f64 {
    temp_start - (temp_start - temp_end) * progress
}

/// Drops fast early and slowly later, reaching `temp_end` at `max_iter`.
///
/// Takes raw iterations rather than progress; the curve is shaped by
/// `ln(cooling_iter + 1)`.
#[inline]
pub fn logarithmic(temp_start: f64, temp_end: f64, cooling_iter: u64, max_iter: u64) -> f64 {
    temp_start
        - (temp_start - temp_end) * (cooling_iter as f64 + 1.0).ln() / (max_iter as f64 + 1.0).ln()
}
