//! Acceptance criteria for simulated annealing moves.
//!
//! A criterion decides whether a move with score change `delta` is taken
//! at a given temperature. Improving moves (`delta > 0`) are always taken.
//! Other moves are taken with a Boltzmann probability drawn against the
//! criterion's own random source, so a criterion built from a fixed seed
//! replays the same decisions for the same calls.

mod statistics;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

pub use statistics::{ScoreStatistics, INITIAL_BEST_SCORE};

/// Acceptance probability rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptanceKind {
    /// `P = exp(delta / T)`
    Boltzmann,
    /// `P = exp(delta / (gap * T))`, where `gap` is best score minus mean score.
    AdaptiveBoltzmann,
}

/// Move acceptance policy with running score statistics and an owned
/// random source.
///
/// # Example
///
/// ```
/// use annealforge_solver::acceptance::{AcceptanceCriterion, AcceptanceKind};
///
/// let mut criterion = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, 42);
///
/// // Improving moves are always accepted.
/// assert!(criterion.accept(0.5, 1.0));
///
/// // Worsening moves depend on the temperature and the random source.
/// let _taken = criterion.accept(-2.0, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceCriterion<R = ChaCha8Rng> {
    kind: AcceptanceKind,
    statistics: ScoreStatistics,
    rng: R,
}

impl AcceptanceCriterion<ChaCha8Rng> {
    /// Creates a criterion whose random source is seeded with `seed`.
    pub fn from_seed(kind: AcceptanceKind, seed: u64) -> Self {
        Self::with_rng(kind, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> AcceptanceCriterion<R> {
    /// Creates a criterion drawing from `rng`.
    pub fn with_rng(kind: AcceptanceKind, rng: R) -> Self {
        Self {
            kind,
            statistics: ScoreStatistics::new(),
            rng,
        }
    }

    /// Records the score of an evaluated candidate.
    pub fn update_score(&mut self, score: f64) {
        self.statistics.record(score);
    }

    /// Decides whether to take a move changing the score by `delta`.
    ///
    /// A positive delta is accepted without touching the random source.
    /// Otherwise one uniform value `u` in `[0, 1)` is drawn and the move is
    /// accepted iff the acceptance probability exceeds `u`.
    ///
    /// For [`AcceptanceKind::AdaptiveBoltzmann`], a zero or negative gap
    /// between best and mean score yields probability 0.
    ///
    /// # Panics
    ///
    /// Panics for [`AcceptanceKind::AdaptiveBoltzmann`] when `delta <= 0`
    /// and [`update_score`](Self::update_score) has never been called.
    pub fn accept(&mut self, delta: f64, temperature: f64) -> bool {
        if delta > 0.0 {
            return true;
        }

        let probability = match self.kind {
            AcceptanceKind::Boltzmann => (delta / temperature).exp(),
            AcceptanceKind::AdaptiveBoltzmann => {
                let Some(gap) = self.statistics.average_gap() else {
                    panic!(
                        "adaptive Boltzmann acceptance needs at least one update_score call \
                         before judging a non-improving move"
                    );
                };
                if gap > 0.0 {
                    (delta / gap / temperature).exp()
                } else {
                    0.0
                }
            }
        };

        let draw: f64 = self.rng.random();
        let accepted = probability > draw;
        trace!(
            event = "accept",
            kind = ?self.kind,
            delta,
            temperature,
            probability,
            draw,
            accepted,
        );
        accepted
    }

    pub fn kind(&self) -> AcceptanceKind {
        self.kind
    }

    pub fn statistics(&self) -> &ScoreStatistics {
        &self.statistics
    }

    /// Best score recorded so far, [`INITIAL_BEST_SCORE`] before any.
    pub fn best_score(&self) -> f64 {
        self.statistics.best_score()
    }

    /// The random source, for inspecting its state.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
mod tests;
