//! Running score statistics.

/// Best score before any score has been recorded.
pub const INITIAL_BEST_SCORE: f64 = -1e18;

/// Best, sum and count of the scores observed during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStatistics {
    best_score: f64,
    sum_of_scores: f64,
    num_of_scores: u64,
}

impl ScoreStatistics {
    pub fn new() -> Self {
        Self {
            best_score: INITIAL_BEST_SCORE,
            sum_of_scores: 0.0,
            num_of_scores: 0,
        }
    }

    /// Records one observed score.
    pub fn record(&mut self, score: f64) {
        self.sum_of_scores += score;
        self.num_of_scores += 1;
        if score > self.best_score {
            self.best_score = score;
        }
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn sum_of_scores(&self) -> f64 {
        self.sum_of_scores
    }

    pub fn num_of_scores(&self) -> u64 {
        self.num_of_scores
    }

    /// Mean of the recorded scores, `None` before the first one.
    pub fn mean(&self) -> Option<f64> {
        (self.num_of_scores > 0).then(|| self.sum_of_scores / self.num_of_scores as f64)
    }

    /// Distance from the mean score up to the best score.
    pub fn average_gap(&self) -> Option<f64> {
        self.mean().map(|mean| self.best_score - mean)
    }
}

impl Default for ScoreStatistics {
    fn default() -> Self {
        Self::new()
    }
}
