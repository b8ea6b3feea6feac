//! Tests for acceptance criteria.

use super::*;

/// Generator that returns the same word forever.
#[derive(Debug, Clone, PartialEq)]
struct FixedRng {
    word: u64,
    draws: usize,
}

impl FixedRng {
    /// Every `f64` draw is 0.0.
    fn lowest() -> Self {
        Self { word: 0, draws: 0 }
    }

    /// Every `f64` draw is just below 1.0.
    fn highest() -> Self {
        Self {
            word: u64::MAX,
            draws: 0,
        }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        dst.fill(self.word as u8);
    }
}

const TEMPERATURES: [f64; 6] = [1e-9, 0.01, 1.0, 10.0, 1e6, 0.0];

#[test]
fn test_statistics_start_empty() {
    let stats = ScoreStatistics::new();
    assert_eq!(stats.best_score(), INITIAL_BEST_SCORE);
    assert_eq!(stats.num_of_scores(), 0);
    assert_eq!(stats.mean(), None);
    assert_eq!(stats.average_gap(), None);
}

#[test]
fn test_statistics_accumulate() {
    let mut stats = ScoreStatistics::default();
    stats.record(-10.0);
    stats.record(-4.0);
    stats.record(-7.0);

    assert_eq!(stats.best_score(), -4.0);
    assert_eq!(stats.sum_of_scores(), -21.0);
    assert_eq!(stats.num_of_scores(), 3);
    assert_eq!(stats.mean(), Some(-7.0));
    assert_eq!(stats.average_gap(), Some(3.0));
}

#[test]
fn test_update_score_always_accumulates() {
    for kind in [AcceptanceKind::Boltzmann, AcceptanceKind::AdaptiveBoltzmann] {
        let mut criterion = AcceptanceCriterion::from_seed(kind, 1);
        criterion.update_score(2.0);
        criterion.update_score(5.0);
        assert_eq!(criterion.statistics().num_of_scores(), 2);
        assert_eq!(criterion.best_score(), 5.0);
    }
}

#[test]
fn test_positive_delta_always_accepted_without_drawing() {
    for kind in [AcceptanceKind::Boltzmann, AcceptanceKind::AdaptiveBoltzmann] {
        let mut criterion = AcceptanceCriterion::from_seed(kind, 7);
        let before = criterion.rng().clone();

        for temperature in TEMPERATURES {
            for delta in [1e-12, 0.5, 3.0, 1e9] {
                assert!(criterion.accept(delta, temperature));
            }
        }

        assert_eq!(*criterion.rng(), before);
    }
}

#[test]
fn test_non_improving_move_draws_once() {
    let mut criterion = AcceptanceCriterion::with_rng(AcceptanceKind::Boltzmann, FixedRng::lowest());
    criterion.accept(-1.0, 1.0);
    criterion.accept(0.0, 1.0);
    assert_eq!(criterion.rng().draws, 2);
}

#[test]
fn test_boltzmann_probability_against_fixed_draws() {
    // u = 0: anything with positive probability passes.
    let mut low = AcceptanceCriterion::with_rng(AcceptanceKind::Boltzmann, FixedRng::lowest());
    assert!(low.accept(-1.0, 1.0));
    assert!(low.accept(0.0, 1.0));
    assert!(!low.accept(-1e6, 1e-3));

    // u just below 1: only probability 1 passes.
    let mut high = AcceptanceCriterion::with_rng(AcceptanceKind::Boltzmann, FixedRng::highest());
    assert!(high.accept(0.0, 1.0));
    assert!(!high.accept(-1e-3, 1.0));
}

#[test]
fn test_boltzmann_acceptance_rate() {
    let mut criterion = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, 2024);
    let trials = 20_000;
    let accepted = (0..trials).filter(|_| criterion.accept(-1.0, 1.0)).count();
    let rate = accepted as f64 / trials as f64;

    let expected = (-1.0f64).exp();
    assert!(
        (rate - expected).abs() < 0.02,
        "acceptance rate {rate} too far from {expected}"
    );
}

#[test]
fn test_colder_rejects_more() {
    let mut hot = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, 5);
    let mut cold = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, 5);

    let hot_count = (0..5_000).filter(|_| hot.accept(-1.0, 10.0)).count();
    let cold_count = (0..5_000).filter(|_| cold.accept(-1.0, 0.1)).count();
    assert!(hot_count > cold_count);
}

#[test]
fn test_same_seed_same_decisions() {
    let calls: Vec<(f64, f64)> = (0..500)
        .map(|i| (-((i % 17) as f64) * 0.3, 0.5 + (i % 5) as f64))
        .collect();

    let run = |seed: u64| {
        let mut criterion = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, seed);
        calls
            .iter()
            .map(|&(delta, temperature)| criterion.accept(delta, temperature))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_adaptive_with_unit_gap_matches_boltzmann() {
    let mut plain = AcceptanceCriterion::from_seed(AcceptanceKind::Boltzmann, 11);
    let mut adaptive = AcceptanceCriterion::from_seed(AcceptanceKind::AdaptiveBoltzmann, 11);
    // best = 1, mean = 0, gap = 1
    adaptive.update_score(1.0);
    adaptive.update_score(-1.0);
    assert_eq!(adaptive.statistics().average_gap(), Some(1.0));

    for i in 0..1_000 {
        let delta = -((i % 13) as f64) * 0.25;
        let temperature = 0.2 + (i % 7) as f64;
        assert_eq!(
            plain.accept(delta, temperature),
            adaptive.accept(delta, temperature),
            "diverged at call {i}"
        );
    }
}

#[test]
fn test_adaptive_scales_by_gap() {
    let mut criterion =
        AcceptanceCriterion::from_seed(AcceptanceKind::AdaptiveBoltzmann, 99);
    // best = 10, mean = 5, gap = 5: delta -5 at T = 1 behaves like exp(-1).
    criterion.update_score(10.0);
    criterion.update_score(0.0);

    let trials = 20_000;
    let accepted = (0..trials).filter(|_| criterion.accept(-5.0, 1.0)).count();
    let rate = accepted as f64 / trials as f64;
    assert!((rate - (-1.0f64).exp()).abs() < 0.02, "rate {rate}");
}

#[test]
fn test_adaptive_zero_gap_rejects_but_draws() {
    let mut criterion =
        AcceptanceCriterion::with_rng(AcceptanceKind::AdaptiveBoltzmann, FixedRng::lowest());
    criterion.update_score(3.0);
    assert_eq!(criterion.statistics().average_gap(), Some(0.0));

    assert!(!criterion.accept(0.0, 1.0));
    assert!(!criterion.accept(-1.0, 100.0));
    assert_eq!(criterion.rng().draws, 2);
    assert!(criterion.accept(1.0, 100.0));
}

#[test]
fn test_adaptive_positive_delta_needs_no_scores() {
    let mut criterion = AcceptanceCriterion::from_seed(AcceptanceKind::AdaptiveBoltzmann, 0);
    assert!(criterion.accept(2.0, 1.0));
}

#[test]
#[should_panic(expected = "update_score")]
fn test_adaptive_without_scores_panics() {
    let mut criterion = AcceptanceCriterion::from_seed(AcceptanceKind::AdaptiveBoltzmann, 0);
    criterion.accept(-1.0, 1.0);
}
