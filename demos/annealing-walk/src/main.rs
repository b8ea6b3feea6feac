//! Annealing Walk Example
//!
//! A walker moves one step left or right on a rugged one-dimensional
//! landscape and tries to find the highest point. Local peaks trap a greedy
//! walker; simulated annealing climbs out of them while it is still hot.
//!
//! Usage:
//!
//! ```text
//! cargo run -p annealing-walk [-- path/to/annealing.toml]
//! ```
//!
//! Without a path the built-in configuration below is used. Set
//! `RUST_LOG=annealforge_solver=debug,annealing_walk=debug` to watch reheats
//! and progress.

use std::env;

use annealforge::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

const DEFAULT_CONFIG: &str = r#"
[cooling_schedule]
type = "bounded_exponential"
temp_start = 40.0
temp_end = 0.05
max_iter = 20000
cooling_cycle = 10

[acceptance_criterion]
type = "adaptive_boltzmann"
seed = 42
"#;

const WIDTH: i64 = 1_000;
const ITERATIONS: u64 = 60_000;
const PROGRESS_EVERY: u64 = 10_000;
const MOVE_SEED: u64 = 7;

/// Height of the landscape at `x`: a broad hill with ripples on top.
fn height(x: i64) -> f64 {
    let x = x as f64;
    let hill = -((x - 700.0) / 120.0).powi(2) * 50.0;
    let ripples = 12.0 * (x / 9.0).sin() + 6.0 * (x / 31.0).cos();
    hill + ripples
}

struct Walk {
    position: i64,
    height: f64,
    best_position: i64,
    best_height: f64,
    accepted: u64,
}

impl Walk {
    fn new(position: i64) -> Self {
        let h = height(position);
        Self {
            position,
            height: h,
            best_position: position,
            best_height: h,
            accepted: 0,
        }
    }
}

fn main() -> Result<(), ConfigError> {
    annealforge::console::init_with_filter("annealforge_solver=info,annealing_walk=info");

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            AnnealingConfig::load(&path)?
        }
        None => AnnealingConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    config.validate()?;

    let mut schedule = create_cooling_schedule(&config.cooling_schedule)?;
    let mut criterion = create_acceptance_criterion(&config.acceptance_criterion)?;

    let walk = anneal(&mut schedule, &mut criterion);

    info!(
        event = "run_end",
        best_position = walk.best_position,
        best_height = walk.best_height,
        accepted = walk.accepted,
        reheats = schedule.reheat_count(),
    );
    println!(
        "\nBest position {} with height {:.3} ({} of {} moves accepted, {} reheats)",
        walk.best_position,
        walk.best_height,
        walk.accepted,
        ITERATIONS,
        schedule.reheat_count()
    );
    Ok(())
}

fn anneal(schedule: &mut CoolingSchedule, criterion: &mut AcceptanceCriterion) -> Walk {
    let mut moves = ChaCha8Rng::seed_from_u64(MOVE_SEED);
    let mut walk = Walk::new(0);
    criterion.update_score(walk.height);

    info!(
        event = "run_start",
        schedule = %schedule.schedule_type(),
        iterations = ITERATIONS,
        start_height = walk.height,
    );

    for iteration in 1..=ITERATIONS {
        let temperature = schedule.temperature();

        let step = if moves.random::<bool>() { 1 } else { -1 };
        let candidate = (walk.position + step).clamp(0, WIDTH);
        let candidate_height = height(candidate);

        if criterion.accept(candidate_height - walk.height, temperature) {
            walk.position = candidate;
            walk.height = candidate_height;
            walk.accepted += 1;
            if walk.height > walk.best_height {
                walk.best_position = walk.position;
                walk.best_height = walk.height;
            }
        }
        criterion.update_score(candidate_height);

        if iteration % PROGRESS_EVERY == 0 {
            debug!(
                event = "progress",
                iteration,
                temperature,
                position = walk.position,
                height = walk.height,
                best_height = walk.best_height,
            );
        }

        schedule.increase_iter_count();
    }

    walk
}
