//! Benchmark command
//!
//! Tests solver performance on a random sample of secrets.

use super::SolverSetup;
use crate::error::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Games longer than this count as failures
pub const MAX_GUESSES: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub failures: usize,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Solve `count` distinct secrets drawn with `seed`
///
/// The same seed always draws the same secrets; `count` is capped at the size
/// of the game.
///
/// # Errors
///
/// Propagates solver errors.
pub fn run_benchmark(setup: &SolverSetup, count: usize, seed: u64) -> Result<BenchmarkResult> {
    benchmark_with_limit(setup, count, seed, MAX_GUESSES)
}

/// Guess totals, the range and the distribution cover solved games only
fn benchmark_with_limit(
    setup: &SolverSetup,
    count: usize,
    seed: u64,
    limit: usize,
) -> Result<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let secrets: Vec<_> = setup.universe().choose_multiple(&mut rng, count).collect();
    log::info!("benchmarking {} on {} secrets", setup.method().name(), secrets.len());

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failures = 0;
    let mut distribution = BTreeMap::new();

    for secret in &secrets {
        let history = setup.play(secret, limit)?;
        let guesses = history.len();

        let solved = history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_solved(setup.game().pins()));
        if !solved {
            log::warn!("{secret} not solved in {limit} guesses");
            failures += 1;
            continue;
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();
    let solved = total_secrets - failures;

    Ok(BenchmarkResult {
        total_secrets,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
