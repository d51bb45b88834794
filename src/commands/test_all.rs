//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every secret of the game and generates statistics.

use super::SolverSetup;
use super::benchmark::MAX_GUESSES;
use crate::core::{Combination, GameConfig};
use crate::error::Result;
use crate::output::formatters::share_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Lowest possible average for the classic game (Koyama and Lai, 1993)
pub const CLASSIC_OPTIMAL_AVERAGE: f64 = 5625.0 / 1296.0;

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Combination,
    pub guesses: Vec<Combination>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub game: GameConfig,
    pub method: &'static str,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: Vec<Combination>,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Secrets that needed `max_guesses`, in order
    pub worst_secrets: Vec<Combination>,
    pub first_guess_used: FxHashMap<Combination, usize>,
    pub cache_entries: usize,
    pub cache_hits: usize,
}

/// Run the solver on every secret (or the first `limit` of them)
///
/// Secrets are solved in parallel; all games share the setup's guess cache.
///
/// # Errors
///
/// Propagates the first solver error.
pub fn run_test_all(
    setup: &SolverSetup,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let universe = setup.universe();
    let secrets = &universe[..limit.unwrap_or(universe.len()).min(universe.len())];
    log::info!("testing {} on {} secrets", setup.method().name(), secrets.len());

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(setup.method().name());

    let total_start = Instant::now();

    let results = secrets
        .par_iter()
        .map(|secret| -> Result<SecretTestResult> {
            let history = setup.play(secret, MAX_GUESSES)?;
            pb.inc(1);

            let success = history
                .last()
                .is_some_and(|(_, feedback)| feedback.is_solved(setup.game().pins()));
            Ok(SecretTestResult {
                secret: secret.clone(),
                guesses: history.into_iter().map(|(guess, _)| guess).collect(),
                success,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("complete");
    let total_time = total_start.elapsed();

    Ok(summarize(setup, &results, total_time))
}

fn summarize(
    setup: &SolverSetup,
    results: &[SecretTestResult],
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut first_guess_used = FxHashMap::default();
    let mut failed = Vec::new();
    let mut total_guesses = 0;

    for result in results {
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
        if result.success {
            total_guesses += result.guesses.len();
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed.push(result.secret.clone());
        }
    }

    let solved = results.len() - failed.len();
    let max_guesses = guess_distribution.keys().next_back().copied().unwrap_or(0);
    let min_guesses = guess_distribution.keys().next().copied().unwrap_or(0);

    let worst_secrets = results
        .iter()
        .filter(|r| r.success && r.guesses.len() == max_guesses)
        .map(|r| r.secret.clone())
        .collect();

    TestAllStatistics {
        game: *setup.game(),
        method: setup.method().name(),
        total_secrets: results.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        max_guesses,
        min_guesses,
        worst_secrets,
        first_guess_used,
        cache_entries: setup.cache().len(),
        cache_hits: setup.cache().hits(),
    }
}

/// Print test-all statistics
#[allow(clippy::too_many_lines)]
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(
        " {} on {} colors, {} pins ",
        stats.method,
        stats.game.colors(),
        stats.game.pins()
    );
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
        for secret in stats.failed.iter().take(5) {
            println!("    {}", secret.to_string().red());
        }
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.4}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:           {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per secret:      {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );
    println!(
        "  Cached guesses:       {} ({} hits)",
        stats.cache_entries, stats.cache_hits
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().max().copied().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = share_bar(count, max_count, 40);
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    // Information theory metrics
    println!("\n🧮 Information Theory Metrics");
    let total_bits = total.log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:    {total_bits:.2} bits");
    println!("  Bits per guess:       {bits_per_guess:.2} bits");

    if !stats.worst_secrets.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Secrets ({} guesses)", stats.max_guesses).yellow().bold()
        );
        let shown: Vec<String> =
            stats.worst_secrets.iter().take(10).map(ToString::to_string).collect();
        println!("  {}", shown.join(" ").yellow());
        if stats.worst_secrets.len() > shown.len() {
            println!("  ... and {} more", stats.worst_secrets.len() - shown.len());
        }
    }

    // First guess analysis
    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&Combination, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (guess, count) in first_guesses.iter().take(5) {
        println!(
            "  {guess}: {count} times ({:.1}%)",
            **count as f64 / total * 100.0
        );
    }

    if !stats.game.is_classic() || stats.solved == 0 {
        return;
    }

    // Theoretical comparison
    println!("\n📐 {}", "Theoretical Comparison".bright_cyan().bold());
    println!(
        "  Our average:          {} guesses",
        format!("{:.4}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Theoretical optimal:  {CLASSIC_OPTIMAL_AVERAGE:.4} guesses");

    let difference = stats.average_guesses - CLASSIC_OPTIMAL_AVERAGE;
    let diff_str = format!("{difference:+.4} guesses");
    let colored_diff = if difference.abs() < 0.05 {
        diff_str.green()
    } else if difference.abs() < 0.15 {
        diff_str.yellow()
    } else {
        diff_str.red()
    };
    println!("  Difference:           {colored_diff}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Method;
    use crate::solver::StrategyType;

    fn small_setup(strategy: StrategyType) -> SolverSetup {
        SolverSetup::new(GameConfig::new(4, 3).unwrap(), Method::Strategy(strategy)).unwrap()
    }

    #[test]
    fn covers_every_secret() {
        let stats = run_test_all(&small_setup(StrategyType::Minimax), None, false).unwrap();

        assert_eq!(stats.total_secrets, 64);
        assert_eq!(stats.solved, 64);
        assert!(stats.failed.is_empty());
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 64);
        assert_eq!(stats.max_guesses, 4);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.method, "minimax");
    }

    #[test]
    fn every_game_opens_the_same_way() {
        let stats = run_test_all(&small_setup(StrategyType::Entropy), None, false).unwrap();

        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.get(&"123".parse::<Combination>().unwrap()), Some(&64));
    }

    #[test]
    fn worst_secrets_needed_the_most_guesses() {
        let stats = run_test_all(&small_setup(StrategyType::MostDistinct), None, false).unwrap();

        assert!(!stats.worst_secrets.is_empty());
        let count = stats.guess_distribution[&stats.max_guesses];
        assert_eq!(stats.worst_secrets.len(), count);

        let mut sorted = stats.worst_secrets.clone();
        sorted.sort();
        assert_eq!(sorted, stats.worst_secrets);
    }

    #[test]
    fn later_runs_reuse_the_cache() {
        let setup = small_setup(StrategyType::Minimax);
        let first = run_test_all(&setup, None, false).unwrap();
        let second = run_test_all(&setup, None, false).unwrap();

        assert!(first.cache_entries > 0);
        assert_eq!(second.cache_entries, first.cache_entries);
        assert!(second.cache_hits >= first.cache_hits + 64);
        assert_eq!(second.guess_distribution, first.guess_distribution);
    }

    #[test]
    fn limit_takes_the_first_secrets() {
        let setup = SolverSetup::new(GameConfig::classic(), Method::Knuth).unwrap();
        let stats = run_test_all(&setup, Some(20), false).unwrap();

        assert_eq!(stats.total_secrets, 20);
        assert_eq!(stats.solved, 20);
        assert!(stats.max_guesses <= 5);
        assert_eq!(stats.cache_entries, 0);
        assert_eq!(stats.first_guess_used.get(&"1122".parse::<Combination>().unwrap()), Some(&20));
    }

    #[test]
    fn knuth_average_on_the_classic_game() {
        let setup = SolverSetup::new(GameConfig::classic(), Method::Knuth).unwrap();
        let stats = run_test_all(&setup, None, false).unwrap();

        assert_eq!(stats.solved, 1296);
        assert_eq!(stats.max_guesses, 5);
        assert!((stats.average_guesses - 5801.0 / 1296.0).abs() < 1e-9);
        assert!(stats.average_guesses > CLASSIC_OPTIMAL_AVERAGE);
    }
}
