//! Display functions for command results

use super::formatters::{colored_combination, entropy_bar, feedback_pegs, share_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Feedback;
use colored::Colorize;

fn banner(rule: &str, title: &str) {
    println!("\n{}", rule.repeat(60).cyan());
    println!(" {title} ");
    println!("{}", rule.repeat(60).cyan());
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let pins = result.secret.len();
    banner("─", &format!("Secret {}", colored_combination(&result.secret)));

    for (turn, step) in (1..).zip(&result.guesses) {
        println!(
            "\n{turn:>2}. {}  {}  {}",
            colored_combination(&step.guess),
            feedback_pegs(step.feedback, pins),
            step.feedback.to_string().bright_black()
        );
        if !verbose {
            continue;
        }

        println!(
            "    {} candidates, {} left",
            step.candidates_before, step.candidates_after
        );
        if let (Some(entropy), Some(expected)) = (step.entropy, step.expected_remaining) {
            println!("    entropy {entropy:.3} bits, {expected:.1} expected to remain");
        }
        if step.candidates_after > 0 && step.candidates_before > step.candidates_after {
            let factor = step.candidates_before as f64 / step.candidates_after as f64;
            println!("    gained {:.3} bits ({factor:.1}x fewer)", factor.log2());
        }
    }

    let turns = result.guesses.len();
    println!();
    if result.success {
        println!("{}", format!("✅ Cracked in {turns} guesses").green().bold());
    } else {
        println!("{}", format!("❌ Still unsolved after {turns} guesses").red().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let pins = result.guess.len();
    let metrics = &result.metrics;
    banner(
        "═",
        &format!(
            "{} {}",
            "GUESS ANALYSIS".bright_cyan().bold(),
            colored_combination(&result.guess)
        ),
    );

    // Full bar: every possible feedback equally likely
    let max_entropy = (Feedback::possible(pins).len() as f64).log2();

    println!("\n📊 Opening against all {} secrets:", result.total_candidates);
    println!(
        "   entropy     [{}] {}",
        entropy_bar(metrics.entropy, max_entropy, 30).green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   reduction   {:.1}x", result.expected_reduction);
    println!("   expected    {:.1} left", metrics.expected_remaining);
    println!("   worst case  {} left", metrics.max_partition);
    println!("   outcomes    {}", metrics.distinct_outcomes);

    println!("\n📈 {}", "Partition by feedback".bright_cyan().bold());
    for group in &result.groups {
        let examples: Vec<String> = group.examples.iter().map(ToString::to_string).collect();
        println!(
            "   {} {:>7} {:5}  {}",
            feedback_pegs(group.feedback, pins),
            group.feedback.to_string(),
            group.count,
            examples.join(" ").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("═", &"BENCHMARK".bright_cyan().bold().to_string());

    println!("\n📊 {}", "Summary".bright_cyan().bold());
    println!("   secrets     {}", result.total_secrets);
    println!(
        "   average     {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!(
        "   range       {}..={}",
        result.min_guesses.to_string().green(),
        result.max_guesses.to_string().yellow()
    );
    if result.failures > 0 {
        println!("   unsolved    {}", result.failures.to_string().red());
    }
    println!(
        "   elapsed     {:.2}s ({:.1} secrets/s)",
        result.duration.as_secs_f64(),
        result.secrets_per_second
    );

    println!("\n📈 {}", "Guesses needed".bright_cyan().bold());
    let total = result.total_secrets.max(1);
    for (&guess_count, &count) in &result.distribution {
        let pct = count as f64 / total as f64 * 100.0;
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", share_bar(count, total, 40));
    }
}
