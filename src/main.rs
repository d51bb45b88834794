//! Mastermind Solver - CLI
//!
//! Solves, analyzes and benchmarks Mastermind games with minimax, entropy,
//! most-distinct-outcome or Knuth strategies.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        Method, SolveConfig, SolverSetup, analyze_guess, print_test_all_statistics,
        run_benchmark, run_test_all, solve_secret,
    },
    core::{Combination, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using minimax, entropy and precomputed strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: minimax (default), entropy, most-parts, knuth
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Number of peg colors
    #[arg(short, long, global = true, default_value = "6")]
    colors: usize,

    /// Number of pegs per combination
    #[arg(short, long, global = true, default_value = "4")]
    pins: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret
    Solve {
        /// The secret to solve, e.g. 3632
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits all secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for drawing the secrets
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Override the opening guess
        #[arg(short = 'f', long)]
        first: Option<String>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Override the opening guess
        #[arg(short = 'f', long)]
        first: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let game = GameConfig::new(cli.colors, cli.pins)?;
    let Some(method) = Method::from_name(&cli.strategy) else {
        bail!(
            "unknown strategy '{}' (expected minimax, entropy, most-parts or knuth)",
            cli.strategy
        );
    };

    match cli.command {
        Commands::Solve { secret, verbose } => run_solve_command(game, method, &secret, verbose),
        Commands::Analyze { guess } => run_analyze_command(game, &guess),
        Commands::Benchmark { count, seed, first } => {
            run_benchmark_command(game, method, count, seed, first.as_deref())
        }
        Commands::TestAll { limit, first } => {
            run_test_all_command(game, method, limit, first.as_deref())
        }
    }
}

fn parse_combination(text: &str) -> Result<Combination> {
    text.parse::<Combination>()
        .with_context(|| format!("'{text}' is not a combination"))
}

/// Build the setup for `method`, fixing the opening guess if one was given
fn build_setup(game: GameConfig, method: Method, first: Option<&str>) -> Result<SolverSetup> {
    let setup = SolverSetup::new(game, method)?;
    match first {
        Some(text) => Ok(setup.with_opening(parse_combination(text)?)?),
        None => Ok(setup),
    }
}

fn run_solve_command(game: GameConfig, method: Method, secret: &str, verbose: bool) -> Result<()> {
    let setup = build_setup(game, method, None)?;
    let config = SolveConfig::new(parse_combination(secret)?);
    let result = solve_secret(config, &setup)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(game: GameConfig, guess: &str) -> Result<()> {
    let result = analyze_guess(&parse_combination(guess)?, &game)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    game: GameConfig,
    method: Method,
    count: usize,
    seed: u64,
    first: Option<&str>,
) -> Result<()> {
    match first {
        Some(opening) => println!(
            "Running benchmark on {count} random secrets with forced opening {opening}..."
        ),
        None => println!("Running benchmark on {count} random secrets..."),
    }

    let setup = build_setup(game, method, first)?;
    let result = run_benchmark(&setup, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    game: GameConfig,
    method: Method,
    limit: Option<usize>,
    first: Option<&str>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(game.universe_size(), |l| l.min(game.universe_size()))
    );
    println!("Strategy: {}", method.name());
    if let Some(opening) = first {
        println!("Forced opening: {opening}");
    }
    println!();

    let setup = build_setup(game, method, first)?;
    let stats = run_test_all(&setup, limit, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}
