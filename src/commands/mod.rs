//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod setup;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, FeedbackGroup, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use setup::{Method, SolverSetup};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
