//! Core domain types for Mastermind
//!
//! This module contains the fundamental value types of a game: colors,
//! combinations, feedback and the game configuration that ties them together.
//! All types here are pure, testable, and have clear mathematical properties.

mod color;
mod combination;
mod feedback;
mod game;

pub use color::Color;
pub use combination::{Combination, Universe};
pub use feedback::Feedback;
pub use game::GameConfig;
