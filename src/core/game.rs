//! Game parameters
//!
//! A `GameConfig` fixes the palette size K and the number of pins P. It is the
//! only place those two numbers are validated.

use super::{Color, Combination, Feedback};
use crate::error::{Result, SolverError};

/// Largest universe a game may enumerate
const MAX_UNIVERSE: usize = 1 << 22;

/// Palette size and pin count of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    colors: usize,
    pins: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if there are no colors, more colors than a
    /// `Color` can address, or more than 2^22 combinations.
    pub fn new(colors: usize, pins: usize) -> Result<Self> {
        if colors == 0 {
            return Err(SolverError::InvalidConfig("at least one color is required".into()));
        }
        if colors > Color::MAX_COLORS {
            return Err(SolverError::InvalidConfig(format!(
                "{colors} colors requested, at most {} are supported",
                Color::MAX_COLORS
            )));
        }

        let size = u32::try_from(pins)
            .ok()
            .and_then(|p| colors.checked_pow(p))
            .filter(|&n| n <= MAX_UNIVERSE)
            .ok_or_else(|| {
                SolverError::InvalidConfig(format!(
                    "{colors} colors and {pins} pins exceed {MAX_UNIVERSE} combinations"
                ))
            })?;
        log::trace!("game config {colors}x{pins}: {size} combinations");

        Ok(Self { colors, pins })
    }

    /// Six colors, four pins
    #[must_use]
    pub const fn classic() -> Self {
        Self { colors: 6, pins: 4 }
    }

    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    #[must_use]
    pub const fn pins(&self) -> usize {
        self.pins
    }

    /// True for the 6-color, 4-pin game
    #[must_use]
    pub fn is_classic(&self) -> bool {
        *self == Self::classic()
    }

    /// Number of combinations, K^P
    #[must_use]
    pub fn universe_size(&self) -> usize {
        // Bounded by MAX_UNIVERSE at construction
        #[allow(clippy::cast_possible_truncation)]
        self.colors.pow(self.pins as u32)
    }

    /// Every combination of this game, in ascending order
    #[must_use]
    pub fn universe(&self) -> Vec<Combination> {
        Combination::universe(self.colors, self.pins).collect()
    }

    /// Every structurally valid feedback, including the solved one
    #[must_use]
    pub fn possible_feedbacks(&self) -> Vec<Feedback> {
        Feedback::possible(self.pins)
    }

    /// Check that a combination belongs to this game
    ///
    /// # Errors
    /// Returns `InvalidConfig` on a wrong peg count or a color past the palette.
    pub fn check(&self, combination: &Combination) -> Result<()> {
        if combination.len() != self.pins {
            return Err(SolverError::InvalidConfig(format!(
                "{combination} has {} pegs, the game uses {}",
                combination.len(),
                self.pins
            )));
        }
        if let Some(peg) = combination.pegs().iter().find(|p| p.ordinal() >= self.colors) {
            return Err(SolverError::InvalidConfig(format!(
                "color {peg} in {combination} is outside the {}-color palette",
                self.colors
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
