//! Peg colors
//!
//! A color is an ordinal into a fixed palette. Ordinals are 0-based internally
//! and 1-based in every textual form, so the classic palette reads `1..=6`.

use std::fmt;

/// One peg color, identified by its 0-based ordinal in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Largest palette a game can use
    pub const MAX_COLORS: usize = 16;

    pub const RED: Self = Self(0);
    pub const GREEN: Self = Self(1);
    pub const BLUE: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const ORANGE: Self = Self(4);
    pub const PURPLE: Self = Self(5);

    /// Create a color from its 0-based ordinal
    ///
    /// # Panics
    /// Panics if `ordinal >= MAX_COLORS`
    #[inline]
    #[must_use]
    pub const fn new(ordinal: u8) -> Self {
        assert!(
            (ordinal as usize) < Self::MAX_COLORS,
            "color ordinal out of range"
        );
        Self(ordinal)
    }

    /// Create a color from its 1-based label, as written in rule notation
    ///
    /// Returns `None` for 0 or anything past the palette.
    #[must_use]
    pub fn from_label(label: usize) -> Option<Self> {
        (1..=Self::MAX_COLORS)
            .contains(&label)
            .then(|| Self((label - 1) as u8))
    }

    /// 0-based ordinal, used for per-color counting
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// 1-based label
    #[inline]
    #[must_use]
    pub const fn label(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        if label <= 9 {
            write!(f, "{label}")
        } else {
            write!(f, "{{{label}}}")
        }
    }
}
