//! Combinations of pegs and universe enumeration
//!
//! A combination is an ordered sequence of colors. Its textual form is the one
//! used by rule notation: one digit per peg, or `{n}` for labels above nine.

use super::Color;
use crate::error::SolverError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of exactly P colors, either a guess or a possible secret
///
/// Combinations are totally ordered: first by length, then lexicographically by
/// color ordinal. Every enumeration in the crate follows this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    pegs: Vec<Color>,
}

impl Combination {
    /// Create a combination from its pegs
    #[must_use]
    pub fn new(pegs: impl Into<Vec<Color>>) -> Self {
        Self { pegs: pegs.into() }
    }

    /// Create a combination from 1-based labels, as in `[1, 1, 2, 2]`
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a label is 0 or past the largest palette.
    pub fn from_labels(labels: &[usize]) -> Result<Self, SolverError> {
        labels
            .iter()
            .map(|&label| {
                Color::from_label(label).ok_or_else(|| {
                    SolverError::InvalidConfig(format!("invalid color label {label}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// True for the zero-length combination
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// The pegs in position order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    /// Color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn peg(&self, position: usize) -> Color {
        self.pegs[position]
    }

    /// True if any peg has this color
    #[must_use]
    pub fn contains_color(&self, color: Color) -> bool {
        self.pegs.contains(&color)
    }

    /// Per-color occurrence counts, indexed by ordinal
    #[inline]
    pub(crate) fn color_counts(&self) -> [usize; Color::MAX_COLORS] {
        let mut counts = [0; Color::MAX_COLORS];
        for peg in &self.pegs {
            counts[peg.ordinal()] += 1;
        }
        counts
    }

    /// Enumerate all `colors^pins` combinations in ascending order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Combination;
    ///
    /// let all: Vec<Combination> = Combination::universe(3, 2).collect();
    /// assert_eq!(all.len(), 9);
    /// assert_eq!(all[0].to_string(), "11");
    /// assert_eq!(all[8].to_string(), "33");
    /// ```
    #[must_use]
    pub fn universe(colors: usize, pins: usize) -> Universe {
        Universe::new(colors, pins)
    }
}

impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pegs
            .len()
            .cmp(&other.pegs.len())
            .then_with(|| self.pegs.cmp(&other.pegs))
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = SolverError;

    /// Parse `"1122"` or `"{10}3{12}"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            |what: &str| SolverError::InvalidConfig(format!("{what} in combination '{s}'"));
        let mut labels = Vec::new();
        let mut chars = s.trim().chars();

        while let Some(ch) = chars.next() {
            let label = match ch {
                '{' => {
                    let mut digits = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        digits.push(c);
                    }
                    if !closed {
                        return Err(invalid("unterminated braced color"));
                    }
                    digits.parse().map_err(|_| invalid("bad braced color"))?
                }
                '0'..='9' => ch.to_digit(10).map_or(0, |d| d as usize),
                _ => return Err(invalid("unexpected character")),
            };
            labels.push(label);
        }

        Self::from_labels(&labels)
    }
}

/// Iterator over every combination of a game, in ascending order
///
/// Works as a P-digit counter in base K: the last position moves fastest and
/// carries propagate towards the first.
#[derive(Debug, Clone)]
pub struct Universe {
    colors: usize,
    digits: Vec<u8>,
    exhausted: bool,
}

impl Universe {
    fn new(colors: usize, pins: usize) -> Self {
        debug_assert!(colors <= Color::MAX_COLORS, "palette too large");
        Self {
            colors,
            digits: vec![0; pins],
            exhausted: colors == 0 && pins > 0,
        }
    }

    /// Advance the counter; returns false once every digit has wrapped
    fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if usize::from(*digit) < self.colors {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Universe {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current =
            Combination::new(self.digits.iter().map(|&d| Color::new(d)).collect::<Vec<_>>());
        self.exhausted = !self.increment();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn combo(text: &str) -> Combination {
        text.parse().unwrap()
    }

    #[test]
    fn universe_has_k_to_the_p_members() {
        for (colors, pins) in [(6, 4), (3, 2), (4, 3), (2, 5), (8, 1)] {
            let all: Vec<Combination> = Combination::universe(colors, pins).collect();
            assert_eq!(all.len(), colors.pow(pins as u32));
            assert!(all.iter().all(|c| c.len() == pins));

            let distinct: HashSet<_> = all.iter().collect();
            assert_eq!(distinct.len(), all.len());
        }
    }

    #[test]
    fn universe_is_ascending() {
        let all: Vec<Combination> = Combination::universe(6, 4).collect();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all.first().unwrap().to_string(), "1111");
        assert_eq!(all.last().unwrap().to_string(), "6666");
    }

    #[test]
    fn universe_zero_pins_has_one_empty_combination() {
        let all: Vec<Combination> = Combination::universe(6, 0).collect();
        assert_eq!(all, vec![Combination::new(vec![])]);
    }

    #[test]
    fn universe_zero_colors_is_empty() {
        assert_eq!(Combination::universe(0, 3).count(), 0);
    }

    #[test]
    fn order_compares_length_first() {
        assert!(combo("66") < combo("111"));
        assert!(combo("1234") < combo("1243"));
        assert!(combo("") < combo("1"));
    }

    #[test]
    fn parse_and_display() {
        let c = combo("1{10}3");
        assert_eq!(c.pegs(), &[Color::RED, Color::new(9), Color::BLUE]);
        assert_eq!(c.to_string(), "1{10}3");
        assert_eq!(combo("{1}{2}"), combo("12"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("10".parse::<Combination>().is_err());
        assert!("1a".parse::<Combination>().is_err());
        assert!("{17}".parse::<Combination>().is_err());
        assert!("{x}".parse::<Combination>().is_err());
    }

    #[test]
    fn parse_rejects_unterminated_braces() {
        for text in ["{12", "1{2", "{", "12{"] {
            assert!(
                matches!(text.parse::<Combination>(), Err(SolverError::InvalidConfig(_))),
                "{text} should not parse"
            );
        }
        assert_eq!("1{2}".parse::<Combination>().unwrap().len(), 2);
    }

    #[test]
    fn from_labels_matches_named_colors() {
        let c = Combination::from_labels(&[1, 2, 1, 3]).unwrap();
        assert_eq!(
            c,
            Combination::new(vec![Color::RED, Color::GREEN, Color::RED, Color::BLUE])
        );
        assert!(c.contains_color(Color::BLUE));
        assert!(!c.contains_color(Color::YELLOW));
    }

    #[test]
    fn color_counts_tally_duplicates() {
        let counts = combo("1131").color_counts();
        assert_eq!(counts[0], 3);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }
}
