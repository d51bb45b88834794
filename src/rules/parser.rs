//! Compact rule notation
//!
//! ```text
//! rule        := INT [ '(' combination ( ['x'] ')' | ':' rows ')' ) ]
//! rows        := row { ';' row }
//! row         := rule { ',' rule }
//! combination := { DIGIT | '{' INT '}' }
//! ```
//!
//! - `n` guesses the first of exactly `n` candidates
//! - `n(c)` guesses `c` with `n` candidates; at most one remains afterwards
//! - `n(cx)` is the same, with at most two remaining afterwards
//! - `n(c:rows)` guesses `c` and branches on the feedback. Rows are listed by
//!   increasing exact count, entries within a row by decreasing color-only count.
//!
//! Colors are 1-based labels; `{n}` is required for labels above nine.

use super::DecisionTree;
use crate::core::{Color, Combination, GameConfig};
use crate::error::{Result, SolverError};

/// Deepest rule nesting accepted; the Knuth tree needs about six levels
const MAX_DEPTH: usize = 64;

/// Parse rule notation into a decision tree for `game`
///
/// # Errors
/// Returns `RuleSyntax` with the byte offset of the first problem.
///
/// # Examples
/// ```
/// use mastermind_solver::core::GameConfig;
/// use mastermind_solver::rules::{Rule, parse_rule};
///
/// let game = GameConfig::new(3, 2).unwrap();
/// let tree = parse_rule("9(12:1,2,3;0,2;0)", &game).unwrap();
/// assert!(matches!(tree.rule(), Rule::FixedComplex { expected: 9, .. }));
/// assert!(parse_rule("9(12:1,2,3;0,2)", &game).is_err());
/// ```
pub fn parse_rule(text: &str, game: &GameConfig) -> Result<DecisionTree> {
    let mut parser = Parser {
        input: text.as_bytes(),
        pos: 0,
        depth: 0,
        game,
    };

    let tree = parser.rule()?;
    if parser.pos != parser.input.len() {
        return Err(parser.error("trailing input after rule"));
    }
    Ok(tree)
}

fn syntax_error(offset: usize, message: impl Into<String>) -> SolverError {
    SolverError::RuleSyntax {
        offset,
        message: message.into(),
    }
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    game: &'a GameConfig,
}

impl Parser<'_> {
    fn error(&self, message: impl Into<String>) -> SolverError {
        syntax_error(self.pos, message)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume `byte` if it is next
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", byte as char)))
        }
    }

    fn integer(&mut self) -> Result<usize> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("expected a number"));
        }

        // Only ASCII digits were consumed
        std::str::from_utf8(&self.input[start..self.pos])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| syntax_error(start, "number out of range"))
    }

    fn rule(&mut self) -> Result<DecisionTree> {
        if self.depth == MAX_DEPTH {
            return Err(self.error("rule nesting too deep"));
        }

        self.depth += 1;
        let tree = self.nested_rule();
        self.depth -= 1;
        tree
    }

    fn nested_rule(&mut self) -> Result<DecisionTree> {
        let start = self.pos;
        let expected = self.integer()?;

        if !self.eat(b'(') {
            return DecisionTree::pick_first(expected, expected)
                .map_err(|e| syntax_error(start, e.to_string()));
        }

        let guess = self.combination()?;

        if self.eat(b':') {
            let rows = self.rows()?;
            self.expect(b')')?;
            return DecisionTree::fixed_complex(expected, guess, rows)
                .map_err(|e| syntax_error(start, e.to_string()));
        }

        let remaining = if self.eat(b'x') { 2 } else { 1 };
        self.expect(b')')?;

        let next = DecisionTree::pick_first(0, remaining)
            .map_err(|e| syntax_error(start, e.to_string()))?;
        Ok(DecisionTree::fixed_simple(expected, guess, next))
    }

    fn rows(&mut self) -> Result<Vec<Vec<DecisionTree>>> {
        let mut rows = vec![self.row()?];
        while self.eat(b';') {
            rows.push(self.row()?);
        }
        Ok(rows)
    }

    fn row(&mut self) -> Result<Vec<DecisionTree>> {
        let mut row = vec![self.rule()?];
        while self.eat(b',') {
            row.push(self.rule()?);
        }
        Ok(row)
    }

    fn combination(&mut self) -> Result<Combination> {
        let start = self.pos;
        let mut pegs = Vec::with_capacity(self.game.pins());

        loop {
            let offset = self.pos;
            let label = match self.peek() {
                Some(b'{') => {
                    self.pos += 1;
                    let label = self.integer()?;
                    self.expect(b'}')?;
                    label
                }
                Some(digit @ b'0'..=b'9') => {
                    self.pos += 1;
                    usize::from(digit - b'0')
                }
                _ => break,
            };

            let color = Color::from_label(label)
                .filter(|c| c.ordinal() < self.game.colors())
                .ok_or_else(|| {
                    syntax_error(
                        offset,
                        format!("color {label} is outside 1..={}", self.game.colors()),
                    )
                })?;
            pegs.push(color);
        }

        if pegs.len() != self.game.pins() {
            return Err(syntax_error(
                start,
                format!("guess has {} pegs, the game uses {}", pegs.len(), self.game.pins()),
            ));
        }
        Ok(Combination::new(pegs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::rules::Rule;

    fn classic(text: &str) -> Result<DecisionTree> {
        parse_rule(text, &GameConfig::classic())
    }

    fn syntax_offset(result: Result<DecisionTree>) -> usize {
        match result {
            Err(SolverError::RuleSyntax { offset, .. }) => offset,
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn bare_number_is_pick_first() {
        let tree = classic("912").unwrap();
        assert!(matches!(
            tree.rule(),
            Rule::PickFirst {
                min_expected: 912,
                max_expected: 912
            }
        ));
    }

    #[test]
    fn simple_rule_continues_with_one_remaining() {
        let tree = classic("123(4123)").unwrap();
        let Rule::FixedSimple { expected, guess, next } = tree.rule() else {
            panic!("expected a fixed simple rule");
        };

        assert_eq!(*expected, 123);
        assert_eq!(guess.to_string(), "4123");
        assert!(matches!(
            next.rule(),
            Rule::PickFirst {
                min_expected: 0,
                max_expected: 1
            }
        ));
    }

    #[test]
    fn x_suffix_allows_two_remaining() {
        let tree = classic("3182(2231x)").unwrap();
        let Rule::FixedSimple { next, .. } = tree.rule() else {
            panic!("expected a fixed simple rule");
        };
        assert!(matches!(next.rule(), Rule::PickFirst { max_expected: 2, .. }));
    }

    #[test]
    fn braced_and_plain_colors_mix() {
        let tree = classic("12(4{1}52x)").unwrap();
        let Rule::FixedSimple { expected, guess, .. } = tree.rule() else {
            panic!("expected a fixed simple rule");
        };
        assert_eq!(*expected, 12);
        assert_eq!(guess, &Combination::from_labels(&[4, 1, 5, 2]).unwrap());
    }

    #[test]
    fn two_digit_colors_need_braces() {
        let game = GameConfig::new(12, 2).unwrap();
        let tree = parse_rule("5({11}{12})", &game).unwrap();
        let Rule::FixedSimple { guess, .. } = tree.rule() else {
            panic!("expected a fixed simple rule");
        };
        assert_eq!(guess.to_string(), "{11}{12}");

        // "11" reads as two pegs of color 1
        assert!(parse_rule("5(11)", &game).is_ok());
        assert!(parse_rule("5(1{13})", &game).is_err());
    }

    #[test]
    fn complex_rule_rows_follow_exact_then_color_only() {
        let game = GameConfig::new(3, 2).unwrap();
        let tree = parse_rule("9(12:1,2,3;4,5;6)", &game).unwrap();

        let leaf = |e, c| match tree.advance(Feedback::new(e, c)).unwrap().rule() {
            Rule::PickFirst { min_expected, .. } => *min_expected,
            other => panic!("unexpected {other:?}"),
        };

        assert_eq!(leaf(0, 2), 1);
        assert_eq!(leaf(0, 1), 2);
        assert_eq!(leaf(0, 0), 3);
        assert_eq!(leaf(1, 0), 5);
    }

    #[test]
    fn nested_rules() {
        let game = GameConfig::new(3, 2).unwrap();
        let tree = parse_rule("9(12:0,2(21),3(13:0,0,0;0,1;0);0,2(22x);0)", &game).unwrap();

        let next = tree.advance(Feedback::new(0, 0)).unwrap();
        assert!(matches!(next.rule(), Rule::FixedComplex { expected: 3, .. }));

        let next = tree.advance(Feedback::new(1, 0)).unwrap();
        assert!(matches!(next.rule(), Rule::FixedSimple { expected: 2, .. }));
    }

    #[test]
    fn reports_error_offsets() {
        assert_eq!(syntax_offset(classic("")), 0);
        assert_eq!(syntax_offset(classic("12(1234")), 7);
        assert_eq!(syntax_offset(classic("12(123)")), 3);
        assert_eq!(syntax_offset(classic("12(1274)")), 5);
        assert_eq!(syntax_offset(classic("12(1230)")), 6);
        assert_eq!(syntax_offset(classic("12)")), 2);
        assert_eq!(syntax_offset(classic("12(1234y)")), 7);
    }

    #[test]
    fn complex_table_must_be_triangular() {
        let game = GameConfig::new(3, 2).unwrap();
        assert_eq!(syntax_offset(parse_rule("9(12:1,2,3;4,5)", &game)), 0);
        assert_eq!(syntax_offset(parse_rule("9(12:1,2;4,5;6)", &game)), 0);
        assert_eq!(syntax_offset(parse_rule("9(12:1,2,3;4,5;6;7)", &game)), 0);
    }

    /// `levels` complex rules nested through their first table entry
    fn nested(levels: usize) -> String {
        let mut text = "1(1:".repeat(levels);
        text.push('0');
        text.push_str(&",0;0)".repeat(levels));
        text
    }

    #[test]
    fn limits_nesting_depth() {
        let game = GameConfig::new(2, 1).unwrap();

        assert!(parse_rule(&nested(MAX_DEPTH - 1), &game).is_ok());
        assert!(matches!(
            parse_rule(&nested(MAX_DEPTH), &game),
            Err(SolverError::RuleSyntax { .. })
        ));
        assert_eq!(syntax_offset(parse_rule(&nested(MAX_DEPTH), &game)), 4 * MAX_DEPTH);
        assert!(parse_rule(&nested(200_000), &game).is_err());
    }

    #[test]
    fn rejects_trailing_input() {
        assert_eq!(syntax_offset(classic("1,9")), 1);
        assert_eq!(syntax_offset(classic("2(1234) ")), 7);
    }
}
