//! Formatting utilities for terminal output

use crate::core::{Color, Combination, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as key pegs: ● exact, ○ right color in the wrong place,
/// · for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pins: usize) -> String {
    let exact = feedback.exact().min(pins);
    let color_only = feedback.color_only().min(pins - exact);

    let mut result = String::with_capacity(pins * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(color_only));
    result.push_str(&"·".repeat(pins - exact - color_only));
    result
}

/// Paint one peg label in its palette color
///
/// Colors past the classic six are left uncolored.
#[must_use]
pub fn colored_peg(color: Color) -> ColoredString {
    let label = color.to_string();
    match color {
        Color::RED => label.red().bold(),
        Color::GREEN => label.green().bold(),
        Color::BLUE => label.blue().bold(),
        Color::YELLOW => label.yellow().bold(),
        Color::ORANGE => label.truecolor(255, 165, 0).bold(),
        Color::PURPLE => label.magenta().bold(),
        _ => label.normal(),
    }
}

/// Paint every peg of a combination
#[must_use]
pub fn colored_combination(combination: &Combination) -> String {
    combination
        .pegs()
        .iter()
        .map(|&peg| colored_peg(peg).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Colored bar for `count` out of `total`; any nonzero count gets a cell
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count * width / total).max(usize::from(count > 0)).min(width)
    };

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}

/// Format entropy as a bar, full at `max_entropy` bits
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}
