//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}

/// Format a score right-aligned with an explicit sign
pub fn format_score(score: i64) -> String {
    format!("{:>+6}", score)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Mark the characters at `indices` (char offsets) in `text`.
///
/// Marked characters are wrapped with `mark`, e.g. `|c| c.bold().to_string()`.
pub fn highlight_with<F>(text: &str, indices: &[usize], mark: F) -> String
where
    F: Fn(char) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut pending = indices.iter().peekable();

    for (i, c) in text.chars().enumerate() {
        if pending.next_if(|&&idx| idx == i).is_some() {
            out.push_str(&mark(c));
        } else {
            out.push(c);
        }
    }

    out
}

/// Highlight matched characters in bold underline
pub fn highlight(text: &str, indices: &[usize]) -> String {
    highlight_with(text, indices, |c| c.bold().underline().to_string())
}
