//! Word-aggregated fuzzy search.

use crate::matcher::fuzzy_match_scored;

/// Points added for each word pair that fully matches.
pub const MATCH_BONUS: i64 = 1000;

/// Characters that split text into words.
pub const WORD_SEPARATORS: [char; 3] = [' ', ';', ','];

/// Split text on spaces, semicolons and commas, skipping empty words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(WORD_SEPARATORS)
        .map(str::trim)
        .filter(|word| !word.is_empty())
}

/// Score a multi-word candidate against a multi-word pattern.
///
/// Every pattern word is matched against every candidate word. Each pair
/// that matches adds [`MATCH_BONUS`]; any positive pair score is added
/// as well, whether or not the pair matched. Negative pair scores are
/// dropped.
///
/// Returns 0 if either input is empty or whitespace.
///
/// # Example
/// ```
/// use sundry_search::search_string;
///
/// assert_eq!(search_string("foo bar", "foo"), 1014);
/// assert_eq!(search_string("foo bar", "  "), 0);
/// ```
pub fn search_string(candidate: &str, pattern: &str) -> i64 {
    if candidate.trim().is_empty() || pattern.trim().is_empty() {
        return 0;
    }

    let mut total = 0;

    for pattern_word in split_words(pattern) {
        for candidate_word in split_words(candidate) {
            let result = fuzzy_match_scored(candidate_word, pattern_word);
            if result.is_match {
                total += MATCH_BONUS;
            }
            if result.score > 0 {
                total += i64::from(result.score);
            }
        }
    }

    total
}

/// [`search_string`] for inputs that may be absent; `None` scores 0.
pub fn search_optional(candidate: Option<&str>, pattern: Option<&str>) -> i64 {
    match (candidate, pattern) {
        (Some(candidate), Some(pattern)) => search_string(candidate, pattern),
        _ => 0,
    }
}
