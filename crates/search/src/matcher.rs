//! Character-subsequence matching with heuristic scoring.
//!
//! The scorer walks the candidate once, left to right. For the pattern
//! character it is currently looking for, it keeps a single "best letter"
//! slot: later occurrences of the same letter may replace the tracked one
//! if they sit on a better boundary (separator, camel hump, adjacency).
//! The slot is committed when the next pattern character is found or the
//! scan ends. This is a greedy heuristic, not an optimal alignment.

use serde::{Deserialize, Serialize};

/// Bonus for a match directly following another match.
pub const ADJACENCY_BONUS: i32 = 2;
/// Bonus for a match following `_` or a space, or at the start of the candidate.
pub const SEPARATOR_BONUS: i32 = 10;
/// Bonus for an uppercase match following a lowercase character.
pub const CAMEL_BONUS: i32 = 10;
/// Penalty per candidate character skipped before the first match.
pub const LEADING_LETTER_PENALTY: i32 = -3;
/// Cap on the total leading-letter penalty.
pub const MAX_LEADING_LETTER_PENALTY: i32 = -9;
/// Penalty for each candidate character not used by the match.
pub const UNMATCHED_LETTER_PENALTY: i32 = -1;

/// Outcome of a scored fuzzy match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// True if every pattern character was found in order.
    pub is_match: bool,
    /// Heuristic relevance score (higher is better).
    ///
    /// Computed for partial matches too; only a ranking signal unless
    /// `is_match` is set.
    pub score: i32,
    /// Char offsets into the candidate that were committed as matches.
    pub matched_indices: Vec<usize>,
}

/// Pending match for the pattern character most recently advanced past.
#[derive(Debug, Clone, Copy)]
struct BestLetter {
    lower: char,
    index: usize,
    score: i32,
}

/// Simple case folding for a single character.
///
/// Characters whose lowercase form expands to more than one char are
/// compared unchanged.
#[inline]
pub(crate) fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c == '_' || c == ' '
}

/// Check if `candidate` contains all characters of `pattern` in order.
///
/// Comparison is case-insensitive. An empty pattern or an empty candidate
/// never matches.
///
/// # Example
/// ```
/// use sundry_search::fuzzy_match;
///
/// assert!(fuzzy_match("Hello World", "hwo"));
/// assert!(!fuzzy_match("abc", "ca"));
/// assert!(!fuzzy_match("abc", ""));
/// ```
pub fn fuzzy_match(candidate: &str, pattern: &str) -> bool {
    if candidate.is_empty() || pattern.is_empty() {
        return false;
    }

    let mut pattern_chars = pattern.chars().map(fold).peekable();

    for c in candidate.chars().map(fold) {
        match pattern_chars.peek() {
            Some(&p) if p == c => {
                pattern_chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    pattern_chars.peek().is_none()
}

/// Match `pattern` against `candidate` and compute a relevance score.
///
/// Scoring favours contiguous runs, matches on word boundaries and camel
/// humps, and matches near the start of the candidate. Skipped leading
/// characters and unused characters are penalised.
///
/// # Example
/// ```
/// use sundry_search::fuzzy_match_scored;
///
/// let camel = fuzzy_match_scored("getBarClass", "gbc");
/// let flat = fuzzy_match_scored("getbarclass", "gbc");
/// assert!(camel.is_match && flat.is_match);
/// assert!(camel.score > flat.score);
/// assert_eq!(camel.matched_indices, vec![0, 3, 6]);
/// ```
pub fn fuzzy_match_scored(candidate: &str, pattern: &str) -> MatchResult {
    if candidate.is_empty() || pattern.is_empty() {
        return MatchResult::default();
    }

    let pattern: Vec<char> = pattern.chars().map(fold).collect();

    let mut score = 0;
    let mut pattern_idx = 0;
    let mut prev_matched = false;
    let mut prev_lower = false;
    // First character counts as following a separator.
    let mut prev_separator = true;

    let mut best: Option<BestLetter> = None;
    let mut matched_indices = Vec::with_capacity(pattern.len());

    for (idx, ch) in candidate.chars().enumerate() {
        let lower = fold(ch);
        let pattern_char = pattern.get(pattern_idx).copied();

        let next_match = pattern_char == Some(lower);
        let rematch = best.is_some_and(|b| b.lower == lower);

        let advanced = next_match && best.is_some();
        let pattern_repeat = matches!((best, pattern_char), (Some(b), Some(p)) if b.lower == p);

        if advanced || pattern_repeat {
            if let Some(b) = best.take() {
                score += b.score;
                matched_indices.push(b.index);
            }
        }

        if next_match || rematch {
            let mut new_score = 0;

            if pattern_idx == 0 {
                let skipped = i32::try_from(idx).unwrap_or(i32::MAX);
                score += skipped
                    .saturating_mul(LEADING_LETTER_PENALTY)
                    .max(MAX_LEADING_LETTER_PENALTY);
            }

            if prev_matched {
                new_score += ADJACENCY_BONUS;
            }
            if prev_separator {
                new_score += SEPARATOR_BONUS;
            }
            if prev_lower && ch.is_uppercase() {
                new_score += CAMEL_BONUS;
            }

            if next_match {
                pattern_idx += 1;
            }

            let best_score = best.map_or(0, |b| b.score);
            if new_score >= best_score {
                if best.is_some() {
                    score += UNMATCHED_LETTER_PENALTY;
                }
                best = Some(BestLetter {
                    lower,
                    index: idx,
                    score: new_score,
                });
            }

            prev_matched = true;
        } else {
            score += UNMATCHED_LETTER_PENALTY;
            prev_matched = false;
        }

        prev_lower = ch.is_lowercase();
        prev_separator = is_separator(ch);
    }

    if let Some(b) = best {
        score += b.score;
        matched_indices.push(b.index);
    }

    MatchResult {
        is_match: pattern_idx == pattern.len(),
        score,
        matched_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fuzzy_match_empty() {
        assert!(!fuzzy_match("", ""));
        assert!(!fuzzy_match("hello", ""));
        assert!(!fuzzy_match("", "h"));
    }

    #[test]
    fn test_fuzzy_match_exact() {
        assert!(fuzzy_match("hello", "hello"));
    }

    #[test]
    fn test_fuzzy_match_case_insensitive() {
        assert!(fuzzy_match("HELLO", "hello"));
        assert!(fuzzy_match("hello", "HeLLo"));
    }

    #[test]
    fn test_fuzzy_match_order() {
        assert!(fuzzy_match("abc", "ac"));
        assert!(!fuzzy_match("abc", "ca"));
    }

    #[test]
    fn test_fuzzy_match_pattern_longer() {
        assert!(!fuzzy_match("ab", "abc"));
    }

    #[test]
    fn test_scored_empty() {
        assert_eq!(fuzzy_match_scored("", ""), MatchResult::default());
        assert!(!fuzzy_match_scored("abc", "").is_match);
        assert!(!fuzzy_match_scored("", "abc").is_match);
    }

    #[test]
    fn test_scored_exact() {
        // 10 (separator) + 4 * 2 (adjacency)
        let result = fuzzy_match_scored("hello", "hello");
        assert!(result.is_match);
        assert_eq!(result.score, 18);
        assert_eq!(result.matched_indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_scored_leading_letters() {
        let early = fuzzy_match_scored("abc", "a");
        let late = fuzzy_match_scored("xxa", "a");
        assert_eq!(early.score, 8);
        assert_eq!(late.score, -8);
        assert!(early.score >= late.score);
    }

    #[test]
    fn test_leading_penalty_capped() {
        // 5 unmatched (-5) + capped leading penalty (-9)
        let result = fuzzy_match_scored("xxxxxa", "a");
        assert!(result.is_match);
        assert_eq!(result.score, -14);
    }

    #[test]
    fn test_camel_case_bonus() {
        let camel = fuzzy_match_scored("getBarClass", "gbc");
        let flat = fuzzy_match_scored("getbarclass", "gbc");
        assert_eq!(camel.score, 22);
        assert_eq!(flat.score, 2);
    }

    #[test]
    fn test_separator_bonus() {
        let separated = fuzzy_match_scored("get_bar", "gb");
        let joined = fuzzy_match_scored("getxbar", "gb");
        assert!(separated.score > joined.score);
    }

    #[test]
    fn test_only_underscore_and_space_separate() {
        assert_eq!(fuzzy_match_scored("x_b", "b").score, 2);
        assert_eq!(fuzzy_match_scored("x b", "b").score, 2);
        assert_eq!(fuzzy_match_scored("x-b", "b").score, -8);
        assert_eq!(fuzzy_match_scored("x.b", "b").score, -8);

        let dashed = fuzzy_match_scored("x-ab", "b");
        assert_eq!(dashed.score, -12);
        assert_eq!(dashed.matched_indices, vec![3]);
    }

    #[test]
    fn test_best_letter_tie_prefers_later() {
        // Both 'a's earn the separator bonus; the later one wins the tie.
        let result = fuzzy_match_scored("a a", "a");
        assert!(result.is_match);
        assert_eq!(result.matched_indices, vec![2]);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_best_letter_prefers_separator() {
        // The second 'a' follows '_' and displaces the first.
        let result = fuzzy_match_scored("xa_a", "a");
        assert!(result.is_match);
        assert_eq!(result.matched_indices, vec![3]);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_best_letter_keeps_stronger() {
        let result = fuzzy_match_scored("aXa", "a");
        assert_eq!(result.matched_indices, vec![0]);
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_repeated_pattern_letters() {
        let result = fuzzy_match_scored("foo", "oo");
        assert!(result.is_match);
        assert_eq!(result.matched_indices, vec![1, 2]);
    }

    #[test]
    fn test_partial_match_scores() {
        let result = fuzzy_match_scored("bar", "foo");
        assert!(!result.is_match);
        assert_eq!(result.score, -3);
    }

    #[test]
    fn test_fold_multi_char_lowercase() {
        // 'İ' lowercases to two chars and is left as-is.
        assert_eq!(fold('İ'), 'İ');
        assert_eq!(fold('Ä'), 'ä');
    }

    fn is_witness(candidate: &str, pattern: &str, indices: &[usize]) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        indices.len() == pattern.len()
            && indices.windows(2).all(|w| w[0] < w[1])
            && indices
                .iter()
                .zip(&pattern)
                .all(|(&i, &p)| fold(chars[i]) == fold(p))
    }

    proptest! {
        #[test]
        fn prop_scored_agrees_with_boolean(candidate in "[a-zA-Z _]{0,16}", pattern in "[a-zA-Z]{0,4}") {
            let scored = fuzzy_match_scored(&candidate, &pattern);
            prop_assert_eq!(scored.is_match, fuzzy_match(&candidate, &pattern));
        }

        #[test]
        fn prop_match_has_subsequence_witness(candidate in "[a-cA-C _]{1,16}", pattern in "[a-c]{1,4}") {
            let scored = fuzzy_match_scored(&candidate, &pattern);
            if scored.is_match {
                prop_assert!(is_witness(&candidate, &pattern, &scored.matched_indices));
            }
        }

        #[test]
        fn prop_idempotent(candidate in "\\PC{0,12}", pattern in "\\PC{0,4}") {
            prop_assert_eq!(
                fuzzy_match_scored(&candidate, &pattern),
                fuzzy_match_scored(&candidate, &pattern)
            );
        }
    }
}
