//! Ranking candidate lists by word-aggregated score.

use crate::error::{Result, SearchError};
use crate::words::search_string;
use serde::{Deserialize, Serialize};

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: i64,
}

/// Options controlling [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Candidates must score strictly above this to be kept.
    pub min_score: i64,
    /// Maximum results to return (None for all).
    pub max_results: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_results: None,
        }
    }
}

/// Score every candidate against `pattern` and return the best first.
///
/// Sorting is stable: candidates with equal scores keep input order.
///
/// # Example
/// ```
/// use sundry_search::{rank, RankOptions};
///
/// let files = ["README.md", "src/main.rs", "Cargo.toml"];
/// let results = rank(&files, "main", &RankOptions::default());
/// assert_eq!(*results[0].item, "src/main.rs");
/// ```
pub fn rank<'a, T>(
    candidates: &'a [T],
    pattern: &str,
    options: &RankOptions,
) -> Vec<SearchResult<&'a T>>
where
    T: AsRef<str> + Sync,
{
    let mut results = score_all(candidates, pattern);

    results.retain(|r| r.score > options.min_score);
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(max) = options.max_results {
        results.truncate(max);
    }

    results
}

#[cfg(feature = "parallel")]
fn score_all<'a, T>(candidates: &'a [T], pattern: &str) -> Vec<SearchResult<&'a T>>
where
    T: AsRef<str> + Sync,
{
    use rayon::prelude::*;
    candidates
        .par_iter()
        .map(|item| SearchResult {
            score: search_string(item.as_ref(), pattern),
            item,
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a, T>(candidates: &'a [T], pattern: &str) -> Vec<SearchResult<&'a T>>
where
    T: AsRef<str> + Sync,
{
    candidates
        .iter()
        .map(|item| SearchResult {
            score: search_string(item.as_ref(), pattern),
            item,
        })
        .collect()
}

#[derive(Deserialize)]
struct JsonItem {
    id: String,
    text: String,
}

impl AsRef<str> for JsonItem {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[derive(Serialize)]
struct JsonResult<'a> {
    id: &'a str,
    score: i64,
}

/// Rank a JSON array of `{"id", "text"}` items.
///
/// # Arguments
/// * `pattern` - Search pattern
/// * `items_json` - JSON array of items with `id` and `text` fields
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of `{"id", "score"}` objects, best first
///
/// # Errors
/// Returns [`SearchError::InvalidItems`] if `items_json` is not a valid item array.
pub fn rank_json(pattern: &str, items_json: &str, max_results: usize) -> Result<String> {
    let items: Vec<JsonItem> =
        serde_json::from_str(items_json).map_err(|e| SearchError::InvalidItems(e.to_string()))?;

    let options = RankOptions {
        max_results: (max_results > 0).then_some(max_results),
        ..RankOptions::default()
    };

    let results: Vec<JsonResult<'_>> = rank(&items, pattern, &options)
        .into_iter()
        .map(|r| JsonResult {
            id: &r.item.id,
            score: r.score,
        })
        .collect();

    serde_json::to_string(&results).map_err(|e| SearchError::Serialization(e.to_string()))
}
