//! WASM bindings for fuzzy matching.

use wasm_bindgen::prelude::*;

/// Check if text contains a fuzzy match for query.
///
/// Returns true if all characters in query appear in text in order.
#[wasm_bindgen]
pub fn fuzzy_contains(query: &str, text: &str) -> bool {
    crate::fuzzy_match(text, query)
}

/// Scored fuzzy match of query against text.
///
/// Returns the score, or `null` when the query does not match.
#[wasm_bindgen]
pub fn fuzzy_score(query: &str, text: &str) -> Option<i32> {
    let result = crate::fuzzy_match_scored(text, query);
    result.is_match.then_some(result.score)
}

/// Word-aggregated score of query against text.
#[wasm_bindgen]
pub fn search_score(query: &str, text: &str) -> f64 {
    // JS numbers; scores stay well inside f64's exact integer range
    crate::search_string(text, query) as f64
}

/// Search items and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of items with `id` and `text` fields
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id` and `score` fields, sorted by score
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, max_results: usize) -> String {
    crate::rank_json(query, items_json, max_results).unwrap_or_else(|_| "[]".to_string())
}
