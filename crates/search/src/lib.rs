//! Fuzzy subsequence matching with heuristic scoring.
//!
//! This crate provides:
//! - Case-insensitive subsequence checks
//! - Scored matching with boundary, camel-case and adjacency bonuses
//! - Word-aggregated search over multi-word strings
//! - Ranking of candidate lists (parallel with the `parallel` feature)
//!
//! All matching functions are pure and never fail.
//!
//! # Example
//!
//! ```
//! use sundry_search::{fuzzy_match_scored, search_string};
//!
//! let result = fuzzy_match_scored("hello", "HELLO");
//! assert!(result.is_match);
//!
//! assert!(search_string("quick brown fox", "brn fox") > 2000);
//! ```

#![warn(missing_docs)]

mod error;
pub mod matcher;
pub mod rank;
mod words;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError};
pub use matcher::{fuzzy_match, fuzzy_match_scored, MatchResult};
pub use rank::{rank, rank_json, RankOptions, SearchResult};
pub use words::{search_optional, search_string, split_words, MATCH_BONUS, WORD_SEPARATORS};
