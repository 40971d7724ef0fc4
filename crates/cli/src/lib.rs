//! CLI utilities for sundry tools
//!
//! Provides shared terminal output:
//! - Status messages
//! - Score and count formatting
//! - Match highlighting

#![warn(missing_docs)]

pub mod output;
