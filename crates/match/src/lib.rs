//! Fuzzy crop-name matching for CropLog.
//!
//! This crate provides:
//! - Jaro-Winkler string similarity
//! - Comma/space tokenization of crop names and queries
//! - Multi-word query scoring with top-K ranking
//!
//! The interactive entry tool calls [`rank`] on every keystroke with the full
//! crop vocabulary and the current query; the call is pure and keeps no state
//! between invocations, so repeated calls are safe from any call site.
//!
//! # Example
//!
//! ```
//! use croplog_match::rank;
//!
//! let crops = vec![
//!     "cucumbers, each".to_string(),
//!     "cabbage, green".to_string(),
//!     "carrots, bunch".to_string(),
//! ];
//!
//! let matches = rank(&crops, "cucum", 5);
//! assert_eq!(matches[0], "cucumbers, each");
//! ```

mod rank;
mod similarity;
mod token;

#[cfg(feature = "wasm")]
mod wasm;

pub use rank::{rank, rank_scored, ScoredCandidate};
pub use similarity::jaro_winkler_similarity;
pub use token::tokenize;
