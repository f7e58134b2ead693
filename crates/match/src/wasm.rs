//! WASM bindings for the matching engine.

use wasm_bindgen::prelude::*;

/// Calculate the Jaro-Winkler similarity between two words.
///
/// Returns a score between 0.0 and 1.0, case-insensitive.
#[wasm_bindgen]
pub fn similarity_score(a: &str, b: &str) -> f64 {
    crate::jaro_winkler_similarity(a, b)
}

/// Rank crop names against a query and return scored results as JSON.
///
/// # Arguments
/// * `query` - Current query text
/// * `candidates_json` - JSON array of candidate strings
/// * `limit` - Maximum number of results to return
///
/// # Returns
/// JSON array of `{name, score}` records, best match first. Malformed input
/// yields an empty array.
#[wasm_bindgen]
pub fn rank_crops(query: &str, candidates_json: &str, limit: usize) -> String {
    let candidates: Vec<String> = match serde_json::from_str(candidates_json) {
        Ok(candidates) => candidates,
        Err(_) => return "[]".to_string(),
    };

    let results = crate::rank_scored(&candidates, query, limit);
    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
