//! Tokenization of crop names and queries.

/// Split a crop name or query into words.
///
/// Vocabulary entries often carry comma-separated aliases and units, e.g.
/// `"jack be little, squash, each"`. Splitting on commas and spaces, trimming
/// each piece, and dropping empties turns that into
/// `["jack", "be", "little", "squash", "each"]`. An empty input yields no
/// words.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split([',', ' '])
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}
