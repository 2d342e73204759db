//! Case-insensitive string similarity based on edit distance

use strsim::levenshtein;

/// Edit distance between two strings, counted in chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Similarity in `[0, 1]`: the share of the longer string that survives the edit distance.
/// Two empty strings are identical.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (longer, shorter) = if a.chars().count() > b.chars().count() {
        (&a, &b)
    } else {
        (&b, &a)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(longer, shorter);
    (longer_len - distance) as f64 / longer_len as f64
}
