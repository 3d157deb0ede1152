//! Levenshtein distance and fuzzy string similarity.
//!
//! Comparison is byte-for-char exact; callers that want case-insensitive
//! matching lowercase both sides first.

use std::cmp::min;

/// Default edit-distance threshold for [`fuzzy_string_match`].
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into another.
/// Uses the full DP matrix, `O(|a|·|b|)` time and space.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0; len_b + 1]; len_a + 1];

    for i in 0..=len_a {
        matrix[i][0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len_a][len_b]
}

/// Whether two strings are within `threshold` edits of each other.
///
/// Length pre-check short-circuits pairs that cannot possibly match.
pub fn fuzzy_string_match(a: &str, b: &str, threshold: usize) -> bool {
    if a.chars().count().abs_diff(b.chars().count()) > threshold {
        return false;
    }
    levenshtein_distance(a, b) <= threshold
}

/// Normalized fuzzy similarity in `[0, 1]`.
///
/// Defined as `1 - distance / max(len)`. Two empty strings yield `0.0`.
pub fn fuzzy_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
