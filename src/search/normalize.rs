//! Score normalization for fusion.

/// Min-max normalize a score slice to `[0, 1]`.
///
/// When every score is identical (including the single-element case) there
/// is no spread to map, and each score normalizes to the neutral `0.5`.
pub fn min_max_normalize(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![0.5; scores.len()];
    }

    scores.iter().map(|s| (s - min) / (max - min)).collect()
}
