//! Gaussian and temporal soft-match primitives.

use chrono::Datelike;

use crate::profile::WorkExperience;

/// Default Gaussian width for numeric soft matching.
pub const DEFAULT_SIGMA: f64 = 1.5;

/// Default half-life, in years, for recency decay.
pub const DEFAULT_HALF_LIFE: f64 = 3.0;

/// Scale applied to the best experience match so its contribution band
/// matches the other entity-match contributions.
const EXPERIENCE_MATCH_SCALE: f64 = 2.0;

/// Gaussian decay around a target value.
///
/// `exp(-(actual - target)^2 / (2 sigma^2))`, in `(0, 1]`, peaking at
/// `actual == target`.
pub fn gaussian_decay(actual: f64, target: f64, sigma: f64) -> f64 {
    let diff = actual - target;
    (-(diff * diff) / (2.0 * sigma * sigma)).exp()
}

/// Soft match between a profile's experience years and a set of target years.
///
/// Returns `0.0` when the profile declares no experience value or no targets
/// are given. Otherwise the best-matching target dominates: the result is
/// `2.0 * max(gaussian_decay(actual, target))`, a `[0, 2]` contribution.
pub fn soft_experience_match(actual_years: Option<f64>, target_years: &[f64]) -> f64 {
    let Some(actual) = actual_years else {
        return 0.0;
    };
    if target_years.is_empty() {
        return 0.0;
    }

    let best = target_years
        .iter()
        .map(|target| gaussian_decay(actual, *target, DEFAULT_SIGMA))
        .fold(0.0, f64::max);

    EXPERIENCE_MATCH_SCALE * best
}

/// Exponential recency decay.
///
/// `1.0` at `years_ago == 0`, halves every `half_life` years, never negative.
pub fn time_decay(years_ago: f64, half_life: f64) -> f64 {
    0.5f64.powf(years_ago.max(0.0) / half_life)
}

/// Recency-weighted keyword match over a work history.
///
/// Sums `time_decay(years_ago)` over every entry whose company or position
/// contains `keyword` case-insensitively. Ongoing roles contribute with
/// `years_ago = 0`, i.e. full weight.
pub fn time_weighted_experience_match(experiences: &[WorkExperience], keyword: &str) -> f64 {
    time_weighted_experience_match_as_of(experiences, keyword, current_year())
}

/// Deterministic variant of [`time_weighted_experience_match`] evaluated
/// against an explicit current year.
pub fn time_weighted_experience_match_as_of(
    experiences: &[WorkExperience],
    keyword: &str,
    current_year: i32,
) -> f64 {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return 0.0;
    }

    experiences
        .iter()
        .filter(|exp| {
            exp.company.to_lowercase().contains(&keyword)
                || exp.position.to_lowercase().contains(&keyword)
        })
        .map(|exp| time_decay(years_ago(exp, current_year), DEFAULT_HALF_LIFE))
        .sum()
}

/// Years since a work entry ended, 0 for ongoing roles.
pub(crate) fn years_ago(experience: &WorkExperience, current_year: i32) -> f64 {
    match experience.end_year {
        Some(end) => (current_year - end).max(0) as f64,
        None => 0.0,
    }
}

pub(crate) fn current_year() -> i32 {
    chrono::Utc::now().year()
}
