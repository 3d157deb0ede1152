//! Feature extraction for the embedding encoder.
//!
//! [`extract_features`] projects a full [`Profile`] into a compact, typed
//! [`FeatureVector`], the only view of a profile the encoder ever sees. The
//! projection is total: missing optional fields map to empty or neutral
//! defaults, never to an error.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Compact, typed projection of a profile consumed by the embedding encoder.
///
/// Constructed fresh per scoring call and never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    // Scalar fields
    pub location: String,
    pub industry: String,
    pub experience_tier: ExperienceTier,
    pub career_stage: String,
    pub primary_intent: String,

    // Multi-valued fields
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
    pub values: Vec<String>,
    pub languages: Vec<String>,
    pub sub_intents: Vec<String>,

    // Paired learn/teach lists
    pub learn_skills: Vec<String>,
    pub teach_skills: Vec<String>,
    pub learn_functions: Vec<String>,
    pub teach_functions: Vec<String>,

    // Numeric fields
    pub experience_years: f64,
    pub completion_ratio: f64,
    pub verified: f64,
}

impl FeatureVector {
    /// Whether the vector carries at least one identity, skill, or hobby
    /// signal. Vectors failing this check encode to nothing useful.
    pub fn is_valid(&self) -> bool {
        !self.location.is_empty()
            || !self.industry.is_empty()
            || !self.skills.is_empty()
            || !self.hobbies.is_empty()
    }
}

/// Coarse experience bucket derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceTier {
    /// Less than 3 years.
    Early,
    /// 3 to 7 years.
    Mid,
    /// 8 to 14 years.
    Senior,
    /// 15 years or more.
    Veteran,
}

impl ExperienceTier {
    /// Bucket a years-of-experience value; `None` maps to `Early`.
    pub fn from_years(years: Option<f64>) -> Self {
        match years {
            Some(y) if y >= 15.0 => ExperienceTier::Veteran,
            Some(y) if y >= 8.0 => ExperienceTier::Senior,
            Some(y) if y >= 3.0 => ExperienceTier::Mid,
            _ => ExperienceTier::Early,
        }
    }
}

/// Project a profile into a [`FeatureVector`].
///
/// Learn/teach skill lists are the interest skills filtered on their flags.
/// Learn/teach function lists take at most the first declared function per
/// career-direction entry.
pub fn extract_features(profile: &Profile) -> FeatureVector {
    let learn_skills = profile
        .interest_skills
        .iter()
        .filter(|s| s.learn)
        .map(|s| s.name.clone())
        .collect();
    let teach_skills = profile
        .interest_skills
        .iter()
        .filter(|s| s.teach)
        .map(|s| s.name.clone())
        .collect();

    let learn_functions = profile
        .career_directions
        .iter()
        .filter(|d| d.learn)
        .filter_map(|d| d.functions.first().cloned())
        .collect();
    let teach_functions = profile
        .career_directions
        .iter()
        .filter(|d| d.teach)
        .filter_map(|d| d.functions.first().cloned())
        .collect();

    FeatureVector {
        location: profile.location.clone().unwrap_or_default(),
        industry: profile.industry.clone().unwrap_or_default(),
        experience_tier: ExperienceTier::from_years(profile.experience_years),
        career_stage: profile.career_stage.clone().unwrap_or_default(),
        primary_intent: profile.primary_intent.clone().unwrap_or_default(),
        skills: profile.skills.clone(),
        hobbies: profile.hobbies.clone(),
        values: profile.values.clone(),
        languages: profile.languages.clone(),
        sub_intents: profile.sub_intents.clone(),
        learn_skills,
        teach_skills,
        learn_functions,
        teach_functions,
        experience_years: profile.experience_years.unwrap_or(0.0),
        completion_ratio: profile.completion_ratio,
        verified: profile.verification.as_flag(),
    }
}
