//! Zone construction and zone-weighted token scoring.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Weight for a match in the current-role zone.
pub const ZONE_A_WEIGHT: f64 = 3.0;
/// Weight for a match in the background zone.
pub const ZONE_B_WEIGHT: f64 = 1.5;
/// Weight for a match in the personal zone.
pub const ZONE_C_WEIGHT: f64 = 0.5;

/// Tokens shorter than this are skipped entirely.
const MIN_TOKEN_LEN: usize = 2;

/// How many declared skills feed the current-role zone.
const ZONE_A_SKILL_COUNT: usize = 5;

/// How many recent work entries feed the background zone.
const ZONE_B_EXPERIENCE_COUNT: usize = 3;

/// A profile's text split into three lowercase importance zones.
///
/// Rebuilt per scoring call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonedText {
    /// Zone A: current title, company, industry, and top skills.
    pub current: String,
    /// Zone B: bio, location, education, and recent work history.
    pub background: String,
    /// Zone C: hobbies, values, and self-introduction.
    pub personal: String,
}

impl ZonedText {
    /// Build the three zones from a profile.
    pub fn build(profile: &Profile) -> Self {
        let mut current: Vec<&str> = Vec::new();
        if let Some(title) = &profile.job_title {
            current.push(title);
        }
        if let Some(company) = &profile.company {
            current.push(company);
        }
        if let Some(industry) = &profile.industry {
            current.push(industry);
        }
        for skill in profile.skills.iter().take(ZONE_A_SKILL_COUNT) {
            current.push(skill);
        }

        let mut background: Vec<&str> = Vec::new();
        if let Some(bio) = &profile.bio {
            background.push(bio);
        }
        if let Some(location) = &profile.location {
            background.push(location);
        }
        for education in &profile.educations {
            background.push(&education.school);
            if let Some(degree) = &education.degree {
                background.push(degree);
            }
            if let Some(field) = &education.field {
                background.push(field);
            }
        }
        for experience in profile.work_experiences.iter().take(ZONE_B_EXPERIENCE_COUNT) {
            background.push(&experience.company);
            background.push(&experience.position);
            for skill in &experience.skills {
                background.push(skill);
            }
        }

        let mut personal: Vec<&str> = Vec::new();
        for hobby in &profile.hobbies {
            personal.push(hobby);
        }
        for value in &profile.values {
            personal.push(value);
        }
        if let Some(intro) = &profile.self_introduction {
            personal.push(intro);
        }

        Self {
            current: current.join(" ").to_lowercase(),
            background: background.join(" ").to_lowercase(),
            personal: personal.join(" ").to_lowercase(),
        }
    }
}

/// Zone-weighted token overlap between a profile and query tokens.
///
/// Each token of length >= 2 is tested against zone A, then B, then C; the
/// first containing zone wins and contributes its weight. A token never
/// scores in more than one zone, so identical keywords score higher in a
/// user's current role than in their background.
pub fn zone_score(profile: &Profile, tokens: &[String]) -> f64 {
    let zones = ZonedText::build(profile);
    let mut score = 0.0;

    for token in tokens {
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }
        let token = token.to_lowercase();

        if zones.current.contains(&token) {
            score += ZONE_A_WEIGHT;
        } else if zones.background.contains(&token) {
            score += ZONE_B_WEIGHT;
        } else if zones.personal.contains(&token) {
            score += ZONE_C_WEIGHT;
        }
    }

    score
}
