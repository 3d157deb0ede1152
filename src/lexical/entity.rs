//! Structured entity scoring against a profile.
//!
//! Higher-precision than the zone pass and independent of it. Every rule is a
//! first-match-wins search over an ordered collection, which prevents a single
//! query entity from being counted twice.

use crate::matching::levenshtein::fuzzy_similarity;
use crate::matching::soft::{self, DEFAULT_HALF_LIFE, time_decay, years_ago};
use crate::profile::Profile;
use crate::query::QueryEntities;

/// Score for a current-company match.
const CURRENT_COMPANY_SCORE: f64 = 5.0;
/// Base score for a past-company match, before recency decay.
const PAST_COMPANY_SCORE: f64 = 2.0;
/// Score for a current-role match.
const CURRENT_ROLE_SCORE: f64 = 4.0;
/// Score per matched school.
const SCHOOL_SCORE: f64 = 3.0;
/// Cap on the skill-overlap contribution.
const SKILL_OVERLAP_CAP: f64 = 5.0;
/// Fuzzy-similarity threshold for role matching.
const ROLE_FUZZY_THRESHOLD: f64 = 0.7;
/// Past-company scan depth: only the most recent work entries count.
const PAST_COMPANY_DEPTH: usize = 5;

/// Structured entity score for a profile against the query's entities.
pub fn entity_score(profile: &Profile, entities: &QueryEntities) -> f64 {
    entity_score_as_of(profile, entities, soft::current_year())
}

/// Deterministic variant of [`entity_score`] evaluated against an explicit
/// current year, used for the past-company recency decay.
pub fn entity_score_as_of(profile: &Profile, entities: &QueryEntities, current_year: i32) -> f64 {
    let mut score = 0.0;

    // Current company: first matching query company wins, then short-circuit.
    let profile_company = profile
        .company
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let mut matched_current_company = false;
    if !profile_company.is_empty() {
        for query_company in &entities.companies {
            if profile_company.contains(&query_company.to_lowercase()) {
                score += CURRENT_COMPANY_SCORE;
                matched_current_company = true;
                break;
            }
        }
    }

    // Past companies: most recent entries only, first match per entry,
    // weighted by how long ago the role ended. An entry for the company that
    // already matched as the current company is skipped so the same employer
    // is not counted twice.
    for experience in profile.work_experiences.iter().take(PAST_COMPANY_DEPTH) {
        let experience_company = experience.company.to_lowercase();
        if matched_current_company && experience_company == profile_company {
            continue;
        }
        for query_company in &entities.companies {
            if experience_company.contains(&query_company.to_lowercase()) {
                score += PAST_COMPANY_SCORE
                    * time_decay(years_ago(experience, current_year), DEFAULT_HALF_LIFE);
                break;
            }
        }
    }

    // Current role: substring either direction, or close enough by edit
    // distance. First match only.
    let profile_title = profile
        .job_title
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if !profile_title.is_empty() {
        for query_role in &entities.roles {
            let query_role = query_role.to_lowercase();
            if profile_title.contains(&query_role)
                || query_role.contains(&profile_title)
                || fuzzy_similarity(&profile_title, &query_role) > ROLE_FUZZY_THRESHOLD
            {
                score += CURRENT_ROLE_SCORE;
                break;
            }
        }
    }

    // Schools: every matched school counts, uncapped.
    for education in &profile.educations {
        let school = education.school.to_lowercase();
        for query_school in &entities.schools {
            if school.contains(&query_school.to_lowercase()) {
                score += SCHOOL_SCORE;
                break;
            }
        }
    }

    // Skill overlap: substring either direction, diminishing returns capped.
    if !entities.skills.is_empty() {
        let matched = profile
            .skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                entities.skills.iter().any(|query_skill| {
                    let query_skill = query_skill.to_lowercase();
                    skill.contains(&query_skill) || query_skill.contains(&skill)
                })
            })
            .count();
        score += (matched as f64).min(SKILL_OVERLAP_CAP);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Education, WorkExperience};

    fn entities_with_companies(companies: &[&str]) -> QueryEntities {
        QueryEntities {
            companies: companies.iter().map(|s| s.to_string()).collect(),
            ..QueryEntities::default()
        }
    }

    #[test]
    fn test_current_company_match() {
        let profile = Profile::new("u-1", "Ada").with_company("Stripe");
        let score = entity_score_as_of(&profile, &entities_with_companies(&["stripe"]), 2025);
        assert_eq!(score, CURRENT_COMPANY_SCORE);
    }

    #[test]
    fn test_current_company_first_match_short_circuits() {
        let profile = Profile::new("u-1", "Ada").with_company("Stripe");
        // Both query companies match the profile company; only one counts.
        let score = entity_score_as_of(&profile, &entities_with_companies(&["stripe", "trip"]), 2025);
        assert_eq!(score, CURRENT_COMPANY_SCORE);
    }

    #[test]
    fn test_current_company_not_double_counted_as_past() {
        let profile = Profile::new("u-1", "Ada")
            .with_company("Stripe")
            .with_work_experience(
                WorkExperience::new("Stripe", "Engineer").with_years(Some(2021), None),
            );
        let score = entity_score_as_of(&profile, &entities_with_companies(&["stripe"]), 2025);
        assert_eq!(score, CURRENT_COMPANY_SCORE);
    }

    #[test]
    fn test_past_company_decay() {
        let profile = Profile::new("u-1", "Ada").with_work_experience(
            WorkExperience::new("Stripe", "Engineer").with_years(Some(2015), Some(2019)),
        );
        // Ended 6 years ago at half-life 3: decay 0.25.
        let score = entity_score_as_of(&profile, &entities_with_companies(&["stripe"]), 2025);
        assert!((score - PAST_COMPANY_SCORE * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_past_company_scan_depth() {
        let mut profile = Profile::new("u-1", "Ada");
        for i in 0..PAST_COMPANY_DEPTH {
            profile.work_experiences.push(
                WorkExperience::new("Initech", "Engineer")
                    .with_years(Some(2000), Some(2020 - i as i32)),
            );
        }
        // Sixth, older entry is the only one matching the query.
        profile.work_experiences.push(
            WorkExperience::new("Stripe", "Engineer").with_years(Some(2000), Some(2010)),
        );

        let score = entity_score_as_of(&profile, &entities_with_companies(&["stripe"]), 2025);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_role_match_fuzzy_and_substring() {
        let profile = Profile::new("u-1", "Ada").with_job_title("Product Manager");

        let substring = QueryEntities {
            roles: vec!["manager".to_string()],
            ..QueryEntities::default()
        };
        assert_eq!(
            entity_score_as_of(&profile, &substring, 2025),
            CURRENT_ROLE_SCORE
        );

        let fuzzy = QueryEntities {
            roles: vec!["product managr".to_string()],
            ..QueryEntities::default()
        };
        assert_eq!(entity_score_as_of(&profile, &fuzzy, 2025), CURRENT_ROLE_SCORE);

        let unrelated = QueryEntities {
            roles: vec!["surgeon".to_string()],
            ..QueryEntities::default()
        };
        assert_eq!(entity_score_as_of(&profile, &unrelated, 2025), 0.0);
    }

    #[test]
    fn test_school_matches_uncapped() {
        let profile = Profile::new("u-1", "Ada")
            .with_education(Education::new("Waterloo"))
            .with_education(Education::new("MIT"));
        let entities = QueryEntities {
            schools: vec!["waterloo".to_string(), "mit".to_string()],
            ..QueryEntities::default()
        };
        assert_eq!(
            entity_score_as_of(&profile, &entities, 2025),
            2.0 * SCHOOL_SCORE
        );
    }

    #[test]
    fn test_skill_overlap_capped() {
        let profile = Profile::new("u-1", "Ada").with_skills(
            (0..8).map(|i| format!("rust-{i}")).collect(),
        );
        let entities = QueryEntities {
            skills: vec!["rust".to_string()],
            ..QueryEntities::default()
        };
        // All 8 profile skills contain "rust" but the contribution caps at 5.
        assert_eq!(entity_score_as_of(&profile, &entities, 2025), SKILL_OVERLAP_CAP);
    }
}
