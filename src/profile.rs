//! Profile data model.
//!
//! Profiles are owned by the external profile store and are read-only to this
//! crate: a [`Profile`] is loaded, scored, and dropped, never mutated within a
//! scoring pass. The struct mirrors what the store returns: professional
//! background, personality/social signals, and trust level.

use serde::{Deserialize, Serialize};

/// A user profile as returned by the profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Stable profile identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Free-form location string.
    pub location: Option<String>,
    /// Current job title.
    pub job_title: Option<String>,
    /// Current company.
    pub company: Option<String>,
    /// Current industry.
    pub industry: Option<String>,
    /// Declared skills, most relevant first.
    pub skills: Vec<String>,
    /// Total years of professional experience.
    pub experience_years: Option<f64>,
    /// Work history, most recent first.
    pub work_experiences: Vec<WorkExperience>,
    /// Education history.
    pub educations: Vec<Education>,
    /// Spoken languages.
    pub languages: Vec<String>,
    /// Hobbies.
    pub hobbies: Vec<String>,
    /// Personal values tags.
    pub values: Vec<String>,
    /// Short biography shown on the profile.
    pub bio: Option<String>,
    /// Longer self-introduction text.
    pub self_introduction: Option<String>,
    /// Skills the user wants to learn or teach.
    pub interest_skills: Vec<InterestSkill>,
    /// Career directions the user wants to move into or mentor in.
    pub career_directions: Vec<CareerDirection>,
    /// Primary matching intent (e.g. "mentorship", "cofounder").
    pub primary_intent: Option<String>,
    /// Secondary matching intents.
    pub sub_intents: Vec<String>,
    /// Career stage (e.g. "early", "senior", "executive").
    pub career_stage: Option<String>,
    /// Fraction of profile fields the user has filled in, in [0, 1].
    pub completion_ratio: f64,
    /// Identity verification tier.
    pub verification: VerificationTier,
}

impl Profile {
    /// Create a minimal profile with the given id and display name.
    pub fn new<S: Into<String>>(id: S, display_name: S) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            location: None,
            job_title: None,
            company: None,
            industry: None,
            skills: Vec::new(),
            experience_years: None,
            work_experiences: Vec::new(),
            educations: Vec::new(),
            languages: Vec::new(),
            hobbies: Vec::new(),
            values: Vec::new(),
            bio: None,
            self_introduction: None,
            interest_skills: Vec::new(),
            career_directions: Vec::new(),
            primary_intent: None,
            sub_intents: Vec::new(),
            career_stage: None,
            completion_ratio: 0.0,
            verification: VerificationTier::Unverified,
        }
    }

    /// Set the current job title.
    pub fn with_job_title<S: Into<String>>(mut self, title: S) -> Self {
        self.job_title = Some(title.into());
        self
    }

    /// Set the current company.
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the current industry.
    pub fn with_industry<S: Into<String>>(mut self, industry: S) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the declared skills.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Set the total years of experience.
    pub fn with_experience_years(mut self, years: f64) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Append a work experience entry.
    pub fn with_work_experience(mut self, experience: WorkExperience) -> Self {
        self.work_experiences.push(experience);
        self
    }

    /// Append an education entry.
    pub fn with_education(mut self, education: Education) -> Self {
        self.educations.push(education);
        self
    }
}

/// A single work-history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    /// Company name.
    pub company: String,
    /// Position or role title.
    pub position: String,
    /// Skills exercised in this role.
    pub skills: Vec<String>,
    /// Year the role started.
    pub start_year: Option<i32>,
    /// Year the role ended. `None` means the role is ongoing.
    pub end_year: Option<i32>,
}

impl WorkExperience {
    /// Create a new work-history entry.
    pub fn new<S: Into<String>>(company: S, position: S) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            skills: Vec::new(),
            start_year: None,
            end_year: None,
        }
    }

    /// Set the start and end years. Pass `None` for an ongoing role.
    pub fn with_years(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Set the skills exercised in this role.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Whether the role has no end year.
    pub fn is_ongoing(&self) -> bool {
        self.end_year.is_none()
    }
}

/// A single education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// School name.
    pub school: String,
    /// Degree obtained, if declared.
    pub degree: Option<String>,
    /// Field of study, if declared.
    pub field: Option<String>,
}

impl Education {
    /// Create a new education entry.
    pub fn new<S: Into<String>>(school: S) -> Self {
        Self {
            school: school.into(),
            degree: None,
            field: None,
        }
    }
}

/// A skill the user has flagged for learning or teaching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestSkill {
    /// Skill name.
    pub name: String,
    /// The user wants to learn this skill.
    pub learn: bool,
    /// The user can teach this skill.
    pub teach: bool,
}

/// A career direction with the job functions it covers.
///
/// Each entry can declare several functions; only the first declared function
/// contributes to the learn/teach feature lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerDirection {
    /// Job functions covered by this direction, in declaration order.
    pub functions: Vec<String>,
    /// The user wants to move into this direction.
    pub learn: bool,
    /// The user can mentor in this direction.
    pub teach: bool,
}

/// Identity verification tier of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationTier {
    /// No verification performed.
    #[default]
    Unverified,
    /// Email address verified.
    EmailVerified,
    /// Government ID verified.
    IdVerified,
}

impl VerificationTier {
    /// Numeric verification flag used in feature vectors: 0 or 1.
    pub fn as_flag(&self) -> f64 {
        match self {
            VerificationTier::Unverified => 0.0,
            _ => 1.0,
        }
    }
}
