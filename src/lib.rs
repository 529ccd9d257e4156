pub mod extraction;
pub mod logging;
pub mod matching;
pub mod validate;

pub use extraction::{calculate_confidence, extract_skills_from_text, skill_context};
pub use matching::{
    calculate_experience_match, calculate_experience_match_as_of, calculate_job_type_match,
    calculate_location_match, calculate_match_breakdown, calculate_match_breakdown_as_of,
    calculate_match_score, calculate_skills_match, FactorScore, MatchBreakdown,
};
pub use validate::{validate_job_posting, validate_user_profile, InputError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-assessed or inferred proficiency. The extractor always emits
/// `Intermediate`; other levels come from user-curated profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

/// One identified competency with its extraction confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub ai_extracted: bool,
    #[serde(default)]
    pub confidence: f64,
}

/// Skill requirement on a job posting. Mandatory entries weigh twice
/// as heavily in the skills sub-score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    #[serde(default)]
    pub mandatory: bool,
}

/// One stretch of work history. A missing `end_date` means ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub job_types: Vec<String>,
}

/// Candidate-side input to scoring. All fields default to empty so a
/// sparse profile degrades to neutral or zero sub-scores instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Job-side input to scoring. `location` is required by contract whenever
/// `remote` is false; see `validate::validate_job_posting`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    pub experience_level: Option<String>,
    #[serde(default)]
    pub remote: bool,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}
