use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::experience::{calculate_experience_match_as_of, total_experience_years_as_of};
use super::job_type::calculate_job_type_match;
use super::location::calculate_location_match;
use super::skills::calculate_skills_match;
use super::weights::MATCH_WEIGHTS;
use crate::{JobPosting, UserProfile};

/// One factor's contribution with a status band and human-readable detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: f64,
    pub status: String,
    pub details: String,
}

/// Full four-factor breakdown behind a single match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub total: f64,
    pub skills: FactorScore,
    pub experience: FactorScore,
    pub location: FactorScore,
    pub job_type: FactorScore,
}

/// Weighted compatibility score in [0, 1] between a candidate profile and
/// a job posting. Scalar view of [`calculate_match_breakdown`].
pub fn calculate_match_score(user: &UserProfile, job: &JobPosting) -> f64 {
    calculate_match_breakdown(user, job).total
}

/// Breakdown evaluated at the current date. See
/// [`calculate_match_breakdown_as_of`] for the deterministic variant.
pub fn calculate_match_breakdown(user: &UserProfile, job: &JobPosting) -> MatchBreakdown {
    calculate_match_breakdown_as_of(user, job, Utc::now().date_naive())
}

/// Compute all four sub-scores and combine them with the fixed weights.
///
/// The division by the weight sum is defensive: the constant weights sum
/// to 1.0, and a zero sum yields a 0.0 total rather than a division error.
pub fn calculate_match_breakdown_as_of(
    user: &UserProfile,
    job: &JobPosting,
    today: NaiveDate,
) -> MatchBreakdown {
    let skills_score = calculate_skills_match(&user.skills, &job.required_skills);
    let experience_score =
        calculate_experience_match_as_of(&user.experience, job.experience_level.as_deref(), today);
    let location_score = calculate_location_match(&user.preferences.locations, job);
    let job_type_score =
        calculate_job_type_match(&user.preferences.job_types, job.job_type.as_deref());

    let weights = MATCH_WEIGHTS;
    let weight_sum = weights.sum();
    let total = if weight_sum == 0.0 {
        0.0
    } else {
        (skills_score * weights.skills
            + experience_score * weights.experience
            + location_score * weights.location
            + job_type_score * weights.job_type)
            / weight_sum
    };

    MatchBreakdown {
        total,
        skills: skills_factor(user, job, skills_score),
        experience: experience_factor(user, job, experience_score, today),
        location: location_factor(user, job, location_score),
        job_type: job_type_factor(user, job, job_type_score),
    }
}

fn skills_factor(user: &UserProfile, job: &JobPosting, score: f64) -> FactorScore {
    if user.skills.is_empty() || job.required_skills.is_empty() {
        return FactorScore {
            score,
            status: "UNKNOWN".into(),
            details: "no skills to compare on one side".into(),
        };
    }
    FactorScore {
        score,
        status: status_from_score(score).into(),
        details: format!(
            "covers {:.0}% of {} weighted required skills",
            score * 100.0,
            job.required_skills.len()
        ),
    }
}

fn experience_factor(
    user: &UserProfile,
    job: &JobPosting,
    score: f64,
    today: NaiveDate,
) -> FactorScore {
    if user.experience.is_empty() {
        return FactorScore {
            score,
            status: "UNKNOWN".into(),
            details: "no experience entries; neutral score".into(),
        };
    }
    let total_years = total_experience_years_as_of(&user.experience, today);
    FactorScore {
        score,
        status: status_from_score(score).into(),
        details: format!(
            "{:.1} years against level '{}'",
            total_years,
            job.experience_level.as_deref().unwrap_or("unspecified")
        ),
    }
}

fn location_factor(user: &UserProfile, job: &JobPosting, score: f64) -> FactorScore {
    if job.remote {
        return FactorScore {
            score,
            status: "PERFECT_MATCH".into(),
            details: "remote posting; no location constraint".into(),
        };
    }
    if user.preferences.locations.is_empty() {
        return FactorScore {
            score,
            status: "UNKNOWN".into(),
            details: "no preferred locations; neutral score".into(),
        };
    }
    FactorScore {
        score,
        status: status_from_score(score).into(),
        details: format!(
            "preferences vs '{}'",
            job.location.as_deref().unwrap_or("unspecified")
        ),
    }
}

fn job_type_factor(user: &UserProfile, job: &JobPosting, score: f64) -> FactorScore {
    if user.preferences.job_types.is_empty() {
        return FactorScore {
            score,
            status: "UNKNOWN".into(),
            details: "no preferred job types; mild positive default".into(),
        };
    }
    FactorScore {
        score,
        status: status_from_score(score).into(),
        details: format!(
            "preferences vs '{}'",
            job.job_type.as_deref().unwrap_or("unspecified")
        ),
    }
}

fn status_from_score(score: f64) -> &'static str {
    if score >= 0.9 {
        "PERFECT_MATCH"
    } else if score >= 0.7 {
        "MATCH"
    } else if score >= 0.4 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExperienceEntry, Preferences, RequiredSkill, SkillRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn skill(name: &str) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            level: Default::default(),
            ai_extracted: false,
            confidence: 1.0,
        }
    }

    fn python_candidate() -> UserProfile {
        UserProfile {
            skills: vec![skill("python")],
            // exactly 3 years as of the test date
            experience: vec![ExperienceEntry {
                start_date: date(2023, 6, 1),
                end_date: Some(date(2026, 6, 1)),
            }],
            preferences: Preferences {
                locations: vec!["Remote".into()],
                job_types: vec!["full-time".into()],
            },
        }
    }

    fn python_job() -> JobPosting {
        JobPosting {
            required_skills: vec![RequiredSkill {
                name: "python".into(),
                mandatory: true,
            }],
            experience_level: Some("mid".into()),
            remote: true,
            location: None,
            job_type: Some("full-time".into()),
        }
    }

    #[test]
    fn perfect_candidate_scores_near_one() {
        let breakdown =
            calculate_match_breakdown_as_of(&python_candidate(), &python_job(), date(2026, 6, 1));

        assert!((breakdown.skills.score - 1.0).abs() < 1e-9);
        assert_eq!(breakdown.experience.score, 1.0);
        assert_eq!(breakdown.location.score, 1.0);
        assert_eq!(breakdown.job_type.score, 1.0);
        assert!(breakdown.total > 0.99, "got {}", breakdown.total);
    }

    #[test]
    fn scalar_score_matches_breakdown_total() {
        let user = python_candidate();
        let job = python_job();
        let score = calculate_match_score(&user, &job);
        let breakdown = calculate_match_breakdown(&user, &job);
        assert!((score - breakdown.total).abs() < 1e-9);
    }

    #[test]
    fn empty_profile_against_empty_job_uses_neutral_defaults() {
        let breakdown = calculate_match_breakdown_as_of(
            &UserProfile::default(),
            &JobPosting {
                remote: true,
                ..JobPosting::default()
            },
            date(2026, 6, 1),
        );

        assert_eq!(breakdown.skills.score, 0.0);
        assert_eq!(breakdown.skills.status, "UNKNOWN");
        assert_eq!(breakdown.experience.score, 0.5);
        assert_eq!(breakdown.location.score, 1.0);
        assert_eq!(breakdown.job_type.score, 0.8);

        // 0.0*0.4 + 0.5*0.3 + 1.0*0.2 + 0.8*0.1
        assert!((breakdown.total - 0.43).abs() < 1e-9);
    }

    #[test]
    fn weights_shift_the_total_toward_skills() {
        let mut user = python_candidate();
        let job = python_job();

        let full = calculate_match_breakdown_as_of(&user, &job, date(2026, 6, 1)).total;

        // dropping the only matching skill costs the full 0.4 skills weight
        user.skills.clear();
        let without_skills = calculate_match_breakdown_as_of(&user, &job, date(2026, 6, 1)).total;
        assert!((full - without_skills - 0.4).abs() < 1e-9);
    }

    #[test]
    fn breakdown_reports_statuses_and_details() {
        let breakdown =
            calculate_match_breakdown_as_of(&python_candidate(), &python_job(), date(2026, 6, 1));

        assert_eq!(breakdown.skills.status, "PERFECT_MATCH");
        assert_eq!(breakdown.location.status, "PERFECT_MATCH");
        assert!(breakdown.experience.details.contains("3.0 years"));
        assert!(breakdown.location.details.contains("remote"));
    }

    #[test]
    fn breakdown_serializes_for_api_consumers() {
        let breakdown =
            calculate_match_breakdown_as_of(&python_candidate(), &python_job(), date(2026, 6, 1));

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["skills"]["status"], "PERFECT_MATCH");
        assert!(json["total"].as_f64().unwrap() > 0.99);

        let roundtrip: MatchBreakdown = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, breakdown);
    }

    #[test]
    fn onsite_mismatch_drags_the_total_down() {
        let user = python_candidate();
        let mut job = python_job();
        job.remote = false;
        job.location = Some("Osaka".into());

        let breakdown = calculate_match_breakdown_as_of(&user, &job, date(2026, 6, 1));
        assert_eq!(breakdown.location.score, 0.3);
        assert_eq!(breakdown.location.status, "MISS");
        // 1.0*0.4 + 1.0*0.3 + 0.3*0.2 + 1.0*0.1
        assert!((breakdown.total - 0.86).abs() < 1e-9);
    }
}
