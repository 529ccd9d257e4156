use chrono::NaiveDate;
use thiserror::Error;

use crate::{JobPosting, UserProfile};

/// Precondition violations in caller-supplied records. Scoring itself is
/// defensive and never returns these; callers that want hard failures run
/// these checks before scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("non-remote job posting is missing a location")]
    MissingLocation,
    #[error("required skill at index {0} has an empty name")]
    EmptyRequiredSkillName(usize),
    #[error("experience entry ends before it starts: {start} > {end}")]
    InvalidExperienceRange { start: NaiveDate, end: NaiveDate },
}

pub fn validate_job_posting(job: &JobPosting) -> Result<(), InputError> {
    if !job.remote
        && job
            .location
            .as_deref()
            .map_or(true, |loc| loc.trim().is_empty())
    {
        return Err(InputError::MissingLocation);
    }

    for (index, required) in job.required_skills.iter().enumerate() {
        if required.name.trim().is_empty() {
            return Err(InputError::EmptyRequiredSkillName(index));
        }
    }

    Ok(())
}

pub fn validate_user_profile(user: &UserProfile) -> Result<(), InputError> {
    for entry in &user.experience {
        if let Some(end) = entry.end_date {
            if end < entry.start_date {
                return Err(InputError::InvalidExperienceRange {
                    start: entry.start_date,
                    end,
                });
            }
        }
    }

    Ok(())
}
