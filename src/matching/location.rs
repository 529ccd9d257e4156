use tracing::warn;

use crate::JobPosting;

/// Location fit between the user's preferred locations and the posting.
///
/// Remote postings satisfy any preference outright. With no stated
/// preferences the score is a neutral 0.5. Otherwise each preference is
/// tested against the job location with symmetric case-insensitive
/// containment, so "Berlin" matches "Berlin, Germany" in either
/// direction; a miss is a soft 0.3 rather than exclusion.
///
/// A non-remote posting without a location violates the caller's
/// contract (`validate::validate_job_posting` catches it up front); here
/// it is logged and scored as a plain miss.
pub fn calculate_location_match(preferred: &[String], job: &JobPosting) -> f64 {
    if job.remote {
        return 1.0;
    }
    if preferred.is_empty() {
        return 0.5;
    }

    let job_location = match job.location.as_deref().map(str::trim) {
        Some(loc) if !loc.is_empty() => loc.to_lowercase(),
        _ => {
            warn!("non-remote job posting has no location; scoring as miss");
            return 0.3;
        }
    };

    let matched = preferred.iter().any(|pref| {
        let pref = pref.trim().to_lowercase();
        !pref.is_empty() && (pref.contains(&job_location) || job_location.contains(&pref))
    });

    if matched {
        1.0
    } else {
        0.3
    }
}
