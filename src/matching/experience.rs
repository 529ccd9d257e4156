use chrono::{NaiveDate, Utc};

use crate::ExperienceEntry;

const DAYS_PER_YEAR: f64 = 365.25;

/// Expected total-experience range in years for a declared job level.
/// Unknown or missing levels accept any amount of experience.
fn level_year_range(level: Option<&str>) -> (f64, f64) {
    match level.map(|l| l.to_ascii_lowercase()).as_deref() {
        Some("entry") => (0.0, 2.0),
        Some("mid") => (2.0, 5.0),
        Some("senior") => (5.0, 10.0),
        Some("executive") => (10.0, 100.0),
        _ => (0.0, 100.0),
    }
}

/// Sum elapsed years across all entries, treating a missing end date as
/// still ongoing at `today`. Entries that would contribute negative time
/// (future start dates, corrupt ranges) contribute 0 instead.
pub fn total_experience_years_as_of(entries: &[ExperienceEntry], today: NaiveDate) -> f64 {
    entries
        .iter()
        .map(|entry| {
            let end = entry.end_date.unwrap_or(today);
            let days = (end - entry.start_date).num_days() as f64;
            (days / DAYS_PER_YEAR).max(0.0)
        })
        .sum()
}

/// Experience fit against the job's declared level, evaluated at the
/// current date. See [`calculate_experience_match_as_of`] for the
/// deterministic variant used in tests and batch re-scoring.
pub fn calculate_experience_match(entries: &[ExperienceEntry], level: Option<&str>) -> f64 {
    calculate_experience_match_as_of(entries, level, Utc::now().date_naive())
}

/// Experience fit with an explicit "today".
///
/// No entries at all is a neutral 0.5 rather than a failure. Total years
/// inside the level's range score 1.0; below range the score ramps up
/// linearly as `total / min` (a zero minimum auto-satisfies); above range
/// overqualification decays but never below 0.7.
pub fn calculate_experience_match_as_of(
    entries: &[ExperienceEntry],
    level: Option<&str>,
    today: NaiveDate,
) -> f64 {
    if entries.is_empty() {
        return 0.5;
    }

    let total_years = total_experience_years_as_of(entries, today);
    let (min_years, max_years) = level_year_range(level);

    if total_years >= min_years && total_years <= max_years {
        1.0
    } else if total_years < min_years {
        if min_years == 0.0 {
            1.0
        } else {
            total_years / min_years
        }
    } else {
        (1.0 - (total_years - max_years) / max_years).max(0.7)
    }
}
