/// Fit between the user's preferred engagement types and the posting's
/// declared type.
///
/// No stated preference is a mildly positive 0.8 so a silent profile does
/// not drag down otherwise-strong matches. With preferences present the
/// test is exact membership: 1.0 on a hit, 0.5 otherwise.
pub fn calculate_job_type_match(preferred: &[String], job_type: Option<&str>) -> f64 {
    if preferred.is_empty() {
        return 0.8;
    }

    match job_type {
        Some(declared) if preferred.iter().any(|p| p == declared) => 1.0,
        _ => 0.5,
    }
}
