use std::collections::HashSet;

use crate::{RequiredSkill, SkillRecord};

/// Weighted coverage of a job's required skills by the user's skill set.
///
/// Mandatory requirements weigh 2, optional ones 1; the score is
/// matched-weight over total-weight. Matching is case-insensitive exact
/// name equality, deliberately stricter than the extraction pipeline's
/// substring heuristics. Either side empty scores 0.
pub fn calculate_skills_match(user_skills: &[SkillRecord], required: &[RequiredSkill]) -> f64 {
    if user_skills.is_empty() || required.is_empty() {
        return 0.0;
    }

    let owned: HashSet<String> = user_skills.iter().map(|s| s.name.to_lowercase()).collect();

    let mut total_weight = 0.0;
    let mut matched_weight = 0.0;
    for req in required {
        let weight = if req.mandatory { 2.0 } else { 1.0 };
        total_weight += weight;
        if owned.contains(&req.name.to_lowercase()) {
            matched_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    matched_weight / total_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            level: Default::default(),
            ai_extracted: false,
            confidence: 1.0,
        }
    }

    fn req(name: &str, mandatory: bool) -> RequiredSkill {
        RequiredSkill {
            name: name.to_string(),
            mandatory,
        }
    }

    #[test]
    fn either_side_empty_scores_zero() {
        assert_eq!(calculate_skills_match(&[], &[req("rust", true)]), 0.0);
        assert_eq!(calculate_skills_match(&[skill("rust")], &[]), 0.0);
        assert_eq!(calculate_skills_match(&[], &[]), 0.0);
    }

    #[test]
    fn full_coverage_scores_one() {
        let user = [skill("Rust"), skill("aws")];
        let reqs = [req("rust", true), req("AWS", false)];
        assert!((calculate_skills_match(&user, &reqs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mandatory_miss_costs_twice_an_optional_miss() {
        let user = [skill("python")];

        // mandatory python matched, optional docker missed: 2/3
        let reqs = [req("python", true), req("docker", false)];
        let optional_miss = calculate_skills_match(&user, &reqs);
        assert!((optional_miss - 2.0 / 3.0).abs() < 1e-9);

        // optional python matched, mandatory docker missed: 1/3
        let reqs = [req("python", false), req("docker", true)];
        let mandatory_miss = calculate_skills_match(&user, &reqs);
        assert!((mandatory_miss - 1.0 / 3.0).abs() < 1e-9);

        assert!(mandatory_miss < optional_miss);
    }

    #[test]
    fn name_match_is_exact_not_substring() {
        let user = [skill("javascript")];
        let reqs = [req("java", true)];
        assert_eq!(calculate_skills_match(&user, &reqs), 0.0);
    }
}
