pub mod experience;
pub mod job_type;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use experience::{
    calculate_experience_match, calculate_experience_match_as_of, total_experience_years_as_of,
};
pub use job_type::calculate_job_type_match;
pub use location::calculate_location_match;
pub use scoring::{
    calculate_match_breakdown, calculate_match_breakdown_as_of, calculate_match_score,
    FactorScore, MatchBreakdown,
};
pub use skills::calculate_skills_match;
pub use weights::{Weights, MATCH_WEIGHTS};
