/// Fixed factor weights for the compatibility score. Skills dominate,
/// job-type preference is the lightest signal.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.4,
    experience: 0.3,
    location: 0.2,
    job_type: 0.1,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub job_type: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.job_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
