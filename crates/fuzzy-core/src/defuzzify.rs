/// Weighted-average defuzzification.
///
/// `score = Σ(firing[i] * weights[i]) / Σ(firing[i])`, or exactly `0.0` when no
/// rule fires at all.
use crate::error::EngineError;
use crate::rules::{FiringVector, RuleBank};

pub fn defuzzify(firing: &FiringVector, weights: &[f64]) -> Result<f64, EngineError> {
    if firing.len() != weights.len() {
        return Err(EngineError::LengthMismatch {
            firing: firing.len(),
            weights: weights.len(),
        });
    }
    Ok(weighted_average(firing.iter(), weights.iter().copied()))
}

impl RuleBank {
    /// Defuzzifies against this bank's own consequent weights.
    ///
    /// The firing vector must come from [`evaluate`](crate::evaluate) with the
    /// same bank. Use the free [`defuzzify`] for vectors of unknown origin.
    pub fn defuzzify(&self, firing: &FiringVector) -> f64 {
        debug_assert_eq!(firing.len(), self.len(), "firing vector from another rule bank");
        weighted_average(firing.iter(), self.rules().iter().map(|r| r.weight))
    }
}

fn weighted_average(firing: impl Iterator<Item = f64>, weights: impl Iterator<Item = f64>) -> f64 {
    let (numerator, denominator) = firing
        .zip(weights)
        .fold((0.0, 0.0), |(num, den), (f, w)| (num + f * w, den + f));

    // No rule fired: degenerate membership input.
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}
