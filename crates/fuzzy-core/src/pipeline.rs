/// Per-candidate scoring: fuzzify both inputs, fire the rule bank, defuzzify.
///
/// Scoring is a pure function of the record and the bank. Nothing is shared
/// between records, so callers may score slices of the input on separate
/// threads and concatenate the results.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::{Membership, PriceLevel, ServiceLevel};
use crate::fuzzify::{check_domain, fuzzify_price, fuzzify_service};
use crate::rules::{evaluate, FiringVector, RuleBank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub service_quality: f64,
    pub price: f64,
}

impl CandidateRecord {
    pub fn new(id: impl Into<String>, service_quality: f64, price: f64) -> Self {
        Self {
            id: id.into(),
            service_quality,
            price,
        }
    }
}

/// Intermediate values behind a score, kept for tracing output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTrace {
    pub service: Membership<ServiceLevel>,
    pub price: Membership<PriceLevel>,
    pub firing: FiringVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub candidate: CandidateRecord,
    pub score: f64,
    pub trace: ScoreTrace,
}

/// A validated rule bank ready to score candidates.
#[derive(Debug, Clone)]
pub struct Engine {
    bank: RuleBank,
}

impl Engine {
    pub fn new(bank: RuleBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &RuleBank {
        &self.bank
    }

    pub fn score(&self, candidate: &CandidateRecord) -> ScoredRecord {
        for w in check_domain(candidate) {
            warn!(
                id = %candidate.id,
                field = w.field,
                value = w.value,
                min = w.min,
                max = w.max,
                "input outside documented range, membership saturates"
            );
        }

        let service = fuzzify_service(candidate.service_quality);
        let price = fuzzify_price(candidate.price);
        let firing = evaluate(&service, &price, &self.bank);
        let score = self.bank.defuzzify(&firing);

        debug!(id = %candidate.id, score, "candidate scored");

        ScoredRecord {
            candidate: candidate.clone(),
            score,
            trace: ScoreTrace {
                service,
                price,
                firing,
            },
        }
    }

    /// Scores every candidate, preserving input order.
    pub fn score_all(&self, candidates: &[CandidateRecord]) -> Vec<ScoredRecord> {
        candidates.iter().map(|c| self.score(c)).collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RuleBank::standard())
    }
}
