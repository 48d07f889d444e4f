pub mod category;
pub mod defuzzify;
pub mod error;
pub mod fuzzify;
pub mod pipeline;
pub mod ranking;
pub mod rules;

pub use category::{Category, Membership, PriceLevel, ServiceLevel};
pub use defuzzify::defuzzify;
pub use error::EngineError;
pub use fuzzify::{fuzzify_price, fuzzify_service, DomainWarning};
pub use pipeline::{CandidateRecord, Engine, ScoreTrace, ScoredRecord};
pub use ranking::{rank, top};
pub use rules::{evaluate, FiringVector, Rule, RuleBank};
