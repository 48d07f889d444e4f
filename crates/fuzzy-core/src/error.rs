/// Configuration errors raised while building or loading a rule bank.
///
/// These are setup-time failures: once an [`Engine`](crate::Engine) exists,
/// scoring a candidate cannot fail. Out-of-range inputs are reported as
/// [`DomainWarning`](crate::DomainWarning) values instead.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("rule bank {0:?} has no rules")]
    EmptyRuleBank(String),

    #[error("rule {index} has invalid weight {weight} (expected a finite value in 0..=100)")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("firing vector has {firing} entries but {weights} weights were supplied")]
    LengthMismatch { firing: usize, weights: usize },

    #[error("unknown {dimension} category: {label}")]
    UnknownCategory {
        dimension: &'static str,
        label: String,
    },

    #[error("rule syntax error at line {line}: {message}")]
    RuleSyntax { line: usize, message: String },
}
