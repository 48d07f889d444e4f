/// Rule banks and the min-conjunction rule evaluator.
///
/// A rule bank is plain configuration: an ordered list of
/// `(service category, price category, consequent weight)` entries. The
/// evaluator and defuzzifier take the bank as a parameter and never assume a
/// particular rule count.
///
/// Text format accepted by [`RuleBank::parse`], one rule per line:
///
/// ```text
/// # service & price => weight
/// Good & Cheap => 100
/// Average AND Moderate => 60
/// ```
use std::fmt;

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::category::{Category, Membership, PriceLevel, ServiceLevel};
use crate::error::EngineError;

/// Upper bound for consequent weights, and therefore for scores.
pub const WEIGHT_CEILING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    pub service: ServiceLevel,
    pub price: PriceLevel,
    pub weight: f64,
}

impl Rule {
    pub const fn new(service: ServiceLevel, price: PriceLevel, weight: f64) -> Self {
        Self {
            service,
            price,
            weight,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {} => {}", self.service, self.price, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleBank {
    name: String,
    rules: Vec<Rule>,
}

impl RuleBank {
    /// Validates and builds a rule bank.
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Result<Self, EngineError> {
        let name = name.into();
        if rules.is_empty() {
            return Err(EngineError::EmptyRuleBank(name));
        }
        for (index, rule) in rules.iter().enumerate() {
            if !rule.weight.is_finite() || !(0.0..=WEIGHT_CEILING).contains(&rule.weight) {
                return Err(EngineError::InvalidWeight {
                    index,
                    weight: rule.weight,
                });
            }
        }
        Ok(Self { name, rules })
    }

    /// The full 3x3 grid: every service category paired with every price
    /// category, cheaper and better service weighing higher.
    pub fn standard() -> Self {
        use PriceLevel::*;
        use ServiceLevel::*;

        Self {
            name: "standard".to_string(),
            rules: vec![
                Rule::new(Good, Cheap, 100.0),
                Rule::new(Good, Moderate, 75.0),
                Rule::new(Good, Expensive, 50.0),
                Rule::new(Average, Cheap, 75.0),
                Rule::new(Average, Moderate, 60.0),
                Rule::new(Average, Expensive, 40.0),
                Rule::new(Poor, Cheap, 50.0),
                Rule::new(Poor, Moderate, 30.0),
                Rule::new(Poor, Expensive, 20.0),
            ],
        }
    }

    /// Parses the line-oriented rule format. Blank lines and `#` comments are
    /// skipped; errors report the 1-based line number.
    pub fn parse(name: impl Into<String>, content: &str) -> Result<Self, EngineError> {
        let rule_re = Regex::new(r"^([A-Za-z]+)\s*(?:&|(?i:and))\s*([A-Za-z]+)\s*=>\s*(\S+)$")
            .expect("valid regex");
        let mut rules = Vec::new();

        for (i, raw) in content.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let caps = rule_re.captures(line).ok_or_else(|| EngineError::RuleSyntax {
                line: line_no,
                message: format!("expected `<service> & <price> => <weight>`, got {line:?}"),
            })?;

            let service = ServiceLevel::parse(&caps[1])?;
            let price = PriceLevel::parse(&caps[2])?;
            let weight: f64 = caps[3].parse().map_err(|_| EngineError::RuleSyntax {
                line: line_no,
                message: format!("invalid weight {:?}", &caps[3]),
            })?;

            rules.push(Rule::new(service, price, weight));
        }

        Self::new(name, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.rules.iter().map(|r| r.weight).collect()
    }

    /// SHA-256 over the canonical listing, so two banks with the same rules
    /// share a fingerprint regardless of name or source formatting.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for rule in &self.rules {
            hasher.update(rule.to_string().as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Display for RuleBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Firing strengths, one per rule, in rule-bank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FiringVector(pub Vec<f64>);

impl FiringVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Fires every rule with the minimum t-norm over its two antecedents.
pub fn evaluate(
    service: &Membership<ServiceLevel>,
    price: &Membership<PriceLevel>,
    bank: &RuleBank,
) -> FiringVector {
    FiringVector(
        bank.rules
            .iter()
            .map(|rule| service[rule.service].min(price[rule.price]))
            .collect(),
    )
}
