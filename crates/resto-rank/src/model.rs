use fuzzy_core::{Rule, RuleBank, ScoredRecord};
use serde::Serialize;

/// JSON export of a ranking run: the rule bank it used plus the traced rows.
#[derive(Debug, Serialize)]
pub struct RankingReport<'a> {
    pub rule_bank: &'a str,
    pub fingerprint: String,
    pub rules: &'a [Rule],
    pub candidates: usize,
    pub ranking: Vec<RankedEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub record: &'a ScoredRecord,
}

impl<'a> RankingReport<'a> {
    pub fn new(bank: &'a RuleBank, candidates: usize, ranked: &'a [ScoredRecord]) -> Self {
        Self {
            rule_bank: bank.name(),
            fingerprint: bank.fingerprint(),
            rules: bank.rules(),
            candidates,
            ranking: ranked
                .iter()
                .enumerate()
                .map(|(i, record)| RankedEntry { rank: i + 1, record })
                .collect(),
        }
    }
}
