use crate::pipeline::ScoredRecord;

/// Sorts by descending score. The sort is stable, so equal scores keep their
/// input order.
pub fn rank(mut records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));
    records
}

/// The first `k` records, or all of them when fewer exist.
pub fn top(records: &[ScoredRecord], k: usize) -> &[ScoredRecord] {
    &records[..k.min(records.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CandidateRecord, ScoreTrace};
    use crate::category::Membership;
    use crate::rules::FiringVector;

    fn scored(id: &str, score: f64) -> ScoredRecord {
        ScoredRecord {
            candidate: CandidateRecord::new(id, 0.0, 0.0),
            score,
            trace: ScoreTrace {
                service: Membership::from_degrees([1.0, 0.0, 0.0]),
                price: Membership::from_degrees([1.0, 0.0, 0.0]),
                firing: FiringVector(vec![]),
            },
        }
    }

    fn ids(records: &[ScoredRecord]) -> Vec<&str> {
        records.iter().map(|r| r.candidate.id.as_str()).collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![scored("first", 50.0), scored("second", 75.0), scored("third", 75.0)]);
        assert_eq!(ids(&ranked), vec!["second", "third", "first"]);
        let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![75.0, 75.0, 50.0]);
    }

    #[test]
    fn descending_order() {
        let ranked = rank(vec![
            scored("a", 20.0),
            scored("b", 100.0),
            scored("c", 0.0),
            scored("d", 63.4),
        ]);
        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn top_clamps_to_length() {
        let ranked = rank(vec![scored("a", 1.0), scored("b", 2.0)]);
        assert_eq!(ids(top(&ranked, 1)), vec!["b"]);
        assert_eq!(top(&ranked, 10).len(), 2);
        assert!(top(&ranked, 0).is_empty());
        assert!(top(&[], 3).is_empty());
    }
}
