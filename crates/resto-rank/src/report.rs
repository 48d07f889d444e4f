/// Console rendering: per-candidate inference traces and the ranking table.
use std::fmt::Write;

use fuzzy_core::{RuleBank, ScoredRecord};

const RULE_WIDTH: usize = 70;

pub fn render_trace(record: &ScoredRecord, bank: &RuleBank) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let c = &record.candidate;
    let t = &record.trace;
    let mut out = String::new();

    let _ = writeln!(out, "Fuzzy inference trace for restaurant {}:", c.id);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "ID: {}", c.id);
    let _ = writeln!(out, "Service quality: {} -> {}", c.service_quality, t.service);
    let _ = writeln!(out, "Price: Rp {} -> {}", c.price, t.price);
    let _ = writeln!(
        out,
        "Dominant: service {}, price {}",
        t.service.dominant(),
        t.price.dominant()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Rule firing strengths ({} rules):", t.firing.len());
    for (i, (strength, r)) in t.firing.iter().zip(bank.rules()).enumerate() {
        let _ = writeln!(out, "Rule {} [{}]: {:.2}", i + 1, r, strength);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Final score (defuzzified): {:.2}", record.score);
    let _ = writeln!(out, "{rule}");
    out
}

pub fn render_table(records: &[ScoredRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<8} {:<18} {:<15} {:<20}",
        "No.", "ID", "Service Quality", "Price", "Score"
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    for (i, r) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<18} {:<15} {:<20.2}",
            i + 1,
            r.candidate.id,
            r.candidate.service_quality,
            r.candidate.price,
            r.score
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_core::{CandidateRecord, Engine};

    #[test]
    fn trace_lists_every_rule() {
        let engine = Engine::default();
        let record = engine.score(&CandidateRecord::new("R1", 80.0, 35_000.0));
        let text = render_trace(&record, engine.bank());

        assert!(text.contains("restaurant R1"));
        assert!(text.contains("Service quality: 80 -> {Poor: 0.00, Average: 0.50, Good: 0.50}"));
        assert!(text.contains("Price: Rp 35000 -> {Cheap: 0.50, Moderate: 0.50, Expensive: 0.00}"));
        // Average/Good and Cheap/Moderate tie; the lower category wins.
        assert!(text.contains("Dominant: service Average, price Cheap"));
        assert!(text.contains("Rule firing strengths (9 rules):"));
        assert!(text.contains("Rule 1 [Good & Cheap => 100]: 0.50"));
        assert!(text.contains("Rule 9 [Poor & Expensive => 20]: 0.00"));
        assert!(text.contains("Final score (defuzzified): 77.50"));
    }

    #[test]
    fn trace_names_dominant_categories() {
        let engine = Engine::default();
        let record = engine.score(&CandidateRecord::new("R2", 88.0, 48_000.0));
        let text = render_trace(&record, engine.bank());
        assert!(text.contains("Dominant: service Good, price Expensive"));
    }

    #[test]
    fn table_rows_are_numbered() {
        let engine = Engine::default();
        let ranked = fuzzy_core::rank(engine.score_all(&[
            CandidateRecord::new("low", 20.0, 55_000.0),
            CandidateRecord::new("high", 95.0, 25_000.0),
        ]));
        let text = render_table(&ranked);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("No.  ID       Service Quality"));
        assert!(lines[2].starts_with("1    high"));
        assert!(lines[2].contains("100.00"));
        assert!(lines[3].starts_with("2    low"));
        assert!(lines[3].contains("20.00"));
    }
}
