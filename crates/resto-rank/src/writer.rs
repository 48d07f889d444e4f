use std::path::Path;

use fuzzy_core::ScoredRecord;
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::config::TableFormat;
use crate::error::AppError;
use crate::model::RankingReport;

const HEADERS: [&str; 4] = ["ID", "Service Quality", "Price", "Score"];

/// Writes ranked rows as `ID, Service Quality, Price, Score`.
pub fn write_ranking(
    path: &Path,
    format: TableFormat,
    records: &[ScoredRecord],
) -> Result<(), AppError> {
    match format {
        TableFormat::Xlsx => write_workbook(path, records)?,
        TableFormat::Csv => std::fs::write(path, render_csv(records))?,
    }
    info!(path = %path.display(), rows = records.len(), "ranking written");
    Ok(())
}

fn write_workbook(path: &Path, records: &[ScoredRecord]) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Ranking")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.candidate.id)?;
        worksheet.write_number(row, 1, record.candidate.service_quality)?;
        worksheet.write_number(row, 2, record.candidate.price)?;
        worksheet.write_number(row, 3, record.score)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn render_csv(records: &[ScoredRecord]) -> String {
    let mut out = HEADERS.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&record.candidate.id),
            record.candidate.service_quality,
            record.candidate.price,
            record.score
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', ';', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn write_json(path: &Path, report: &RankingReport<'_>) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), rows = report.ranking.len(), "trace report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_candidates;
    use fuzzy_core::{CandidateRecord, Engine, RuleBank};

    fn ranked() -> Vec<ScoredRecord> {
        let engine = Engine::default();
        fuzzy_core::rank(engine.score_all(&[
            CandidateRecord::new("7", 60.0, 45_000.0),
            CandidateRecord::new("12", 95.0, 25_000.0),
        ]))
    }

    #[test]
    fn csv_layout() {
        let csv = render_csv(&ranked());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Service Quality,Price,Score");
        assert_eq!(lines[1], "12,95,25000,100");
        assert!(lines[2].starts_with("7,60,45000,"));
    }

    #[test]
    fn csv_quotes_awkward_ids() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_output_reads_back_as_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.csv");
        write_ranking(&path, TableFormat::Csv, &ranked()).unwrap();

        let back = read_candidates(&path, TableFormat::Csv).unwrap();
        assert_eq!(back[0], CandidateRecord::new("12", 95.0, 25_000.0));
        assert_eq!(back[1], CandidateRecord::new("7", 60.0, 45_000.0));
    }

    #[test]
    fn csv_quoted_ids_read_back_intact() {
        let engine = Engine::default();
        let rows = fuzzy_core::rank(engine.score_all(&[
            CandidateRecord::new("Warung, Pak Budi", 95.0, 25_000.0),
            CandidateRecord::new("say \"hi\"", 60.0, 45_000.0),
        ]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.csv");
        write_ranking(&path, TableFormat::Csv, &rows).unwrap();

        let back = read_candidates(&path, TableFormat::Csv).unwrap();
        assert_eq!(
            back,
            vec![
                CandidateRecord::new("Warung, Pak Budi", 95.0, 25_000.0),
                CandidateRecord::new("say \"hi\"", 60.0, 45_000.0),
            ]
        );
    }

    #[test]
    fn workbook_output_reads_back_as_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.xlsx");
        write_ranking(&path, TableFormat::Xlsx, &ranked()).unwrap();

        let back = read_candidates(&path, TableFormat::Xlsx).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0], CandidateRecord::new("12", 95.0, 25_000.0));
    }

    #[test]
    fn json_report_includes_bank_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let bank = RuleBank::standard();
        let rows = ranked();
        write_json(&path, &RankingReport::new(&bank, rows.len(), &rows)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rule_bank"], "standard");
        assert_eq!(value["fingerprint"], bank.fingerprint());
        assert_eq!(value["rules"].as_array().unwrap().len(), 9);
        assert_eq!(value["ranking"][0]["rank"], 1);
        assert_eq!(value["ranking"][0]["id"], "12");
        assert_eq!(value["ranking"][0]["trace"]["price"]["Cheap"], 1.0);
    }
}
