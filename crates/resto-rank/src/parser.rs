/// Reads candidate rows from a workbook or CSV file.
///
/// Both formats share the same layout: a header row, then one candidate per
/// row with `ID, service quality, price` in the first three columns. Blank
/// rows are skipped. Row numbers in errors are 1-based and count the header,
/// matching what a spreadsheet shows.
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use fuzzy_core::CandidateRecord;
use tracing::debug;

use crate::config::TableFormat;
use crate::error::AppError;

pub fn read_candidates(path: &Path, format: TableFormat) -> Result<Vec<CandidateRecord>, AppError> {
    match format {
        TableFormat::Xlsx => read_workbook(path),
        TableFormat::Csv => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("failed to read {}: {e}", path.display()))
            })?;
            parse_csv(&content)
        }
    }
}

fn read_workbook(path: &Path) -> Result<Vec<CandidateRecord>, AppError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Workbook(format!("{} has no worksheets", path.display())))??;

    let empty = Data::Empty;
    let mut records = Vec::new();
    for (i, cells) in range.rows().enumerate().skip(1) {
        let row = i + 1;
        if cells.iter().take(3).all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let [id, quality, price] = [0, 1, 2].map(|col| cells.get(col).unwrap_or(&empty));
        records.push(CandidateRecord {
            id: cell_id(row, id)?,
            service_quality: cell_number(row, "service quality", quality)?,
            price: cell_number(row, "price", price)?,
        });
    }

    debug!(path = %path.display(), rows = records.len(), "workbook parsed");
    Ok(records)
}

fn cell_id(row: usize, cell: &Data) -> Result<String, AppError> {
    match cell {
        Data::Int(n) => Ok(n.to_string()),
        Data::Float(f) if f.fract() == 0.0 => Ok(format!("{f:.0}")),
        Data::Float(f) => Ok(f.to_string()),
        Data::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        other => Err(AppError::Parse {
            row,
            message: format!("missing or invalid ID cell: {other:?}"),
        }),
    }
}

fn cell_number(row: usize, field: &str, cell: &Data) -> Result<f64, AppError> {
    match cell {
        Data::Int(n) => Ok(*n as f64),
        Data::Float(f) => finite(row, field, *f),
        Data::String(s) => parse_number(row, field, s),
        other => Err(AppError::Parse {
            row,
            message: format!("{field} is not numeric: {other:?}"),
        }),
    }
}

/// Parses CSV content. The delimiter is `;` when the header uses it and has
/// no commas, otherwise `,`. Fields may be double-quoted; inside quotes the
/// delimiter is literal and `""` stands for one `"`.
pub fn parse_csv(content: &str) -> Result<Vec<CandidateRecord>, AppError> {
    let mut lines = content.lines().enumerate();
    let Some((_, header)) = lines.by_ref().find(|(_, l)| !l.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    let delimiter = if header.contains(';') && !header.contains(',') {
        ';'
    } else {
        ','
    };

    let mut records = Vec::new();
    for (i, line) in lines {
        let row = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(row, line, delimiter)?;
        if fields.len() < 3 {
            return Err(AppError::Parse {
                row,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        if fields[0].is_empty() {
            return Err(AppError::Parse {
                row,
                message: "missing ID".to_string(),
            });
        }

        records.push(CandidateRecord {
            id: fields[0].clone(),
            service_quality: parse_number(row, "service quality", &fields[1])?,
            price: parse_number(row, "price", &fields[2])?,
        });
    }

    debug!(rows = records.len(), "csv parsed");
    Ok(records)
}

fn split_fields(row: usize, line: &str, delimiter: char) -> Result<Vec<String>, AppError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' if quoted => quoted = false,
            '"' if field.trim().is_empty() => {
                field.clear();
                quoted = true;
            }
            c if c == delimiter && !quoted => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            c => field.push(c),
        }
    }

    if quoted {
        return Err(AppError::Parse {
            row,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(field.trim().to_string());
    Ok(fields)
}

fn parse_number(row: usize, field: &str, text: &str) -> Result<f64, AppError> {
    let value = text.trim().parse::<f64>().map_err(|_| AppError::Parse {
        row,
        message: format!("{field} is not numeric: {text:?}"),
    })?;
    finite(row, field, value)
}

fn finite(row: usize, field: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::Parse {
            row,
            message: format!("{field} must be finite, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_skips_header_and_blank_rows() {
        let content = "ID,Kualitas Servis,Harga\n1,58,35000\n\n2,\"91\",26000\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CandidateRecord::new("1", 58.0, 35_000.0));
        assert_eq!(records[1], CandidateRecord::new("2", 91.0, 26_000.0));
    }

    #[test]
    fn parse_csv_semicolon_delimiter() {
        let content = "ID;Service;Price\nR7;72.5;41000\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records, vec![CandidateRecord::new("R7", 72.5, 41_000.0)]);
    }

    #[test]
    fn parse_csv_extra_columns_ignored() {
        let content = "ID,Service,Price,Note\n3,40,50000,corner shop\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records[0].price, 50_000.0);
    }

    #[test]
    fn parse_csv_reports_row_numbers() {
        let err = parse_csv("ID,Service,Price\n1,50,30000\n2,abc,30000\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { row: 3, .. }), "{err}");

        let err = parse_csv("ID,Service,Price\n1,50\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { row: 2, .. }), "{err}");

        let err = parse_csv("ID,Service,Price\n,50,30000\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { row: 2, .. }), "{err}");
    }

    #[test]
    fn parse_csv_quoted_fields() {
        let content = "ID,Service,Price\n\"Warung, Pak Budi\",95,25000\n\"say \"\"hi\"\"\", 60 ,\"45000\"\n";
        let records = parse_csv(content).unwrap();
        assert_eq!(records[0], CandidateRecord::new("Warung, Pak Budi", 95.0, 25_000.0));
        assert_eq!(records[1], CandidateRecord::new("say \"hi\"", 60.0, 45_000.0));
    }

    #[test]
    fn parse_csv_unterminated_quote() {
        let err = parse_csv("ID,Service,Price\n\"open,95,25000\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { row: 2, .. }), "{err}");
    }

    #[test]
    fn parse_csv_rejects_non_finite() {
        let err = parse_csv("ID,Service,Price\n1,NaN,30000\n").unwrap_err();
        assert!(matches!(err, AppError::Parse { row: 2, .. }), "{err}");
    }

    #[test]
    fn parse_csv_empty_input() {
        assert!(parse_csv("").unwrap().is_empty());
        assert!(parse_csv("ID,Service,Price\n").unwrap().is_empty());
    }

    #[test]
    fn cell_conversions() {
        assert_eq!(cell_id(2, &Data::Float(17.0)).unwrap(), "17");
        assert_eq!(cell_id(2, &Data::Int(4)).unwrap(), "4");
        assert_eq!(cell_id(2, &Data::String(" R-9 ".to_string())).unwrap(), "R-9");
        assert!(cell_id(2, &Data::Empty).is_err());

        assert_eq!(cell_number(2, "price", &Data::Int(30_000)).unwrap(), 30_000.0);
        assert_eq!(cell_number(2, "price", &Data::String("42.5".to_string())).unwrap(), 42.5);
        assert!(cell_number(2, "price", &Data::Bool(true)).is_err());
    }

    #[test]
    fn read_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restoran.csv");
        std::fs::write(&path, "ID,Service,Price\n1,95,25000\n").unwrap();
        let records = read_candidates(&path, TableFormat::Csv).unwrap();
        assert_eq!(records, vec![CandidateRecord::new("1", 95.0, 25_000.0)]);
    }
}
