//! Delimited statement export parser.
//!
//! Expected layout (default `;` delimiter, header names configurable):
//!   Operation date;Operation amount;Category;Description;...
//!   28.11.2022 14:30;-1234,56;Supermarkets;GROCERY STORE;...
//!
//! Extra columns are ignored. Every row must carry all four mapped fields.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{StringRecord, StringRecordsIntoIter};
use tally_core::{parse_amount, parse_timestamp, Transaction};
use tracing::debug;

use crate::error::IngestError;
use crate::types::{ColumnMap, StatementLayout};

/// Open a statement file and parse every row.
pub fn load_transactions(
    path: impl AsRef<Path>,
    layout: &StatementLayout,
) -> Result<Vec<Transaction>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let txns = parse_reader(file, layout)?;
    debug!(path = %path.display(), count = txns.len(), "loaded statement");
    Ok(txns)
}

/// Parse a delimited export with a header row.
///
/// Fails on the first row that is missing a mapped field or whose timestamp
/// or amount does not parse; nothing is returned for a partially valid input.
pub fn parse_reader<R: Read>(
    reader: R,
    layout: &StatementLayout,
) -> Result<Vec<Transaction>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::locate(&headers, &layout.columns)?;

    RowParser {
        records: rdr.into_records(),
        index,
        layout,
        row: 0,
    }
    .collect()
}

/// Positions of the mapped columns within the header row.
struct ColumnIndex<'a> {
    columns: &'a ColumnMap,
    timestamp: usize,
    amount: usize,
    category: usize,
    description: usize,
}

impl<'a> ColumnIndex<'a> {
    fn locate(headers: &StringRecord, columns: &'a ColumnMap) -> Result<Self, IngestError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            columns,
            timestamp: find(&columns.timestamp)?,
            amount: find(&columns.amount)?,
            category: find(&columns.category)?,
            description: find(&columns.description)?,
        })
    }
}

struct RowParser<'a, R> {
    records: StringRecordsIntoIter<R>,
    index: ColumnIndex<'a>,
    layout: &'a StatementLayout,
    row: usize,
}

impl<R: Read> RowParser<'_, R> {
    fn field<'r>(&self, record: &'r StringRecord, at: usize, column: &str) -> Result<&'r str, IngestError> {
        record.get(at).ok_or_else(|| IngestError::MissingField {
            row: self.row,
            column: column.to_string(),
            raw: self.raw(record),
        })
    }

    fn raw(&self, record: &StringRecord) -> String {
        let sep = (self.layout.delimiter as char).to_string();
        record.iter().collect::<Vec<_>>().join(&sep)
    }

    fn parse_error(&self, record: &StringRecord, column: &str, value: &str, reason: impl ToString) -> IngestError {
        IngestError::Parse {
            row: self.row,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            raw: self.raw(record),
        }
    }

    fn transaction(&self, record: &StringRecord) -> Result<Transaction, IngestError> {
        let columns = self.index.columns;

        let ts_raw = self.field(record, self.index.timestamp, &columns.timestamp)?;
        let amount_raw = self.field(record, self.index.amount, &columns.amount)?;
        let category = self.field(record, self.index.category, &columns.category)?;
        let description = self.field(record, self.index.description, &columns.description)?;

        let timestamp = parse_timestamp(ts_raw, &self.layout.timestamp_format)
            .map_err(|e| self.parse_error(record, &columns.timestamp, ts_raw, e))?;
        let amount = parse_amount(amount_raw)
            .map_err(|e| self.parse_error(record, &columns.amount, amount_raw, e))?;

        Ok(Transaction::new(timestamp, amount, category, description))
    }
}

impl<R: Read> Iterator for RowParser<'_, R> {
    type Item = Result<Transaction, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.records.next()?;
        self.row += 1;
        let record = match next {
            Ok(r) => r,
            Err(source) => {
                return Some(Err(IngestError::Record {
                    row: self.row,
                    source,
                }));
            }
        };
        Some(self.transaction(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::io::Write;

    const HEADER: &str = "Operation date;Payment date;Card;Status;Operation amount;Currency;Category;MCC;Description";

    fn statement(rows: &[&str]) -> String {
        let mut s = String::from(HEADER);
        for r in rows {
            s.push('\n');
            s.push_str(r);
        }
        s
    }

    fn parse(text: &str) -> Result<Vec<Transaction>, IngestError> {
        parse_reader(text.as_bytes(), &StatementLayout::default())
    }

    #[test]
    fn test_parse_basic_rows() {
        let text = statement(&[
            "02.01.2023 10:00;02.01.2023;*1234;OK;-50,00;RUB;Food;5411;y",
            "01.01.2023 10:00;01.01.2023;*1234;OK;100,50;RUB;Food;5411;x",
        ]);

        let txns = parse(&text).unwrap();
        assert_eq!(txns.len(), 2);

        assert_eq!(
            txns[0].timestamp,
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(txns[0].amount, Decimal::new(-5000, 2));
        assert_eq!(txns[0].category, "Food");
        assert_eq!(txns[0].description, "y");
        assert_eq!(txns[1].amount, Decimal::new(10050, 2));
    }

    #[test]
    fn test_empty_category_is_kept() {
        let text = statement(&["05.01.2023 09:15;;;OK;-10,00;RUB;;;Fee"]);
        let txns = parse(&text).unwrap();
        assert_eq!(txns[0].category, "");
        assert_eq!(txns[0].description, "Fee");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_quoted_description_with_delimiter() {
        let text = statement(&[r#"05.01.2023 09:15;;;OK;-10,00;RUB;Cafe;;"Coffee; large""#]);
        let txns = parse(&text).unwrap();
        assert_eq!(txns[0].description, "Coffee; large");
    }

    #[test]
    fn test_bad_amount_reports_row() {
        let text = statement(&[
            "01.01.2023 10:00;;;OK;100,50;RUB;Food;;x",
            "02.01.2023 10:00;;;OK;fifty;RUB;Food;;y",
        ]);

        let err = parse(&text).unwrap_err();
        assert_eq!(err.row(), Some(2));
        match err {
            IngestError::Parse { column, value, raw, .. } => {
                assert_eq!(column, "Operation amount");
                assert_eq!(value, "fifty");
                assert!(raw.contains("02.01.2023 10:00"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_timestamp_reports_row() {
        let text = statement(&["2023-01-01 10:00;;;OK;1,00;RUB;Food;;x"]);
        let err = parse(&text).unwrap_err();
        assert!(matches!(err, IngestError::Parse { row: 1, ref column, .. } if column == "Operation date"));
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let text = statement(&["01.01.2023 10:00;;;OK;1,00;RUB;Food"]);
        let err = parse(&text).unwrap_err();
        assert!(matches!(err, IngestError::MissingField { row: 1, ref column, .. } if column == "Description"));
    }

    #[test]
    fn test_missing_header_column() {
        let text = "Operation date;Operation amount;Description\n01.01.2023 10:00;1,00;x";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column } if column == "Category"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = format!(
            "{HEADER}\n\n01.01.2023 10:00;;;OK;1,00;RUB;Food;;x\n\n\n02.01.2023 10:00;;;OK;bad;RUB;Food;;y\n"
        );
        let err = parse(&text).unwrap_err();
        assert_eq!(err.row(), Some(2));

        let text = format!("{HEADER}\n\n01.01.2023 10:00;;;OK;1,00;RUB;Food;;x\n\n");
        assert_eq!(parse(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_reports_row() {
        let mut bytes = statement(&["01.01.2023 10:00;;;OK;1,00;RUB;Food;;x"]).into_bytes();
        bytes.extend_from_slice(b"\n02.01.2023 10:00;;;OK;1,00;RUB;Food;;\xff\xfe\n");

        let err = parse_reader(&bytes[..], &StatementLayout::default()).unwrap_err();
        assert!(matches!(err, IngestError::Record { row: 2, .. }));
        assert_eq!(err.row(), Some(2));
    }

    #[test]
    fn test_custom_layout() {
        let columns = ColumnMap {
            timestamp: "when".to_string(),
            amount: "sum".to_string(),
            category: "kind".to_string(),
            description: "what".to_string(),
        };
        let layout = StatementLayout::default()
            .with_delimiter(b',')
            .with_columns(columns)
            .with_timestamp_format("%Y-%m-%d %H:%M:%S");

        let text = "\u{feff}what,sum,when,kind\nsalary,\"1000,00\",2023-01-31 09:00:00,Top-ups\n";
        let txns = parse_reader(text.as_bytes(), &layout).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, Decimal::new(100000, 2));
        assert_eq!(txns[0].category, "Top-ups");
        assert_eq!(txns[0].description, "salary");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", statement(&["01.01.2023 10:00;;;OK;1,00;RUB;Food;;x"])).unwrap();

        let txns = load_transactions(file.path(), &StatementLayout::default()).unwrap();
        assert_eq!(txns.len(), 1);
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_transactions(&path, &StatementLayout::default()).unwrap_err();
        assert!(matches!(err, IngestError::SourceNotFound { path: ref p } if p == &path));
    }
}
