//! Record-file scanner: classifies each data row against the expected index.

use crate::error::AuditError;
use crate::model::{ExpectedIndex, MatchEntry, RowError, RowWarning, ScanOutcome};

/// Split one record line into fields, honoring CSV quoting.
///
/// Lines are parsed individually so blank lines keep their position in the
/// row numbering instead of being swallowed by the reader.
pub(crate) fn split_fields(line: &str, row: usize) -> Result<Vec<String>, AuditError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record.iter().map(|f| f.to_string()).collect()),
        Some(Err(e)) => Err(AuditError::Scan {
            row,
            message: e.to_string(),
        }),
        None => Ok(Vec::new()),
    }
}

/// Scan data rows in file order. Row numbers count from 2: the header line
/// is row 1 and is skipped unconditionally.
pub fn scan_records(csv_data: &str, index: &ExpectedIndex) -> Result<ScanOutcome, AuditError> {
    let mut outcome = ScanOutcome::default();

    for (i, line) in csv_data.lines().enumerate() {
        let row = i + 1;
        if row == 1 {
            continue;
        }
        outcome.rows_scanned += 1;

        let fields = if line.is_empty() {
            Vec::new()
        } else {
            split_fields(line, row)?
        };
        if fields.len() < 2 {
            outcome.warnings.push(RowWarning { row });
            continue;
        }

        let address = fields[0].trim();
        let csv_amount = fields[1].trim();

        match index.get(address) {
            None => outcome.errors.push(RowError::AddressNotFound {
                row,
                address: address.to_string(),
                csv_amount: csv_amount.to_string(),
            }),
            Some(json_amount) if json_amount != csv_amount => {
                outcome.errors.push(RowError::AmountMismatch {
                    row,
                    address: address.to_string(),
                    csv_amount: csv_amount.to_string(),
                    json_amount: json_amount.clone(),
                })
            }
            Some(_) => outcome.matches.push(MatchEntry {
                row,
                address: address.to_string(),
                amount: csv_amount.to_string(),
            }),
        }
    }

    Ok(outcome)
}
