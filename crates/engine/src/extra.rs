//! Extra-entry detector: expected addresses never referenced by the record
//! file.

use std::collections::HashSet;

use crate::error::AuditError;
use crate::model::{ExpectedIndex, ExtraEntry};
use crate::scanner::split_fields;

/// Addresses present in the expected index but absent from every valid data
/// row, with their indexed amounts, sorted by address.
///
/// Independent pass over the record file: matches on address only and
/// ignores whatever the classification pass concluded about each row. A row
/// with a single field still counts as referencing its address.
pub fn find_extra_entries(
    csv_data: &str,
    index: &ExpectedIndex,
) -> Result<Vec<ExtraEntry>, AuditError> {
    let mut seen: HashSet<String> = HashSet::new();

    for (i, line) in csv_data.lines().enumerate() {
        let row = i + 1;
        if row == 1 || line.is_empty() {
            continue;
        }
        let fields = split_fields(line, row)?;
        if let Some(first) = fields.first() {
            seen.insert(first.trim().to_string());
        }
    }

    let mut extras: Vec<ExtraEntry> = index
        .iter()
        .filter(|(address, _)| !seen.contains(address.as_str()))
        .map(|(address, amount)| ExtraEntry {
            address: address.clone(),
            amount: amount.clone(),
        })
        .collect();
    extras.sort_by(|a, b| a.address.cmp(&b.address));

    Ok(extras)
}
