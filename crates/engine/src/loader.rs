//! Expected-output loader: outputs.json text → address → amount index.

use serde::Deserialize;

use crate::error::AuditError;
use crate::model::ExpectedIndex;

/// Wire shape of one outputs.json entry. Extra fields are ignored.
#[derive(Deserialize)]
struct OutputEntry {
    address: String,
    amount: OutputAmount,
}

#[derive(Deserialize)]
struct OutputAmount {
    coin: String,
}

/// Parse the expected-output document and index it by address.
/// Duplicate addresses keep the last entry seen.
pub fn load_expected_outputs(json_data: &str) -> Result<ExpectedIndex, AuditError> {
    let entries: Vec<OutputEntry> =
        serde_json::from_str(json_data).map_err(|e| AuditError::DataFormat(e.to_string()))?;

    let mut index = ExpectedIndex::with_capacity(entries.len());
    for entry in entries {
        index.insert(entry.address, entry.amount.coin);
    }

    Ok(index)
}
