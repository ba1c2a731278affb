//! Validation run orchestration.

use crate::error::AuditError;
use crate::extra::find_extra_entries;
use crate::loader::load_expected_outputs;
use crate::model::{Summary, ValidationReport, Verdict};
use crate::scanner::scan_records;

/// Run the full validation: load the expected outputs, classify every record
/// row, detect unreferenced expected entries, and summarize.
pub fn run(outputs_json: &str, payment_csv: &str) -> Result<ValidationReport, AuditError> {
    let index = load_expected_outputs(outputs_json)?;
    let scan = scan_records(payment_csv, &index)?;
    let extras = find_extra_entries(payment_csv, &index)?;

    let summary = Summary {
        rows_processed: scan.rows_scanned,
        matches: scan.matches.len(),
        errors: scan.errors.len(),
        warnings: scan.warnings.len(),
        extra: extras.len(),
    };

    let verdict = if summary.errors > 0 {
        Verdict::Fail
    } else if summary.warnings > 0 || summary.extra > 0 {
        Verdict::PassWithWarnings
    } else {
        Verdict::Pass
    };

    Ok(ValidationReport {
        loaded_entries: index.len(),
        scan,
        extras,
        summary,
        verdict,
    })
}
