//! Human-readable report rendering.
//!
//! Deterministic: the same report renders to the same text on every run, so
//! repeated validations of unchanged inputs are byte-identical.

use std::fmt;

use crate::model::{RowError, ValidationReport, Verdict};

const RULE: &str =
    "================================================================================";

/// Address shortened for match lines: first 20 characters plus "...".
fn short_address(address: &str) -> String {
    let head: String = address.chars().take(20).collect();
    format!("{head}...")
}

/// Render the report with the input paths shown in the banner.
pub fn render(report: &ValidationReport, csv_path: &str, json_path: &str) -> String {
    ReportDisplay {
        report,
        csv_path,
        json_path,
    }
    .to_string()
}

struct ReportDisplay<'a> {
    report: &'a ValidationReport,
    csv_path: &'a str,
    json_path: &'a str,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;

        writeln!(f, "{RULE}")?;
        writeln!(f, "PAYMENT VALIDATION REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "CSV File:  {}", self.csv_path)?;
        writeln!(f, "JSON File: {}", self.json_path)?;
        writeln!(f, "{RULE}")?;

        writeln!(f)?;
        writeln!(f, "✓ Loaded {} entries from outputs.json", r.loaded_entries)?;

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "VALIDATION RESULTS")?;
        writeln!(f, "{RULE}")?;

        if !r.scan.matches.is_empty() {
            writeln!(f)?;
            writeln!(f, "✓ MATCHES ({}):", r.scan.matches.len())?;
            for m in &r.scan.matches {
                writeln!(
                    f,
                    "  Row {}: ✓ MATCH - {} = {} lovelace",
                    m.row,
                    short_address(&m.address),
                    m.amount
                )?;
            }
        }

        if !r.scan.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "⚠ WARNINGS ({}):", r.scan.warnings.len())?;
            for w in &r.scan.warnings {
                writeln!(f, "  Row {}: Empty or incomplete row", w.row)?;
            }
        }

        if !r.scan.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "❌ ERRORS ({}):", r.scan.errors.len())?;
            for e in &r.scan.errors {
                match e {
                    RowError::AddressNotFound {
                        row,
                        address,
                        csv_amount,
                    } => {
                        writeln!(f, "  Row {row}: Address NOT FOUND in outputs.json")?;
                        writeln!(f, "    Address: {address}")?;
                        writeln!(f, "    CSV Amount: {csv_amount}")?;
                    }
                    RowError::AmountMismatch {
                        row,
                        address,
                        csv_amount,
                        json_amount,
                    } => {
                        writeln!(f, "  Row {row}: AMOUNT MISMATCH")?;
                        writeln!(f, "    Address: {address}")?;
                        writeln!(f, "    CSV Amount: {csv_amount}")?;
                        writeln!(f, "    JSON Amount: {json_amount}")?;
                    }
                }
            }
        }

        if !r.extras.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "⚠ EXTRA ENTRIES IN JSON NOT IN CSV ({}):",
                r.extras.len()
            )?;
            for x in &r.extras {
                writeln!(f, "  {} = {} lovelace", x.address, x.amount)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "CSV Rows Processed: {}", r.summary.rows_processed)?;
        writeln!(f, "Matches: {}", r.summary.matches)?;
        writeln!(f, "Errors: {}", r.summary.errors)?;
        writeln!(f, "Warnings: {}", r.summary.warnings)?;
        writeln!(f, "Extra in JSON: {}", r.summary.extra)?;

        writeln!(f)?;
        match r.verdict {
            Verdict::Fail => writeln!(f, "❌ VALIDATION FAILED - Errors found"),
            Verdict::PassWithWarnings => writeln!(f, "⚠ VALIDATION PASSED WITH WARNINGS"),
            Verdict::Pass => writeln!(f, "✅ VALIDATION PASSED - All entries match!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run;

    const OUTPUTS: &str = r#"[
        {"address": "addr_test1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", "amount": {"coin": "1000000"}},
        {"address": "addr2", "amount": {"coin": "500"}}
    ]"#;

    #[test]
    fn section_order_is_fixed() {
        let csv = "address,amount\naddr_test1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh,1000000\nbogus,1\n\n";
        let report = run(OUTPUTS, csv).unwrap();
        let text = render(&report, "payment.csv", "outputs.json");

        let positions: Vec<usize> = [
            "PAYMENT VALIDATION REPORT",
            "Loaded 2 entries",
            "VALIDATION RESULTS",
            "MATCHES (1):",
            "WARNINGS (1):",
            "ERRORS (1):",
            "EXTRA ENTRIES IN JSON NOT IN CSV (1):",
            "SUMMARY",
            "VALIDATION FAILED",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle:?}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order:\n{text}");
    }

    #[test]
    fn banner_shows_both_paths() {
        let report = run(OUTPUTS, "address,amount\n").unwrap();
        let text = render(&report, "in/payment.csv", "in/outputs.json");
        assert!(text.contains("CSV File:  in/payment.csv"));
        assert!(text.contains("JSON File: in/outputs.json"));
    }

    #[test]
    fn match_line_truncates_address() {
        let csv = "address,amount\naddr_test1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh,1000000\naddr2,500\n";
        let report = run(OUTPUTS, csv).unwrap();
        let text = render(&report, "p", "o");
        assert!(text.contains("Row 2: ✓ MATCH - addr_test1qxy2kgdygj... = 1000000 lovelace"));
        // Short addresses still get the ellipsis.
        assert!(text.contains("Row 3: ✓ MATCH - addr2... = 500 lovelace"));
    }

    #[test]
    fn error_blocks_are_multi_line() {
        let csv = "address,amount\naddr2,999\n";
        let report = run(OUTPUTS, csv).unwrap();
        let text = render(&report, "p", "o");
        assert!(text.contains("  Row 2: AMOUNT MISMATCH\n    Address: addr2\n    CSV Amount: 999\n    JSON Amount: 500\n"));
        // One error occurrence, four rendered lines.
        assert!(text.contains("ERRORS (1):"));
        assert!(text.contains("Errors: 1"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let csv = "address,amount\naddr_test1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh,1000000\naddr2,500\n";
        let report = run(OUTPUTS, csv).unwrap();
        let text = render(&report, "p", "o");
        assert!(!text.contains("WARNINGS"));
        assert!(!text.contains("ERRORS"));
        assert!(!text.contains("EXTRA ENTRIES"));
        assert!(text.contains("✅ VALIDATION PASSED - All entries match!"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let csv = "address,amount\naddr2,500\nbogus,1\n";
        let a = render(&run(OUTPUTS, csv).unwrap(), "p", "o");
        let b = render(&run(OUTPUTS, csv).unwrap(), "p", "o");
        assert_eq!(a, b);
    }
}
