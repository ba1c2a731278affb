use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Expected outputs
// ---------------------------------------------------------------------------

/// Expected outputs indexed by address. Amounts are smallest-unit decimal
/// strings and are compared as text, never numerically. Duplicate addresses
/// in the source document keep the last entry seen.
pub type ExpectedIndex = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Per-row classification
// ---------------------------------------------------------------------------

/// A data row whose address and amount both matched the expected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub row: usize,
    pub address: String,
    pub amount: String,
}

/// A data row that failed validation. Contributes to the failing exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    AddressNotFound {
        row: usize,
        address: String,
        csv_amount: String,
    },
    AmountMismatch {
        row: usize,
        address: String,
        csv_amount: String,
        json_amount: String,
    },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            Self::AddressNotFound { row, .. } | Self::AmountMismatch { row, .. } => *row,
        }
    }
}

/// An empty or incomplete data row. Surfaced but never fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWarning {
    pub row: usize,
}

/// Classification pass output. The three sequences preserve file order;
/// every data row lands in exactly one of them.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub matches: Vec<MatchEntry>,
    pub errors: Vec<RowError>,
    pub warnings: Vec<RowWarning>,
    /// Data rows seen, header excluded. Exact counter, one per line.
    pub rows_scanned: usize,
}

// ---------------------------------------------------------------------------
// Extra-entry detection
// ---------------------------------------------------------------------------

/// An expected address never referenced by any valid record-file row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraEntry {
    pub address: String,
    pub amount: String,
}

// ---------------------------------------------------------------------------
// Summary + verdict
// ---------------------------------------------------------------------------

/// Exact occurrence counts. One increment per classified row or extra
/// entry, never per printed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows_processed: usize,
    pub matches: usize,
    pub errors: usize,
    pub warnings: usize,
    pub extra: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    PassWithWarnings,
    Fail,
}

impl Verdict {
    /// Process exit code for this verdict. Warnings and extra entries do not
    /// fail the run; errors do.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Pass | Self::PassWithWarnings => 0,
            Self::Fail => 1,
        }
    }
}

/// Full result of one validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub loaded_entries: usize,
    pub scan: ScanOutcome,
    pub extras: Vec<ExtraEntry>,
    pub summary: Summary,
    pub verdict: Verdict,
}
