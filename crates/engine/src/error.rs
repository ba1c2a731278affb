use std::fmt;

#[derive(Debug)]
pub enum AuditError {
    /// Expected-output document parse / deserialization error.
    DataFormat(String),
    /// A record-file line violates CSV conventions (unbalanced quote, etc.).
    Scan { row: usize, message: String },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataFormat(msg) => write!(f, "cannot parse outputs.json: {msg}"),
            Self::Scan { row, message } => {
                write!(f, "row {row}: cannot parse record: {message}")
            }
        }
    }
}

impl std::error::Error for AuditError {}
