// payaudit CLI - validate a batch payment CSV against expected outputs.

mod exit_codes;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use exit_codes::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

#[derive(Parser)]
#[command(name = "payaudit")]
#[command(about = "Validate a batch payment CSV against expected outputs")]
#[command(version)]
#[command(after_help = "\
Examples:
  payaudit
  payaudit batch-0042.csv
  payaudit batch-0042.csv expected/outputs.json")]
struct Cli {
    /// Candidate payment CSV (header row, then address,amount)
    #[arg(value_name = "PAYMENT_CSV", default_value = "inputOutputs/payment.csv")]
    payment_csv: PathBuf,

    /// Expected outputs JSON (array of entries with address and amount.coin)
    #[arg(value_name = "OUTPUTS_JSON", default_value = "inputOutputs/outputs.json")]
    outputs_json: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cmd_validate(&cli.payment_csv, &cli.outputs_json) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_VALIDATION_FAILED,
            message: msg.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn cmd_validate(payment_csv: &Path, outputs_json: &Path) -> Result<(), CliError> {
    // Missing inputs abort before any report output.
    if !payment_csv.exists() {
        return Err(
            CliError::failure(format!("CSV file not found: {}", payment_csv.display()))
                .with_hint("pass the payment CSV path as the first argument"),
        );
    }
    if !outputs_json.exists() {
        return Err(
            CliError::failure(format!("JSON file not found: {}", outputs_json.display()))
                .with_hint("pass the outputs JSON path as the second argument"),
        );
    }

    let csv_data = fs::read_to_string(payment_csv).map_err(|e| {
        CliError::failure(format!("cannot read {}: {e}", payment_csv.display()))
    })?;
    let json_data = fs::read_to_string(outputs_json).map_err(|e| {
        CliError::failure(format!("cannot read {}: {e}", outputs_json.display()))
    })?;

    let report = payaudit_engine::run(&json_data, &csv_data)
        .map_err(|e| CliError::failure(e.to_string()))?;

    print!(
        "{}",
        payaudit_engine::render(
            &report,
            &payment_csv.display().to_string(),
            &outputs_json.display().to_string(),
        )
    );

    match report.verdict.exit_code() {
        0 => Ok(()),
        code => Err(CliError {
            code,
            message: "validation failed: errors found".into(),
            hint: None,
        }),
    }
}
