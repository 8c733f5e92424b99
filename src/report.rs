//! Outcome classification and run reporting.

use anyhow::{Context, Result};
use serde::Serialize;
use std::process::ExitCode;

/// Terminal outcome of a verification run.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Outcome {
    Validated,
    FileMissing,
    InvalidHash,
    ReadFailed,
    Mismatch,
}

impl Outcome {
    /// Exit code for scripts branching on the result.
    ///
    /// Read failures share code 1 with missing files (both mean the file
    /// could not be read); the JSON report still tells them apart.
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            Outcome::Validated => 0,
            Outcome::FileMissing | Outcome::ReadFailed => 1,
            Outcome::InvalidHash => 2,
            Outcome::Mismatch => 3,
        }
    }
}

/// Machine-readable run report emitted in JSON mode.
///
/// Fields that do not exist yet when a run terminates early are omitted.
#[derive(Serialize)]
pub(crate) struct Report {
    pub(crate) file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) algorithm: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) computed: Option<String>,
    pub(crate) outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

/// Owns all process output; constructed once at the top level.
///
/// Informational lines go to stdout, error lines to stderr. In JSON mode
/// the log lines are suppressed and a single report object is printed
/// instead.
pub(crate) struct Reporter {
    json: bool,
}

impl Reporter {
    pub(crate) fn new(json: bool) -> Reporter {
        Reporter { json }
    }

    pub(crate) fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub(crate) fn error(&self, message: &str) {
        if !self.json {
            eprintln!("error: {message}");
        }
    }

    /// Emit the final report and map its outcome to the process exit code.
    pub(crate) fn finish(&self, report: Report) -> Result<ExitCode> {
        if self.json {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
        Ok(ExitCode::from(report.outcome.exit_code()))
    }
}
