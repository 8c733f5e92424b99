//! File hash verification entrypoint.

mod algo;
mod hashing;
mod reference;
mod report;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::hashing::digest_file;
use crate::reference::ReferenceHash;
use crate::report::{Outcome, Report, Reporter};

/// Read size in bytes used when no buffer size is given.
const DEFAULT_BUFFER_SIZE: u64 = 65535;

/// CLI arguments for the hash validator.
#[derive(Parser, Debug)]
#[command(
    name = "hashval",
    version,
    about = "Quickly validate a file hash",
    after_help = "Automatically detects the hashing algorithm.\n\
                  Supported algorithms: MD5, SHA1, SHA256, SHA512."
)]
struct Args {
    /// File to verify
    file: PathBuf,

    /// Reference hex digest to check against
    hash: String,

    /// Buffer size in bytes for reading the input file
    #[arg(
        short = 'b',
        long = "buffer-size",
        value_name = "BYTES",
        default_value_t = DEFAULT_BUFFER_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    buffer_size: u64,

    /// Emit a machine-readable JSON report instead of log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    run(args)
}

/// Verify one file against the reference hash and report the outcome.
fn run(args: Args) -> Result<ExitCode> {
    let reporter = Reporter::new(args.json);
    let file = args.file.display().to_string();

    if !args.file.is_file() {
        reporter.error(&format!("no such file: '{file}'"));
        return reporter.finish(Report {
            file,
            algorithm: None,
            expected: None,
            computed: None,
            outcome: Outcome::FileMissing,
            error: Some("no such file".to_string()),
        });
    }

    let reference = match ReferenceHash::parse(&args.hash) {
        Ok(reference) => reference,
        Err(err) => {
            reporter.error(&format!("invalid hash: '{}' ({err})", args.hash));
            reporter.error("supported hashes: MD5, SHA1, SHA256, SHA512");
            return reporter.finish(Report {
                file,
                algorithm: None,
                expected: None,
                computed: None,
                outcome: Outcome::InvalidHash,
                error: Some(err.to_string()),
            });
        }
    };

    let algorithm = reference.algorithm();
    reporter.info(&format!("hashing algorithm is {}", algorithm.name()));

    let computed = match digest_file(&args.file, algorithm, args.buffer_size as usize) {
        Ok(digest) => digest,
        Err(err) => {
            reporter.error(&format!("failed to read '{file}': {err}"));
            return reporter.finish(Report {
                file,
                algorithm: Some(algorithm.name()),
                expected: Some(reference.hex().to_string()),
                computed: None,
                outcome: Outcome::ReadFailed,
                error: Some(err.to_string()),
            });
        }
    };

    reporter.info(&format!("computed {} hash: {computed}", algorithm.name()));

    if reference.matches(&computed) {
        reporter.info("hashes match: VALIDATED");
        reporter.finish(Report {
            file,
            algorithm: Some(algorithm.name()),
            expected: Some(reference.hex().to_string()),
            computed: Some(computed),
            outcome: Outcome::Validated,
            error: None,
        })
    } else {
        reporter.error("hashes do not match: INVALID");
        reporter.finish(Report {
            file,
            algorithm: Some(algorithm.name()),
            expected: Some(reference.hex().to_string()),
            computed: Some(computed),
            outcome: Outcome::Mismatch,
            error: None,
        })
    }
}
