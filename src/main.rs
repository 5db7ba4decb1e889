//! The main entry point for the `patchlet` command-line application.
//!
//! Parses arguments, runs the built-in patch and turns its outcome into an exit code.

use patchlet::cli::{self, Args};
use patchlet::errors::Result;
use patchlet::{PatchOutcome, ReportWriter, SIGN_IN_GUARD, logging};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};

/// Exit status when the code to patch could not be found.
const EXIT_NOT_FOUND: i32 = 3;

fn main() {
    let args = cli::parse_args();
    logging::init(args.verbose);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(outcome) => process::exit(exit_code(outcome, args.allow_missing)),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn exit_code(outcome: PatchOutcome, allow_missing: bool) -> i32 {
    match outcome {
        PatchOutcome::Applied { .. } => 0,
        PatchOutcome::NotFound if allow_missing => 0,
        PatchOutcome::NotFound => EXIT_NOT_FOUND,
    }
}

/// Runs the patch and writes its report to `out`.
///
/// A report that cannot be written is logged; the exit code still reflects what
/// happened to the file.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<PatchOutcome> {
    let patch = SIGN_IN_GUARD;
    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(patch.default_target));
    debug!(patch = patch.name, path = %path.display(), dry_run = args.dry_run, "running patch");

    let result = patch.run(&path, args.dry_run)?;

    if let Err(e) = ReportWriter::new(args.format).write_report(out, &patch, &path, &result) {
        error!("failed to write report: {e}");
    }

    Ok(result.outcome)
}
