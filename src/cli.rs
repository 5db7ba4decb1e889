use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Rewrites the sign-in guard in the project landing page.
///
/// Finds the exact `if (!user) { await signIn(); return; }` block and replaces
/// it with one that only returns when sign-in failed. Running it again after a
/// successful patch reports that the code was not found and changes nothing.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Literal one-file patch for handleCreateProject",
    long_about = "patchlet - Apply the sign-in guard fix to the project landing page.

EXIT CODES:
  0  patch applied (or would apply with --dry-run)
  3  code to patch was not found (0 with --allow-missing)
  1  the target file could not be read or written

EXAMPLES:
  patchlet                                  # Patch src/pages/ProjectLandingPage.jsx
  patchlet --dry-run                        # Check without writing
  patchlet -f app/pages/Landing.jsx         # Patch another copy of the page
  patchlet --format json --allow-missing    # Pipeline-friendly"
)]
pub struct Args {
    /// Path to the file to patch. Defaults to the landing page under the current directory.
    #[arg(short, long, env = "PATCHLET_FILE")]
    pub file: Option<PathBuf>,

    /// Report whether the patch would apply without modifying the file.
    #[arg(long)]
    pub dry_run: bool,

    /// The output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Exit successfully when the code to patch is absent (e.g. already patched).
    #[arg(long)]
    pub allow_missing: bool,

    /// Increase log verbosity (-v for info, -vv for debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command-line arguments and returns the populated `Args` struct.
pub fn parse_args() -> Args {
    Args::parse()
}
