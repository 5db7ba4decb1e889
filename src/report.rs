use crate::errors::{Error, Result};
use crate::patcher::{PatchOutcome, PatchResult};
use crate::patches::Patch;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Defines the possible output formats for a patch run.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A single human-readable status line.
    Text,
    /// JSON object, suitable for machine processing.
    Json,
}

/// Renders the outcome of a patch run for the invoking operator.
pub struct ReportWriter {
    format: OutputFormat,
    tool_name: String,
    tool_version: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo<'a>,
    run_time: DateTime<Utc>,
    patch: &'a str,
    file: String,
    outcome: &'static str,
    occurrences: usize,
    dry_run: bool,
    sha256_before: &'a str,
    sha256_after: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'a str,
    version: &'a str,
}

impl ReportWriter {
    /// Creates a new `ReportWriter` for the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Writes the report for one run of `patch` against `path`.
    pub fn write_report<W: Write>(
        &self,
        writer: &mut W,
        patch: &Patch,
        path: &Path,
        result: &PatchResult,
    ) -> Result<()> {
        let output = match self.format {
            OutputFormat::Text => self.format_text(patch, result),
            OutputFormat::Json => self.format_json(patch, path, result)?,
        };
        writer
            .write_all(output.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io("<stdout>", e))?;
        Ok(())
    }

    fn format_text(&self, patch: &Patch, result: &PatchResult) -> String {
        match (result.outcome, result.dry_run) {
            (PatchOutcome::Applied { .. }, false) => format!("{}\n", patch.applied_message),
            (PatchOutcome::Applied { .. }, true) => format!("DRY {}\n", patch.applied_message),
            (PatchOutcome::NotFound, _) => format!("{}\n", patch.missing_message),
        }
    }

    fn format_json(&self, patch: &Patch, path: &Path, result: &PatchResult) -> Result<String> {
        let report = JsonReport {
            tool: ToolInfo {
                name: &self.tool_name,
                version: &self.tool_version,
            },
            run_time: Utc::now(),
            patch: patch.name,
            file: path.display().to_string(),
            outcome: match result.outcome {
                PatchOutcome::Applied { .. } => "applied",
                PatchOutcome::NotFound => "not_found",
            },
            occurrences: result.outcome.occurrences(),
            dry_run: result.dry_run,
            sha256_before: &result.fingerprint_before,
            sha256_after: result.fingerprint_after.as_deref(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
