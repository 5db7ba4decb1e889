use crate::errors::{Error, Result};
use crate::fingerprint::content_hash;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// The in-memory result of applying a literal patch to some content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The content with every occurrence of the search string replaced.
    pub content: String,
    /// How many non-overlapping occurrences were replaced.
    pub occurrences: usize,
}

/// What happened (or, in a dry run, would happen) to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The search string was found and replaced.
    Applied { occurrences: usize },
    /// The search string does not occur; the file was left untouched.
    NotFound,
}

impl PatchOutcome {
    /// `true` if the patch matched.
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }

    /// Number of replaced occurrences, zero when nothing matched.
    pub fn occurrences(&self) -> usize {
        match self {
            PatchOutcome::Applied { occurrences } => *occurrences,
            PatchOutcome::NotFound => 0,
        }
    }
}

/// Applies a literal substitution to `content` without touching the filesystem.
///
/// Returns `None` when `search` does not occur. Otherwise every non-overlapping
/// occurrence, scanning left to right, is replaced by `replacement`.
pub fn apply_to_content(content: &str, search: &str, replacement: &str) -> Option<Edit> {
    if search.is_empty() {
        return None;
    }
    let occurrences = content.matches(search).count();
    if occurrences == 0 {
        return None;
    }
    Some(Edit {
        content: content.replace(search, replacement),
        occurrences,
    })
}

/// A patch run together with fingerprints of the target before and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
    pub outcome: PatchOutcome,
    /// SHA-256 of the content as read.
    pub fingerprint_before: String,
    /// SHA-256 of the patched content; `None` when nothing matched.
    pub fingerprint_after: Option<String>,
    /// `true` if the file was only checked, not written.
    pub dry_run: bool,
}

/// Reads `path`, replaces every occurrence of `search` and writes the result back.
///
/// The new content is staged in a temporary file next to the target, given the
/// target's permissions, and renamed over it, so other processes see either the
/// old file or the new one.
pub fn apply_patch(path: &Path, search: &str, replacement: &str) -> Result<PatchOutcome> {
    run_patch(path, search, replacement, false).map(|r| r.outcome)
}

/// Like [`apply_patch`], but never writes. Reports what `apply_patch` would do.
pub fn check_patch(path: &Path, search: &str, replacement: &str) -> Result<PatchOutcome> {
    run_patch(path, search, replacement, true).map(|r| r.outcome)
}

/// Shared driver behind [`apply_patch`] and [`check_patch`].
pub fn run_patch(
    path: &Path,
    search: &str,
    replacement: &str,
    dry_run: bool,
) -> Result<PatchResult> {
    if search.is_empty() {
        return Err(Error::EmptySearch);
    }

    // Symlinks are followed so the rename replaces the file they point to.
    let target = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
    let content = fs::read_to_string(&target).map_err(|e| Error::io(path, e))?;
    debug!(path = %target.display(), bytes = content.len(), "read target file");
    let fingerprint_before = content_hash(&content);

    let Some(edit) = apply_to_content(&content, search, replacement) else {
        info!(path = %path.display(), "search snippet not found, leaving file untouched");
        return Ok(PatchResult {
            outcome: PatchOutcome::NotFound,
            fingerprint_before,
            fingerprint_after: None,
            dry_run,
        });
    };

    if dry_run {
        info!(
            path = %path.display(),
            occurrences = edit.occurrences,
            "dry run, patch not written"
        );
    } else {
        write_atomically(&target, &edit.content)?;
        info!(
            path = %path.display(),
            occurrences = edit.occurrences,
            "patch written"
        );
    }

    Ok(PatchResult {
        outcome: PatchOutcome::Applied {
            occurrences: edit.occurrences,
        },
        fingerprint_before,
        fingerprint_after: Some(content_hash(&edit.content)),
        dry_run,
    })
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    // The rename only needs a writable directory; the target itself must be writable too.
    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    // `Path::parent` yields "" for bare file names.
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(temp_file.path(), e))?;

    // Preserve file permissions
    let perms = fs::metadata(path).map_err(|e| Error::io(path, e))?.permissions();
    fs::set_permissions(temp_file.path(), perms).map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file.persist(path)?;
    Ok(())
}
