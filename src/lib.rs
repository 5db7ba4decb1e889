//! `patchlet` applies one fixed, literal text patch to one source file.
//!
//! The library keeps the substitution itself pure and testable, and leaves
//! argument parsing and process exit codes to the binary. The main components are:
//!
//! - `patcher`: the literal find-and-replace, with an atomic write-back.
//! - `patches`: the built-in patch and its operator status lines.
//! - `report`: text and JSON rendering of a run's outcome.
//! - `fingerprint`: SHA-256 content hashes carried in reports.

pub mod cli;
pub mod errors;
pub mod fingerprint;
pub mod logging;
pub mod patcher;
pub mod patches;
pub mod report;

// Re-export main types for easier access by library users.
pub use errors::{Error, Result};
pub use patcher::{PatchOutcome, PatchResult, apply_patch, apply_to_content, check_patch};
pub use patches::{Patch, SIGN_IN_GUARD};
pub use report::{OutputFormat, ReportWriter};
