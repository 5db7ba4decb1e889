use crate::errors::Result;
use crate::patcher::{self, PatchResult};
use std::path::Path;

/// A fixed literal patch: where it applies, what it looks for and what it writes.
#[derive(Debug, Clone, Copy)]
pub struct Patch {
    /// Short identifier used in reports.
    pub name: &'static str,
    /// Target file, relative to the working directory.
    pub default_target: &'static str,
    /// Exact text to find.
    pub search: &'static str,
    /// Text substituted for every occurrence of `search`.
    pub replacement: &'static str,
    /// Status line printed when the patch matched.
    pub applied_message: &'static str,
    /// Status line printed when the search text was not found.
    pub missing_message: &'static str,
}

impl Patch {
    /// Applies the patch to `path`, writing the file on a match.
    pub fn apply(&self, path: &Path) -> Result<PatchResult> {
        patcher::run_patch(path, self.search, self.replacement, false)
    }

    /// Reports whether the patch would apply to `path` without writing.
    pub fn check(&self, path: &Path) -> Result<PatchResult> {
        patcher::run_patch(path, self.search, self.replacement, true)
    }

    /// Applies or checks depending on `dry_run`.
    pub fn run(&self, path: &Path, dry_run: bool) -> Result<PatchResult> {
        if dry_run {
            self.check(path)
        } else {
            self.apply(path)
        }
    }
}

/// Makes `handleCreateProject` bail out when sign-in did not produce a session,
/// instead of always returning after the sign-in prompt.
pub const SIGN_IN_GUARD: Patch = Patch {
    name: "sign-in-guard",
    default_target: "src/pages/ProjectLandingPage.jsx",
    search: "    if (!user) {
      await signIn();
      return;
    }",
    replacement: "    if (!user) {
      const result = await signIn();
      if (!result) return;
    }",
    applied_message: "Successfully patched handleCreateProject",
    missing_message: "Could not find code to patch",
};
