//! Version label derivation from VCS tag metadata.
//!
//! Production builds display the most recent reachable git tag in the top
//! navigation; development builds and any failed lookup fall back to the
//! default label. A failed lookup can never fail the build.

use crate::{env::BuildEnv, log, utils::exec::Cmd};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Label used when no tag can be derived.
pub const DEFAULT_LABEL: &str = "Main";

/// Read-only access to VCS tag metadata.
///
/// An explicit seam so tests can exercise the fallback path without
/// spawning a real process.
pub trait TagSource {
    /// Name of the most recent tag reachable from the current head.
    fn latest_tag(&self) -> Result<String>;
}

// ============================================================================
// Git-backed source
// ============================================================================

/// Tag source backed by the `git` command-line tool.
#[derive(Debug, Default)]
pub struct GitTags {
    cwd: Option<PathBuf>,
}

impl GitTags {
    /// Read tags from the repository containing the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tags from the repository at `dir` instead.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            cwd: Some(dir.as_ref().to_owned()),
        }
    }
}

impl TagSource for GitTags {
    fn latest_tag(&self) -> Result<String> {
        let mut cmd = Cmd::new("git").args(["describe", "--tags", "--abbrev=0"]);
        if let Some(dir) = &self.cwd {
            cmd = cmd.cwd(dir);
        }
        let output = cmd.run()?;
        Ok(String::from_utf8(output.stdout)?.trim().to_owned())
    }
}

// ============================================================================
// Label resolution
// ============================================================================

/// Resolve the display version label for this build.
///
/// Development builds never consult the tag source. In production a
/// failed or empty lookup logs one warning and yields [`DEFAULT_LABEL`].
pub fn resolve_label(env: BuildEnv, source: &dyn TagSource) -> String {
    if !env.is_production() {
        return DEFAULT_LABEL.to_owned();
    }

    match source.latest_tag() {
        Ok(tag) => {
            let tag = tag.trim();
            if tag.is_empty() {
                warn_fallback("tag name is empty");
                DEFAULT_LABEL.to_owned()
            } else {
                crate::debug!("version"; "resolved tag '{tag}'");
                tag.to_owned()
            }
        }
        Err(err) => {
            warn_fallback(&err.to_string());
            DEFAULT_LABEL.to_owned()
        }
    }
}

fn warn_fallback(reason: &str) {
    log!("warning"; "failed to read version tag, using default: {reason}");
}

// ============================================================================
// Test helpers
// ============================================================================

/// Fixed-answer tag source for tests. `None` means the lookup fails.
#[cfg(test)]
pub struct StaticTags(pub Option<&'static str>);

#[cfg(test)]
impl TagSource for StaticTags {
    fn latest_tag(&self) -> Result<String> {
        match self.0 {
            Some(tag) => Ok(tag.to_owned()),
            None => anyhow::bail!("no tags found"),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
