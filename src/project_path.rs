//! Project path resolution
//!
//! Monorepos keep the launchable application in a subdirectory of the
//! workspace root. The [`ProjectPathResolver`] trait is the narrow seam the
//! detector uses to map a workspace root to the directory actually holding
//! `package.json`; production resolution is driven by the
//! `BP_NODE_PROJECT_PATH` environment variable, and tests substitute their
//! own implementation.

use anyhow::{bail, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the application subdirectory, relative to the
/// workspace root. Unset or empty means the root itself is the project.
pub const PROJECT_PATH_VAR: &str = "BP_NODE_PROJECT_PATH";

/// Maps a workspace root to the directory containing the manifest.
///
/// Errors are opaque to the detector and surfaced to its caller unchanged.
pub trait ProjectPathResolver: Send + Sync {
    fn resolve(&self, workspace_root: &Path) -> Result<PathBuf>;
}

/// Production resolver honoring `BP_NODE_PROJECT_PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectPathResolverFromEnv;

impl ProjectPathResolver for ProjectPathResolverFromEnv {
    fn resolve(&self, workspace_root: &Path) -> Result<PathBuf> {
        let subdir = match env::var(PROJECT_PATH_VAR) {
            Ok(value) if !value.is_empty() => value,
            _ => return Ok(workspace_root.to_path_buf()),
        };

        let project_path = workspace_root.join(&subdir);
        match std::fs::metadata(&project_path) {
            Ok(metadata) if metadata.is_dir() => {
                debug!(path = %project_path.display(), "resolved project path from {}", PROJECT_PATH_VAR);
                Ok(project_path)
            }
            Ok(_) => bail!(
                "expected project path {} to be a directory",
                project_path.display()
            ),
            Err(err) => bail!(
                "could not find project path {}: {}",
                project_path.display(),
                err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_resolves_to_root_when_unset() {
        env::remove_var(PROJECT_PATH_VAR);
        let working_dir = TempDir::new().unwrap();

        let resolved = ProjectPathResolverFromEnv
            .resolve(working_dir.path())
            .unwrap();
        assert_eq!(resolved, working_dir.path());
    }

    #[test]
    #[serial]
    fn test_resolves_configured_subdirectory() {
        let working_dir = TempDir::new().unwrap();
        fs::create_dir(working_dir.path().join("custom")).unwrap();
        env::set_var(PROJECT_PATH_VAR, "custom");

        let resolved = ProjectPathResolverFromEnv
            .resolve(working_dir.path())
            .unwrap();
        env::remove_var(PROJECT_PATH_VAR);

        assert_eq!(resolved, working_dir.path().join("custom"));
    }

    #[test]
    #[serial]
    fn test_missing_subdirectory_fails() {
        let working_dir = TempDir::new().unwrap();
        env::set_var(PROJECT_PATH_VAR, "does-not-exist");

        let err = ProjectPathResolverFromEnv
            .resolve(working_dir.path())
            .unwrap_err();
        env::remove_var(PROJECT_PATH_VAR);

        assert!(err.to_string().contains("could not find project path"));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    #[serial]
    fn test_subdirectory_that_is_a_file_fails() {
        let working_dir = TempDir::new().unwrap();
        fs::write(working_dir.path().join("custom"), "not a dir").unwrap();
        env::set_var(PROJECT_PATH_VAR, "custom");

        let err = ProjectPathResolverFromEnv
            .resolve(working_dir.path())
            .unwrap_err();
        env::remove_var(PROJECT_PATH_VAR);

        assert!(err.to_string().contains("to be a directory"));
    }
}
