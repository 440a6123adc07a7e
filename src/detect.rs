//! Detect phase decision procedure
//!
//! Decides whether a workspace is a launchable npm application: the project
//! directory (supplied by the injected [`ProjectPathResolver`]) must contain a
//! `package.json` declaring a non-empty `start` script. On success the
//! detector emits a [`BuildPlan`] requiring, in order, `node`, `npm`, and
//! `node_modules` at launch, plus `watchexec` when live reload is enabled.
//!
//! A missing manifest is not an error: it yields the soft
//! [`Detection::Undetected`] outcome, meaning "this workspace is not an npm
//! application", and the harness is expected to skip this buildpack. Every
//! other failure mode is a hard [`DetectError`].

use crate::manifest::{PackageJson, MANIFEST_NAME};
use crate::plan::{BuildPlan, Requirement};
use crate::project_path::ProjectPathResolver;
use crate::toggle::{InvalidToggleError, LiveReloadToggle};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Fixed message emitted when a manifest exists but declares no usable start
/// script. Public so callers and tests can match detection failures against
/// it by substring.
pub const NO_START_SCRIPT_MESSAGE: &str = "no start script in package.json";

/// Per-invocation input supplied by the buildpack harness.
#[derive(Debug, Clone)]
pub struct DetectContext {
    /// Workspace root the platform mounted for this build.
    pub working_dir: PathBuf,
}

impl DetectContext {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

/// Outcome of a detection call.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// The workspace launches via `npm start`; the plan lists its launch
    /// requirements in order.
    Detected(BuildPlan),

    /// No manifest at the project path: the workspace is not an npm
    /// application. A sentinel outcome, not an error.
    Undetected,
}

impl Detection {
    pub fn plan(&self) -> Option<&BuildPlan> {
        match self {
            Detection::Detected(plan) => Some(plan),
            Detection::Undetected => None,
        }
    }
}

/// Hard detection failures.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The project path resolver failed; its error is surfaced unchanged.
    #[error(transparent)]
    Resolution(anyhow::Error),

    /// The manifest exists but could not be inspected or read.
    #[error("failed to stat package.json: {0}")]
    ManifestUnreadable(#[source] io::Error),

    /// The manifest is not well-formed JSON.
    #[error("failed to parse package.json: {0}")]
    ManifestMalformed(#[source] serde_json::Error),

    /// The manifest parsed but `scripts.start` is absent or empty.
    #[error("{}", NO_START_SCRIPT_MESSAGE)]
    NoStartScript,

    /// `BP_LIVE_RELOAD_ENABLED` holds a non-boolean literal.
    #[error(transparent)]
    InvalidToggle(#[from] InvalidToggleError),
}

/// Detect-phase entry point. Holds the injected project path resolver; each
/// [`detect`](Detector::detect) call is independent and idempotent given
/// identical filesystem and environment state.
pub struct Detector {
    resolver: Box<dyn ProjectPathResolver>,
}

impl Detector {
    pub fn new(resolver: impl ProjectPathResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Runs detection against the workspace, reading the live reload toggle
    /// from the process environment.
    pub fn detect(&self, context: DetectContext) -> Result<Detection, DetectError> {
        self.detect_with_toggle(context, LiveReloadToggle::from_env())
    }

    /// Same procedure with the live reload toggle supplied explicitly.
    ///
    /// The toggle literal is parsed only after the start script decision has
    /// succeeded, so a workspace that fails detection reports the missing
    /// start script rather than a bad toggle value.
    pub fn detect_with_toggle(
        &self,
        context: DetectContext,
        toggle: LiveReloadToggle,
    ) -> Result<Detection, DetectError> {
        let project_path = self
            .resolver
            .resolve(&context.working_dir)
            .map_err(DetectError::Resolution)?;

        let manifest_path = project_path.join(MANIFEST_NAME);
        if let Err(err) = std::fs::metadata(&manifest_path) {
            if err.kind() == io::ErrorKind::NotFound {
                debug!(path = %manifest_path.display(), "no package.json, skipping");
                return Ok(Detection::Undetected);
            }
            return Err(DetectError::ManifestUnreadable(err));
        }

        let content =
            std::fs::read_to_string(&manifest_path).map_err(DetectError::ManifestUnreadable)?;
        let manifest: PackageJson =
            serde_json::from_str(&content).map_err(DetectError::ManifestMalformed)?;

        if !manifest.has_start_script() {
            return Err(DetectError::NoStartScript);
        }

        let mut requires = vec![
            Requirement::launch("node"),
            Requirement::launch("npm"),
            Requirement::launch("node_modules"),
        ];
        if toggle.enabled()? {
            requires.push(Requirement::launch("watchexec"));
        }

        debug!(
            path = %project_path.display(),
            requires = requires.len(),
            "detected npm start application"
        );
        Ok(Detection::Detected(BuildPlan::requiring(requires)))
    }
}
