//! Live reload toggle
//!
//! `BP_LIVE_RELOAD_ENABLED` asks the buildpack to provision a file-watching
//! process supervisor so the application restarts on source changes. The raw
//! literal is captured once at the detection boundary and parsed explicitly
//! where the decision procedure needs it, rather than read from the
//! environment deep inside the logic.

use std::env;
use thiserror::Error;

/// Environment variable enabling the live reload requirement.
pub const LIVE_RELOAD_VAR: &str = "BP_LIVE_RELOAD_ENABLED";

/// The toggle was set to something that is not a boolean literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "failed to parse {} value {}: invalid boolean literal (accepted: true/false, t/f, 1/0)",
    LIVE_RELOAD_VAR,
    .value
)]
pub struct InvalidToggleError {
    pub value: String,
}

/// Raw toggle literal captured at the start of a detection call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveReloadToggle {
    raw: Option<String>,
}

impl LiveReloadToggle {
    /// Captures the current value of `BP_LIVE_RELOAD_ENABLED`.
    pub fn from_env() -> Self {
        Self {
            raw: env::var(LIVE_RELOAD_VAR).ok(),
        }
    }

    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            raw: Some(value.into()),
        }
    }

    pub fn unset() -> Self {
        Self { raw: None }
    }

    /// Whether live reload was requested. Unset and empty both mean disabled.
    pub fn enabled(&self) -> Result<bool, InvalidToggleError> {
        match self.raw.as_deref() {
            None | Some("") => Ok(false),
            Some(value) => parse_bool(value).ok_or_else(|| InvalidToggleError {
                value: value.to_string(),
            }),
        }
    }
}

/// Conservative boolean literal parsing: `true`/`false`, `t`/`f`, `1`/`0`,
/// case-insensitive. Spellings like `yes`/`no` are rejected.
fn parse_bool(literal: &str) -> Option<bool> {
    match literal.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}
