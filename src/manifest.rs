//! package.json manifest model
//!
//! Only the subset relevant to detection is modeled: the `scripts` object and
//! its `start`, `prestart`, and `poststart` entries. `prestart`/`poststart`
//! are parsed for round-trip completeness but never influence the detection
//! decision. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Manifest filename looked up inside the resolved project directory.
pub const MANIFEST_NAME: &str = "package.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackageScripts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prestart: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poststart: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackageJson {
    #[serde(default)]
    pub scripts: PackageScripts,
}

impl PackageJson {
    /// Whether the manifest declares a usable start script. An empty string
    /// counts as absent.
    pub fn has_start_script(&self) -> bool {
        self.scripts
            .start
            .as_deref()
            .map_or(false, |script| !script.is_empty())
    }
}
