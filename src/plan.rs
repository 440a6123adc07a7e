//! Build plan data model
//!
//! A successful detection produces a [`BuildPlan`]: an ordered list of named
//! requirements the build phase must provision before the application can be
//! launched. Requirements carry a metadata mapping; in this buildpack the only
//! key is `"launch"`, marking the requirement as needed at launch time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named capability the build phase must provision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    pub name: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Requirement {
    /// A requirement needed at application launch (`{"launch": true}`).
    pub fn launch(name: &str) -> Self {
        let mut metadata = Map::new();
        metadata.insert("launch".to_string(), Value::Bool(true));
        Self {
            name: name.to_string(),
            metadata,
        }
    }

    /// Whether this requirement is flagged as needed at launch.
    pub fn is_launch(&self) -> bool {
        self.metadata.get("launch") == Some(&Value::Bool(true))
    }
}

/// Ordered set of requirements emitted by a successful detection. Order is
/// significant and preserved through serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildPlan {
    pub requires: Vec<Requirement>,
}

impl BuildPlan {
    pub fn requiring(requires: Vec<Requirement>) -> Self {
        Self { requires }
    }

    /// Names of the required capabilities, in plan order.
    pub fn names(&self) -> Vec<&str> {
        self.requires.iter().map(|r| r.name.as_str()).collect()
    }
}
