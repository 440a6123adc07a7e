//! npm-start - detect phase for `npm start` applications
//!
//! This library implements the detection half of a buildpack for applications
//! launched through their `package.json` start script. Given a workspace
//! root, it resolves the project directory (monorepo-aware via
//! `BP_NODE_PROJECT_PATH`), inspects `package.json`, and either emits an
//! ordered build plan of launch-time requirements or reports why the
//! workspace does not qualify.
//!
//! # Core Concepts
//!
//! - **Detection**: the decision procedure deciding whether a workspace
//!   launches via `npm start`, producing a plan or the soft undetected
//!   outcome
//! - **Build Plan**: the ordered requirements (`node`, `npm`, `node_modules`,
//!   optionally `watchexec`) a later build phase must provision
//! - **Project Path Resolver**: the injected collaborator mapping a workspace
//!   root to the directory actually holding the manifest
//!
//! # Example Usage
//!
//! ```no_run
//! use npm_start::{DetectContext, Detection, Detector, ProjectPathResolverFromEnv};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let detector = Detector::new(ProjectPathResolverFromEnv);
//!     match detector.detect(DetectContext::new("/workspace"))? {
//!         Detection::Detected(plan) => {
//!             for requirement in &plan.requires {
//!                 println!("requires {}", requirement.name);
//!             }
//!         }
//!         Detection::Undetected => println!("not an npm start application"),
//!     }
//!     Ok(())
//! }
//! ```

// Public modules
pub mod detect;
pub mod manifest;
pub mod plan;
pub mod project_path;
pub mod toggle;
pub mod util;

// Re-export key types for convenient access
pub use detect::{DetectContext, DetectError, Detection, Detector, NO_START_SCRIPT_MESSAGE};
pub use manifest::{PackageJson, PackageScripts, MANIFEST_NAME};
pub use plan::{BuildPlan, Requirement};
pub use project_path::{ProjectPathResolver, ProjectPathResolverFromEnv, PROJECT_PATH_VAR};
pub use toggle::{InvalidToggleError, LiveReloadToggle, LIVE_RELOAD_VAR};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
