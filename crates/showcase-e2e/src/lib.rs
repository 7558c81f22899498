//! # showcase-e2e
//!
//! Behaviour-driven scenarios for the showcase marketing site.
//!
//! ## Architecture
//!
//! - **config**: `SiteConfig` from defaults, `site-e2e.toml` and
//!   `SITE_E2E_*` variables
//! - **logger**: tracing subscriber for the scenario runner
//! - **checks**: the assertions behind `Then` steps, written against
//!   `DomQuery`
//! - **scenario**: one browser and page per scenario, set up and torn down
//!   by the runner's hooks
//! - **util**: test data, URL helpers and comparison assertions
//!
//! The Gherkin step definitions live in the `site` test target
//! (`tests/site`), which drives the `.feature` files under `tests/features`.
//! Browser scenarios only run with `SITE_E2E=1`:
//!
//! ```text
//! SITE_E2E=1 cargo test -p showcase-e2e --test site
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod checks;
pub mod config;
pub mod error;
pub mod logger;
pub mod scenario;
pub mod util;

pub use checks::PageChecks;
pub use config::{env_var, suite_enabled, Route, SiteConfig, TestUser, UnknownRoute};
pub use error::{CheckError, CheckResult};
pub use scenario::{within_budget, ScenarioContext};
