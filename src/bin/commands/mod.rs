pub mod check_cmd;
pub mod lookup_cmd;
pub mod routes_cmd;

pub use check_cmd::cmd_check;
pub use lookup_cmd::cmd_lookup;
pub use routes_cmd::cmd_routes;

use anyhow::{Context, Result};
use reminist::{manifest, Router};
use serde_json::Value;
use std::path::Path;

/// Loads a manifest and registers every route in it.
pub(crate) fn load_router(path: &Path) -> Result<Router<String, Value>> {
    let specs = manifest::load(path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;
    manifest::build_router(specs, Router::builder())
        .with_context(|| format!("Failed to register routes from: {}", path.display()))
}
