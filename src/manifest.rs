//! JSON route manifests.
//!
//! A manifest lists routes as `{ "key", "pattern", "payload" }` objects,
//! either as a bare array or under a top-level `routes` field:
//!
//! ```json
//! {
//!   "routes": [
//!     { "key": "GET", "pattern": "/users/:id", "payload": { "handler": "show_user" } },
//!     { "key": "GET", "pattern": "/files/*" }
//!   ]
//! }
//! ```
//!
//! A missing `payload` defaults to `null`.

use crate::error::{Result, RouterError};
use crate::router::{Router, RouterBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One route entry of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Dispatch key, e.g. an HTTP method
    pub key: String,
    /// Route pattern
    pub pattern: String,
    /// Arbitrary JSON attached to the route
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestDoc {
    List(Vec<RouteSpec>),
    Wrapped { routes: Vec<RouteSpec> },
}

/// Parses manifest text.
///
/// ```
/// let specs = reminist::manifest::from_str(r#"[{"key": "GET", "pattern": "/a"}]"#)?;
/// assert_eq!(specs[0].pattern, "/a");
/// assert!(specs[0].payload.is_null());
/// # Ok::<(), reminist::RouterError>(())
/// ```
pub fn from_str(text: &str) -> Result<Vec<RouteSpec>> {
    let doc: ManifestDoc = serde_json::from_str(text)?;
    Ok(match doc {
        ManifestDoc::List(routes) | ManifestDoc::Wrapped { routes } => routes,
    })
}

/// Reads and parses a manifest file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RouteSpec>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        RouterError::Manifest(format!("Failed to read {}: {}", path.display(), e))
    })?;
    from_str(&text)
}

/// Registers every spec into a router built from `builder`.
///
/// Stops at the first registration error, reported as
/// [`RouterError::ManifestRoute`] with the entry's position and key.
pub fn build_router(
    specs: Vec<RouteSpec>,
    builder: RouterBuilder<String, Value>,
) -> Result<Router<String, Value>> {
    let mut router = builder.build();
    for (index, spec) in specs.into_iter().enumerate() {
        let key = spec.key.clone();
        if let Err(err) = router.add(spec.key, &spec.pattern, spec.payload) {
            tracing::debug!(index, pattern = %spec.pattern, "manifest route rejected");
            return Err(RouterError::ManifestRoute {
                index,
                key,
                source: Box::new(err),
            });
        }
    }
    Ok(router)
}
