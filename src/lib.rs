//! Reminist - Segment Trie Router
//!
//! Reminist maps route patterns to payloads per dispatch key (for example an
//! HTTP method) and resolves concrete paths back to a payload plus the
//! parameters extracted from the path. It is the routing core of a request
//! dispatcher; accepting connections and invoking handlers is left to the
//! caller.
//!
//! # Quick Start
//!
//! ```rust
//! use reminist::Router;
//!
//! let mut router = Router::new();
//! router.add("GET", "/", "home")?;
//! router.add("GET", "/users/:id", "user")?;
//! router.add("GET", "/gallery/[[...slug]]", "gallery")?;
//! router.add("GET", "/files/*", "files")?;
//!
//! let m = router.find(&"GET", "/users/42").unwrap();
//! assert_eq!(*m.payload(), "user");
//! assert_eq!(m.param("id"), Some("42"));
//!
//! let m = router.find(&"GET", "/gallery").unwrap();
//! assert_eq!(m.param("slug"), Some(""));
//!
//! let m = router.find(&"GET", "/files/a/b.jpg").unwrap();
//! assert_eq!(m.param("*"), Some("a/b.jpg"));
//!
//! assert!(router.delete(&"GET", "/users/:id"));
//! assert!(!router.has(&"GET", "/users/42"));
//! # Ok::<(), reminist::RouterError>(())
//! ```
//!
//! # Pattern Syntax
//!
//! | Segment       | Matches                                                  |
//! |---------------|----------------------------------------------------------|
//! | `text`        | exactly `text`                                           |
//! | `:name`       | one segment, bound to `name`                             |
//! | `[name]`      | one segment, bound to `name`                             |
//! | `[...name]`   | all remaining segments joined by `/`, bound to `name`    |
//! | `[[...name]]` | like `[...name]`, and also the bare prefix (`name = ""`) |
//! | `*`           | all remaining segments, bound to `*`                     |
//!
//! # Architecture
//!
//! ```text
//! Router ──► RouteTable (per key) ──► exact-match index  (literal routes, O(1))
//!    │                           └──► Node trie          (parameterised routes)
//!    └─────► Segmenter (bounded LRU of split paths)
//! ```
//!
//! Lookups prefer a literal child, then the dynamic slot, then the
//! catch-all, optional catch-all and wildcard slots. Catch-alls are leaves:
//! once one is taken the rest of the path is consumed.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for route registration
pub mod error;
/// JSON route manifests
pub mod manifest;
/// Trie vertices
pub mod node;
pub mod router;
pub mod segment;
/// Per-key route tables and lookup results
pub mod table;

pub use crate::error::{Result, RouterError};
pub use crate::node::{Endpoint, Node};
pub use crate::router::{Router, RouterBuilder};
pub use crate::segment::{SegmentKind, Segmenter, DEFAULT_CACHE_CAPACITY};
pub use crate::table::{Match, RouteTable};

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
