/// Error types for the reminist library
use std::fmt;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, RouterError>;

/// Main error type for route registration and manifest loading
///
/// Lookups never fail: a missing route is reported as `None` / `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A parameter slot at this trie position is already bound to a
    /// different parameter name
    Conflict {
        /// Pattern being registered
        pattern: String,
        /// A registered pattern that goes through the competing slot
        existing: String,
    },

    /// The pattern resolves to a node that is already an endpoint
    DuplicateRoute {
        /// Pattern being registered
        pattern: String,
    },

    /// The pattern can never be matched as written
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// Route manifest could not be read or decoded
    Manifest(String),

    /// A manifest entry was rejected during registration
    ManifestRoute {
        /// Zero-based position of the entry in the manifest
        index: usize,
        /// Dispatch key of the entry
        key: String,
        /// Registration error for the entry
        source: Box<RouterError>,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::Conflict { pattern, existing } => write!(
                f,
                "There are two conflicting routes: {} and {} use different dynamic parameters.",
                pattern, existing
            ),
            RouterError::DuplicateRoute { pattern } => write!(
                f,
                "Unable to add path '{}' because a final node already exists",
                pattern
            ),
            RouterError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{}': {}", pattern, reason)
            }
            RouterError::Manifest(msg) => write!(f, "Manifest error: {}", msg),
            RouterError::ManifestRoute { index, key, source } => {
                write!(f, "Manifest route {} ({}): {}", index, key, source)
            }
        }
    }
}

impl std::error::Error for RouterError {}

impl From<std::io::Error> for RouterError {
    fn from(err: std::io::Error) -> Self {
        RouterError::Manifest(err.to_string())
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::Manifest(err.to_string())
    }
}
