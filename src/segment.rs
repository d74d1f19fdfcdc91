//! Path segmentation and segment classification.
//!
//! Patterns and lookup paths are both split on `/` into segments. Each
//! pattern segment is classified once into a [`SegmentKind`]:
//!
//! | Segment       | Kind               | Parameter |
//! |---------------|--------------------|-----------|
//! | `:name`       | `Dynamic`          | `name`    |
//! | `[[...name]]` | `OptionalCatchAll` | `name`    |
//! | `[...name]`   | `CatchAll`         | `name`    |
//! | `[name]`      | `Dynamic`          | `name`    |
//! | `*`           | `Wildcard`         | `*`       |
//! | anything else | `Static`           | (none)    |
//!
//! # Examples
//!
//! ```
//! use reminist::segment::{classify, split, SegmentKind};
//!
//! assert_eq!(split("/docs/guide/"), vec!["docs", "guide"]);
//! assert!(split("/").is_empty());
//!
//! assert_eq!(classify(":id"), (SegmentKind::Dynamic, "id"));
//! assert_eq!(classify("[[...slug]]"), (SegmentKind::OptionalCatchAll, "slug"));
//! assert_eq!(classify("about"), (SegmentKind::Static, ""));
//! ```

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

/// Parameter name bound by a `*` segment.
pub const WILDCARD_PARAM: &str = "*";

/// Default number of distinct path strings kept by the segment cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Kind of a pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Literal text, matched exactly
    Static,
    /// `:name` or `[name]` - exactly one segment
    Dynamic,
    /// `[...name]` - one or more remaining segments
    CatchAll,
    /// `[[...name]]` - zero or more remaining segments
    OptionalCatchAll,
    /// `*` - one or more remaining segments, bound to `*`
    Wildcard,
}

impl SegmentKind {
    /// True for every kind except [`SegmentKind::Static`].
    #[inline]
    pub fn is_special(self) -> bool {
        self != SegmentKind::Static
    }

    /// True for kinds that consume the rest of the path.
    #[inline]
    pub fn is_catch_all(self) -> bool {
        matches!(
            self,
            SegmentKind::CatchAll | SegmentKind::OptionalCatchAll | SegmentKind::Wildcard
        )
    }

    /// Index of the node child slot holding this kind, in lookup order.
    /// Static segments live in the keyed map instead.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        match self {
            SegmentKind::Static => None,
            SegmentKind::Dynamic => Some(0),
            SegmentKind::CatchAll => Some(1),
            SegmentKind::OptionalCatchAll => Some(2),
            SegmentKind::Wildcard => Some(3),
        }
    }
}

/// Classifies raw segment text, returning its kind and parameter name.
///
/// Static segments have an empty parameter name.
pub fn classify(raw: &str) -> (SegmentKind, &str) {
    if let Some(name) = raw.strip_prefix(':') {
        (SegmentKind::Dynamic, name)
    } else if let Some(name) = raw.strip_prefix("[[...").and_then(|r| r.strip_suffix("]]")) {
        (SegmentKind::OptionalCatchAll, name)
    } else if let Some(name) = raw.strip_prefix("[...").and_then(|r| r.strip_suffix(']')) {
        (SegmentKind::CatchAll, name)
    } else if let Some(name) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        (SegmentKind::Dynamic, name)
    } else if raw == "*" {
        (SegmentKind::Wildcard, WILDCARD_PARAM)
    } else {
        (SegmentKind::Static, "")
    }
}

/// Splits a path into segments.
///
/// One leading and one trailing `/` are stripped before splitting, so
/// `/a/b`, `a/b` and `/a/b/` all yield `["a", "b"]`. The root path yields
/// no segments. Interior empty segments (`/a//b`) are kept.
pub fn split(path: &str) -> Vec<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(str::to_owned).collect()
}

/// Rebuilds the canonical `/a/b` form of a segment list.
pub fn canonical(segments: &[String]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 1).sum::<usize>().max(1));
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Shared, immutable segment list handed out by the [`Segmenter`].
pub type Segments = Arc<[String]>;

/// Memoizing path splitter.
///
/// Results are cached by the exact input string in a bounded LRU, so `/a`
/// and `/a/` occupy separate entries. A capacity of zero disables caching.
/// The cache sits behind a mutex so lookups through `&self` can fill it.
pub struct Segmenter {
    cache: Option<Mutex<LruCache<String, Segments>>>,
}

impl Segmenter {
    /// Creates a segmenter caching up to `capacity` distinct path strings.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Creates a segmenter that never caches.
    pub fn uncached() -> Self {
        Self { cache: None }
    }

    /// Splits `path`, serving repeated inputs from the cache.
    pub fn segment(&self, path: &str) -> Segments {
        let Some(cache) = &self.cache else {
            return split(path).into();
        };

        let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = cache.get(path) {
            return Arc::clone(hit);
        }

        tracing::trace!(path, "segment cache miss");
        let segments: Segments = split(path).into();
        cache.put(path.to_owned(), Arc::clone(&segments));
        segments
    }

    /// Number of cached path strings.
    pub fn len(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |c| c.lock().unwrap_or_else(PoisonError::into_inner).len())
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached path strings (0 when caching is disabled).
    pub fn capacity(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |c| c.lock().unwrap_or_else(PoisonError::into_inner).cap().get())
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("cached", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
