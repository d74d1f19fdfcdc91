//! Public routing surface.
//!
//! A [`Router`] keeps one [`RouteTable`] per dispatch key (typically an
//! HTTP method) and a shared, bounded segment cache.
//!
//! # Examples
//!
//! ```
//! use reminist::Router;
//!
//! let mut router = Router::new();
//! router.add("GET", "/users/:id", "show_user")?;
//! router.add("GET", "/docs/[...slug]", "docs")?;
//!
//! let m = router.find(&"GET", "/users/42").unwrap();
//! assert_eq!(*m.payload(), "show_user");
//! assert_eq!(m.param("id"), Some("42"));
//!
//! assert!(router.has(&"GET", "/docs/a/b"));
//! assert!(!router.has(&"POST", "/docs/a/b"));
//! # Ok::<(), reminist::RouterError>(())
//! ```
//!
//! # Concurrency
//!
//! `add` and `delete` take `&mut self`; `find` and `has` take `&self` and
//! only touch the segment cache, which is behind a mutex. Registering
//! routes at startup and then sharing the router (e.g. in an `Arc`) across
//! threads for lookups needs no further locking.

use crate::error::Result;
use crate::node::Node;
use crate::segment::{Segmenter, DEFAULT_CACHE_CAPACITY};
use crate::table::{Match, RouteTable};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Path router keyed by a dispatch discriminator `K`, storing payloads `T`.
pub struct Router<K, T> {
    tables: FxHashMap<K, RouteTable<T>>,
    segmenter: Segmenter,
}

impl<K: Eq + Hash, T> Router<K, T> {
    /// Creates an empty router with the default segment cache.
    pub fn new() -> Self {
        RouterBuilder::new().build()
    }

    /// Creates a router with empty tables for `keys`.
    pub fn with_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        RouterBuilder::new().keys(keys).build()
    }

    /// Starts a [`RouterBuilder`].
    pub fn builder() -> RouterBuilder<K, T> {
        RouterBuilder::new()
    }

    /// Registers `payload` under `key` for `pattern`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Conflict`](crate::RouterError::Conflict) if a
    ///   parameter slot on the way is bound to a different name
    /// - [`RouterError::DuplicateRoute`](crate::RouterError::DuplicateRoute)
    ///   if the pattern is already registered
    /// - [`RouterError::InvalidPattern`](crate::RouterError::InvalidPattern)
    ///   if a catch-all is not the final segment
    ///
    /// The router is unchanged when an error is returned.
    pub fn add(&mut self, key: K, pattern: &str, payload: T) -> Result<()> {
        let segments = self.segmenter.segment(pattern);
        self.tables
            .entry(key)
            .or_default()
            .add(pattern, &segments, payload)?;
        tracing::debug!(pattern, "route registered");
        Ok(())
    }

    /// Finds the route matching `path` under `key`.
    ///
    /// Literal routes are answered from the exact-match index without
    /// splitting the path. Returns `None` when nothing matches.
    pub fn find<Q>(&self, key: &Q, path: &str) -> Option<Match<'_, T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let table = self.tables.get(key)?;
        if let Some(hit) = table.find_exact(path) {
            return Some(hit);
        }
        let segments = self.segmenter.segment(path);
        table.find_segments(path, &segments)
    }

    /// Returns true if a route under `key` matches `path`.
    pub fn has<Q>(&self, key: &Q, path: &str) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.find(key, path).is_some()
    }

    /// Removes the route registered at `path` under `key`, returning its payload.
    ///
    /// `path` names the registration itself: a literal route by its path,
    /// a parameterised one by its pattern text (`/users/:id`). A request
    /// path such as `/users/1` never removes `/users/:id`. Nodes left with
    /// neither a route nor children are pruned.
    pub fn remove<Q>(&mut self, key: &Q, path: &str) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let segments = self.segmenter.segment(path);
        let payload = self.tables.get_mut(key)?.delete(path, &segments)?;
        tracing::debug!(path, "route deleted");
        Some(payload)
    }

    /// Removes the route registered at `path` under `key`.
    ///
    /// Returns false if no such route was registered.
    pub fn delete<Q>(&mut self, key: &Q, path: &str) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove(key, path).is_some()
    }

    /// Trie root for `key`, if the key has a table.
    pub fn root<Q>(&self, key: &Q) -> Option<&Node<T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.tables.get(key).map(RouteTable::root)
    }

    /// Route table for `key`, if the key has one.
    pub fn table<Q>(&self, key: &Q) -> Option<&RouteTable<T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.tables.get(key)
    }

    /// Patterns registered under `key`, sorted.
    pub fn routes<Q>(&self, key: &Q) -> Vec<&str>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.tables
            .get(key)
            .map(RouteTable::patterns)
            .unwrap_or_default()
    }

    /// Dispatch keys that have a table.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.tables.keys()
    }

    /// Number of routes across all keys.
    pub fn len(&self) -> usize {
        self.tables.values().map(RouteTable::len).sum()
    }

    /// Returns true if no routes are registered under any key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of path strings held by the segment cache.
    pub fn cache_len(&self) -> usize {
        self.segmenter.len()
    }

    /// Drops every entry from the segment cache.
    pub fn clear_cache(&self) {
        self.segmenter.clear();
    }
}

impl<K: Eq + Hash, T> Default for Router<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for Router<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("keys", &self.tables.keys().collect::<Vec<_>>())
            .field("routes", &self.tables.values().map(RouteTable::len).sum::<usize>())
            .field("segmenter", &self.segmenter)
            .finish()
    }
}

/// Fluent configuration for a [`Router`].
///
/// ```
/// use reminist::Router;
///
/// let router: Router<&str, u32> = Router::builder()
///     .keys(["GET", "POST"])
///     .cache_capacity(1_000)
///     .build();
/// assert_eq!(router.keys().count(), 2);
/// ```
pub struct RouterBuilder<K, T> {
    cache_capacity: usize,
    keys: Vec<K>,
    payload: PhantomData<fn() -> T>,
}

impl<K: Eq + Hash, T> RouterBuilder<K, T> {
    /// Defaults: [`DEFAULT_CACHE_CAPACITY`] cached paths, no pre-declared keys.
    pub fn new() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            keys: Vec::new(),
            payload: PhantomData,
        }
    }

    /// Caps the segment cache at `capacity` distinct path strings.
    /// Zero disables caching.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Disables the segment cache.
    pub fn no_cache(self) -> Self {
        self.cache_capacity(0)
    }

    /// Pre-creates empty tables for `keys`.
    pub fn keys<I: IntoIterator<Item = K>>(mut self, keys: I) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Builds the router.
    pub fn build(self) -> Router<K, T> {
        let tables = self
            .keys
            .into_iter()
            .map(|key| (key, RouteTable::default()))
            .collect();
        Router {
            tables,
            segmenter: Segmenter::new(self.cache_capacity),
        }
    }
}

impl<K: Eq + Hash, T> Default for RouterBuilder<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for RouterBuilder<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("cache_capacity", &self.cache_capacity)
            .field("keys", &self.keys)
            .finish()
    }
}
