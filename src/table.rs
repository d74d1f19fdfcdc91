//! Per-key route table.
//!
//! Fully literal patterns never enter the trie: they are stored in an
//! exact-match index keyed by their canonical `/a/b` form and answered in
//! O(1). Patterns with at least one special segment are inserted into the
//! trie rooted at [`RouteTable::root`].

use crate::error::{Result, RouterError};
use crate::node::{Endpoint, Node};
use crate::segment::{canonical, classify, SegmentKind};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Lookup order for the slots that consume the rest of the path.
const CATCH_ALL_ORDER: [SegmentKind; 3] = [
    SegmentKind::CatchAll,
    SegmentKind::OptionalCatchAll,
    SegmentKind::Wildcard,
];

/// True when `path` is already in the form [`canonical`] would produce.
fn is_canonical(path: &str) -> bool {
    path == "/" || (path.starts_with('/') && !path.ends_with('/'))
}

/// A successful lookup: the endpoint plus the parameters extracted on the way.
#[derive(Debug, Clone)]
pub struct Match<'a, T> {
    endpoint: &'a Endpoint<T>,
    params: HashMap<String, String>,
}

impl<'a, T> Match<'a, T> {
    fn new(endpoint: &'a Endpoint<T>, params: HashMap<String, String>) -> Self {
        Self { endpoint, params }
    }

    /// Payload registered with the matching pattern.
    pub fn payload(&self) -> &'a T {
        self.endpoint.payload()
    }

    /// The matching pattern as it was passed to `add`.
    pub fn pattern(&self) -> &'a str {
        self.endpoint.pattern()
    }

    /// Extracted parameters; empty for literal routes.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Value bound to parameter `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Consumes the match, returning the parameters.
    pub fn into_params(self) -> HashMap<String, String> {
        self.params
    }
}

/// Route trie plus exact-match index for one dispatch key.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    root: Node<T>,
    exact: FxHashMap<String, Endpoint<T>>,
    trie_routes: usize,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            root: Node::root(),
            exact: FxHashMap::default(),
            trie_routes: 0,
        }
    }
}

impl<T> RouteTable<T> {
    /// Root of the trie holding parameterised routes.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.exact.len() + self.trie_routes
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Patterns of every registered route, sorted.
    pub fn patterns(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.exact.values().map(Endpoint::pattern).collect();
        self.root.collect_patterns(&mut out);
        out.sort_unstable();
        out
    }

    /// Registers `pattern`, already split into `segments`.
    pub(crate) fn add(&mut self, pattern: &str, segments: &[String], payload: T) -> Result<()> {
        let kinds: Vec<SegmentKind> = segments.iter().map(|s| classify(s).0).collect();

        if kinds.iter().all(|kind| !kind.is_special()) {
            return match self.exact.entry(canonical(segments)) {
                Entry::Occupied(_) => Err(RouterError::DuplicateRoute {
                    pattern: pattern.to_owned(),
                }),
                Entry::Vacant(slot) => {
                    slot.insert(Endpoint::new(pattern, payload));
                    Ok(())
                }
            };
        }

        if let Some(pos) = kinds.iter().position(|kind| kind.is_catch_all()) {
            if pos + 1 != segments.len() {
                return Err(RouterError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    reason: format!("catch-all segment '{}' must be last", segments[pos]),
                });
            }
        }

        // Check every slot before touching the trie so a rejected pattern
        // leaves no intermediate nodes behind.
        let mut probe = Some(&self.root);
        for (segment, kind) in segments.iter().zip(&kinds) {
            let Some(node) = probe else { break };
            if kind.is_special() {
                if let Some(existing) = node.special_child(*kind) {
                    if existing.param_name() != classify(segment).1 {
                        return Err(RouterError::Conflict {
                            pattern: pattern.to_owned(),
                            existing: existing
                                .first_pattern()
                                .unwrap_or(existing.raw())
                                .to_owned(),
                        });
                    }
                }
            }
            probe = node.child(segment);
        }
        if probe.is_some_and(Node::is_endpoint) {
            return Err(RouterError::DuplicateRoute {
                pattern: pattern.to_owned(),
            });
        }

        let mut current = &mut self.root;
        for segment in segments {
            current = current.child_or_insert(segment);
        }
        current.set_endpoint(Endpoint::new(pattern, payload));
        self.trie_routes += 1;
        Ok(())
    }

    /// Probes the exact-match index with the literal path string.
    pub(crate) fn find_exact(&self, path: &str) -> Option<Match<'_, T>> {
        self.exact
            .get(path)
            .map(|endpoint| Match::new(endpoint, HashMap::new()))
    }

    /// Resolves a path that missed the literal probe in [`find_exact`](Self::find_exact).
    pub(crate) fn find_segments(&self, path: &str, segments: &[String]) -> Option<Match<'_, T>> {
        if !is_canonical(path) {
            if let Some(hit) = self.find_exact(&canonical(segments)) {
                return Some(hit);
            }
        }

        let mut params = HashMap::new();
        let mut current = &self.root;

        for (i, segment) in segments.iter().enumerate() {
            if let Some(next) = current.static_child(segment) {
                current = next;
                continue;
            }

            if current.non_static_child_count() == 0 {
                return None;
            }

            if let Some(next) = current.special_child(SegmentKind::Dynamic) {
                params.insert(next.param_name().to_owned(), segment.clone());
                current = next;
                continue;
            }

            let leaf = CATCH_ALL_ORDER
                .iter()
                .find_map(|kind| current.special_child(*kind))?;
            params.insert(leaf.param_name().to_owned(), segments[i..].join("/"));
            return leaf.endpoint().map(|endpoint| Match::new(endpoint, params));
        }

        if let Some(endpoint) = current.endpoint() {
            return Some(Match::new(endpoint, params));
        }

        // `/gallery` matches `/gallery/[[...slug]]` with an empty slug
        let optional = current.special_child(SegmentKind::OptionalCatchAll)?;
        let endpoint = optional.endpoint()?;
        params.insert(optional.param_name().to_owned(), String::new());
        Some(Match::new(endpoint, params))
    }

    /// Removes the route registered at `path` and prunes nodes left with
    /// neither an endpoint nor children.
    ///
    /// Literal segments follow static children only; special segments
    /// follow the slot of the same kind and parameter name, so a
    /// parameterised route is deleted by its own pattern text.
    pub(crate) fn delete(&mut self, path: &str, segments: &[String]) -> Option<T> {
        if let Some(endpoint) = self.exact.remove(path) {
            return Some(endpoint.into_payload());
        }
        if !is_canonical(path) {
            if let Some(endpoint) = self.exact.remove(&canonical(segments)) {
                return Some(endpoint.into_payload());
            }
        }

        // Ancestor stack below the root: (is_endpoint, child_count) per node
        let mut stack: Vec<(bool, usize)> = Vec::with_capacity(segments.len());
        let mut current = &self.root;
        for segment in segments {
            let (kind, name) = classify(segment);
            current = match kind {
                SegmentKind::Static => current.static_child(segment)?,
                _ => current
                    .special_child(kind)
                    .filter(|child| child.param_name() == name)?,
            };
            stack.push((current.is_endpoint(), current.child_count()));
        }

        if !current.is_endpoint() || stack.is_empty() {
            return None;
        }

        // Walk up from the target: a node goes once it is neither an
        // endpoint nor the parent of anything that stays.
        let mut cut = None;
        for (depth, &(is_endpoint, child_count)) in stack.iter().enumerate().rev() {
            let is_target = depth + 1 == stack.len();
            // Every node above the target is losing the child just below it
            let remaining = child_count - usize::from(!is_target);
            if remaining > 0 || (!is_target && is_endpoint) {
                break;
            }
            cut = Some(depth);
        }

        let mut target = &mut self.root;
        for segment in segments {
            target = target.child_mut(segment)?;
        }
        let endpoint = target.take_endpoint()?;
        self.trie_routes -= 1;

        if let Some(depth) = cut {
            let mut parent = &mut self.root;
            for segment in &segments[..depth] {
                parent = parent.child_mut(segment)?;
            }
            parent.remove_child(&segments[depth]);
            tracing::debug!(
                pattern = endpoint.pattern(),
                pruned = segments.len() - depth,
                "pruned empty route nodes"
            );
        }

        Some(endpoint.into_payload())
    }
}
