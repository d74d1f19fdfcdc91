//! Trie vertex.
//!
//! A [`Node`] owns its children: literal children in a map keyed by their
//! text, and at most one child per special kind in a fixed slot array
//! ordered by lookup priority (dynamic, catch-all, optional catch-all,
//! wildcard). `child_count` and `non_static_child_count` are updated by
//! every insertion and removal so lookups can reject a branch without
//! probing the slots.

use crate::segment::{classify, SegmentKind};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A registered route: the pattern text it was added with and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<T> {
    pattern: String,
    payload: T,
}

impl<T> Endpoint<T> {
    pub(crate) fn new(pattern: &str, payload: T) -> Self {
        Self {
            pattern: pattern.to_owned(),
            payload,
        }
    }

    /// Pattern text passed to `add`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Payload passed to `add`.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn into_payload(self) -> T {
        self.payload
    }
}

/// One vertex of a route trie.
#[derive(Debug, Clone)]
pub struct Node<T> {
    raw: String,
    kind: SegmentKind,
    param_name: String,
    endpoint: Option<Endpoint<T>>,
    static_children: FxHashMap<String, Node<T>>,
    special_children: [Option<Box<Node<T>>>; 4],
    child_count: usize,
    non_static_child_count: usize,
}

impl<T> Node<T> {
    /// Creates a detached node for `raw` segment text.
    pub(crate) fn new(raw: &str) -> Self {
        let (kind, param_name) = classify(raw);
        Self {
            raw: raw.to_owned(),
            kind,
            param_name: param_name.to_owned(),
            endpoint: None,
            static_children: FxHashMap::default(),
            special_children: [None, None, None, None],
            child_count: 0,
            non_static_child_count: 0,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new("/")
    }

    /// Segment text this node was created from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Kind derived from [`raw`](Self::raw).
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Parameter bound by this node; empty for static nodes.
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// True when a route terminates here.
    pub fn is_endpoint(&self) -> bool {
        self.endpoint.is_some()
    }

    /// The route terminating here, if any.
    pub fn endpoint(&self) -> Option<&Endpoint<T>> {
        self.endpoint.as_ref()
    }

    /// Payload of the route terminating here, if any.
    pub fn payload(&self) -> Option<&T> {
        self.endpoint.as_ref().map(Endpoint::payload)
    }

    /// Number of children of every kind.
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Number of occupied special slots.
    pub fn non_static_child_count(&self) -> usize {
        self.non_static_child_count
    }

    /// Literal child with exactly this text.
    pub fn static_child(&self, name: &str) -> Option<&Node<T>> {
        self.static_children.get(name)
    }

    /// Child occupying the slot for `kind`; always `None` for `Static`.
    pub fn special_child(&self, kind: SegmentKind) -> Option<&Node<T>> {
        kind.slot().and_then(|i| self.special_children[i].as_deref())
    }

    /// Child reached by `raw` pattern text: the literal child for static
    /// text, the slot of the same kind otherwise.
    pub fn child(&self, raw: &str) -> Option<&Node<T>> {
        match classify(raw).0.slot() {
            None => self.static_children.get(raw),
            Some(i) => self.special_children[i].as_deref(),
        }
    }

    pub(crate) fn child_mut(&mut self, raw: &str) -> Option<&mut Node<T>> {
        match classify(raw).0.slot() {
            None => self.static_children.get_mut(raw),
            Some(i) => self.special_children[i].as_deref_mut(),
        }
    }

    /// Returns the child for `raw`, creating and attaching it if absent.
    pub(crate) fn child_or_insert(&mut self, raw: &str) -> &mut Node<T> {
        match classify(raw).0.slot() {
            None => match self.static_children.entry(raw.to_owned()) {
                Entry::Occupied(child) => child.into_mut(),
                Entry::Vacant(slot) => {
                    self.child_count += 1;
                    slot.insert(Node::new(raw))
                }
            },
            Some(i) => {
                let slot = &mut self.special_children[i];
                if slot.is_none() {
                    self.child_count += 1;
                    self.non_static_child_count += 1;
                }
                &mut **slot.get_or_insert_with(|| Box::new(Node::new(raw)))
            }
        }
    }

    /// Detaches the child reached by `raw`, keeping the counters in step.
    pub(crate) fn remove_child(&mut self, raw: &str) -> Option<Node<T>> {
        let kind = classify(raw).0;
        let removed = match kind.slot() {
            None => self.static_children.remove(raw),
            Some(i) => self.special_children[i].take().map(|child| *child),
        };
        if removed.is_some() {
            self.child_count -= 1;
            if kind.is_special() {
                self.non_static_child_count -= 1;
            }
        }
        removed
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: Endpoint<T>) {
        self.endpoint = Some(endpoint);
    }

    pub(crate) fn take_endpoint(&mut self) -> Option<Endpoint<T>> {
        self.endpoint.take()
    }

    /// Appends the pattern of every endpoint in this subtree.
    pub(crate) fn collect_patterns<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(endpoint) = &self.endpoint {
            out.push(endpoint.pattern());
        }
        for child in self.static_children.values() {
            child.collect_patterns(out);
        }
        for child in self.special_children.iter().flatten() {
            child.collect_patterns(out);
        }
    }

    /// Smallest pattern still registered in this subtree.
    pub(crate) fn first_pattern(&self) -> Option<&str> {
        let mut patterns = Vec::new();
        self.collect_patterns(&mut patterns);
        patterns.into_iter().min()
    }
}
