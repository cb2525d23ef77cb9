//! Live mirror of the traversal engine's descent.
//!
//! The tracker holds the path from the root to the current node together
//! with the pair of values compared at every depth. It also enforces the
//! leaf protocol: one verdict per leaf, none for interior nodes. Violations
//! are bugs in the driving engine and panic.

use std::fmt;

use cmpr_types::{Path, PathStep, Verdict};

/// The left ("before") and right ("after") values compared at one depth.
///
/// Either side may be absent, e.g. a map key present on only one side.
pub struct ValuePair<'a, V: ?Sized> {
    /// Left side.
    pub x: Option<&'a V>,
    /// Right side.
    pub y: Option<&'a V>,
}

impl<'a, V: ?Sized> ValuePair<'a, V> {
    /// Pair two optional values.
    pub fn new(x: Option<&'a V>, y: Option<&'a V>) -> Self {
        Self { x, y }
    }
}

impl<V: ?Sized> Clone for ValuePair<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for ValuePair<'_, V> {}

impl<V: ?Sized> fmt::Debug for ValuePair<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuePair")
            .field("x", &self.x.is_some())
            .field("y", &self.y.is_some())
            .finish()
    }
}

struct Frame<'a, V: ?Sized> {
    values: ValuePair<'a, V>,
    verdict: Option<Verdict>,
    has_children: bool,
}

/// Stack of path steps and value pairs, one entry per traversal depth.
pub struct PathTracker<'a, V: ?Sized> {
    path: Path,
    frames: Vec<Frame<'a, V>>,
}

impl<V: ?Sized> Default for PathTracker<'_, V> {
    fn default() -> Self {
        Self {
            path: Path::new(),
            frames: Vec::new(),
        }
    }
}

impl<'a, V: ?Sized> PathTracker<'a, V> {
    /// Create an empty tracker at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend one level.
    ///
    /// # Panics
    ///
    /// If the current node already received a verdict, since a leaf cannot
    /// have children.
    pub fn push_step(&mut self, step: PathStep, x: Option<&'a V>, y: Option<&'a V>) {
        if let Some(parent) = self.frames.last_mut() {
            if let Some(verdict) = parent.verdict {
                panic!(
                    "push_step({step}) below node {} which was already reported {verdict}",
                    self.path
                );
            }
            parent.has_children = true;
        }
        self.path.push(step);
        self.frames.push(Frame {
            values: ValuePair::new(x, y),
            verdict: None,
            has_children: false,
        });
    }

    /// Ascend one level.
    ///
    /// # Panics
    ///
    /// If the tracker is already at depth zero.
    pub fn pop_step(&mut self) {
        let (Some(_), Some(_)) = (self.frames.pop(), self.path.pop()) else {
            panic!("pop_step called at depth zero");
        };
    }

    /// Record the verdict for the current node and return its values.
    ///
    /// # Panics
    ///
    /// If no node is pushed, if the node already has a verdict, or if the
    /// node has children.
    pub fn settle_leaf(&mut self, verdict: Verdict) -> ValuePair<'a, V> {
        let path = &self.path;
        let Some(frame) = self.frames.last_mut() else {
            panic!("report({verdict}) called at depth zero");
        };
        if let Some(previous) = frame.verdict {
            panic!("report({verdict}) for {path} which was already reported {previous}");
        }
        if frame.has_children {
            panic!("report({verdict}) for interior node {path}");
        }
        frame.verdict = Some(verdict);
        frame.values
    }

    /// Steps from the root to the current node.
    pub fn current_path(&self) -> &Path {
        &self.path
    }

    /// Values at the current node, or `None` at depth zero.
    pub fn current_values(&self) -> Option<ValuePair<'a, V>> {
        self.frames.last().map(|frame| frame.values)
    }

    /// Current traversal depth.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl<V: ?Sized> fmt::Debug for PathTracker<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTracker")
            .field("path", &self.path)
            .field("depth", &self.frames.len())
            .finish()
    }
}
