//! The push/report/pop protocol and the default reporter.

use std::fmt;

use cmpr_format::{ReportValue, StandardFormatter, ValueFormatter};
use cmpr_types::{Path, PathStep, Verdict};

use crate::accumulator::{DiffAccumulator, DiffRecord};
use crate::config::ReporterConfig;
use crate::tracker::PathTracker;

/// Observer of a comparison traversal.
///
/// The engine calls [`push_step`](Self::push_step) before descending into
/// any node, [`report`](Self::report) exactly once on each leaf, and
/// [`pop_step`](Self::pop_step) once for every push after the node's
/// descendants are done. The whole comparison is bracketed by one push/pop
/// pair carrying a [`PathStep::Root`] step, so a root that is itself a leaf
/// is still reported inside it.
///
/// Values are borrowed for `'a`, which must cover the whole traversal.
pub trait Reporter<'a, V: ?Sized> {
    /// Descend into the sub-values `x` and `y` reached through `step`.
    fn push_step(&mut self, step: PathStep, x: Option<&'a V>, y: Option<&'a V>);

    /// Judge the current leaf.
    fn report(&mut self, verdict: Verdict);

    /// Ascend back to the parent node.
    fn pop_step(&mut self);
}

/// Reporter that renders every unequal leaf into a bounded text report.
pub struct DefaultReporter<'a, V: ?Sized, F = StandardFormatter> {
    tracker: PathTracker<'a, V>,
    diffs: DiffAccumulator,
    formatter: F,
}

impl<'a, V: ReportValue + ?Sized> DefaultReporter<'a, V> {
    /// Reporter using [`StandardFormatter`] and the default limits.
    pub fn standard() -> Self {
        Self::new(StandardFormatter)
    }
}

impl<'a, V: ?Sized, F> DefaultReporter<'a, V, F> {
    /// Reporter with the given formatter and the default limits.
    pub fn new(formatter: F) -> Self {
        Self::with_config(formatter, ReporterConfig::default())
    }

    /// Reporter with the given formatter and limits.
    pub fn with_config(formatter: F, config: ReporterConfig) -> Self {
        Self {
            tracker: PathTracker::new(),
            diffs: DiffAccumulator::with_config(config),
            formatter,
        }
    }

    /// The report so far. Calling this mid-traversal yields the prefix
    /// accumulated up to now.
    pub fn final_report(&self) -> String {
        self.diffs.final_report()
    }

    /// Number of unequal leaves reported.
    pub fn total_diffs(&self) -> usize {
        self.diffs.total_diffs()
    }

    /// Number of differences rendered into the report.
    pub fn stored_diffs(&self) -> usize {
        self.diffs.stored_diffs()
    }

    /// Returns `true` if the report dropped any difference.
    pub fn is_truncated(&self) -> bool {
        self.diffs.is_truncated()
    }

    /// Rendered differences, in traversal order.
    pub fn records(&self) -> &[DiffRecord] {
        self.diffs.records()
    }

    /// Current traversal depth.
    pub fn depth(&self) -> usize {
        self.tracker.depth()
    }

    /// Steps from the root to the current node.
    pub fn current_path(&self) -> &Path {
        self.tracker.current_path()
    }

    /// Consume the reporter, keeping only the accumulated differences.
    pub fn into_diffs(self) -> DiffAccumulator {
        self.diffs
    }
}

impl<'a, V, F> Reporter<'a, V> for DefaultReporter<'a, V, F>
where
    V: ?Sized,
    F: ValueFormatter<V>,
{
    fn push_step(&mut self, step: PathStep, x: Option<&'a V>, y: Option<&'a V>) {
        self.tracker.push_step(step, x, y);
    }

    fn report(&mut self, verdict: Verdict) {
        let values = self.tracker.settle_leaf(verdict);
        if verdict.is_unequal() {
            self.diffs.record(
                self.tracker.current_path(),
                values.x,
                values.y,
                &self.formatter,
            );
        }
    }

    fn pop_step(&mut self) {
        self.tracker.pop_step();
    }
}

impl<V: ?Sized, F> fmt::Display for DefaultReporter<'_, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diffs, f)
    }
}

impl<V: ?Sized, F> fmt::Debug for DefaultReporter<'_, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultReporter")
            .field("tracker", &self.tracker)
            .field("diffs", &self.diffs)
            .finish_non_exhaustive()
    }
}
