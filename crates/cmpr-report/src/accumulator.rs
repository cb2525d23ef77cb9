//! Bounded accumulation of rendered differences.
//!
//! Every unequal leaf is tallied. Its rendering is stored only while the
//! stored text is under both the byte and line limits of the
//! [`ReporterConfig`]; once either limit is reached the accumulator latches
//! and only keeps counting.

use std::fmt;

use cmpr_format::{FormatMode, ValueFormatter};
use cmpr_types::Path;
use tracing::{debug, trace};

use crate::config::ReporterConfig;

/// The rendering of one unequal leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffRecord {
    /// The rendered path to the leaf.
    pub path: String,
    /// Rendering of the left value.
    pub before: String,
    /// Rendering of the right value.
    pub after: String,
    /// The mode both renderings were produced with.
    pub mode: FormatMode,
}

impl DiffRecord {
    /// Render a leaf pair.
    ///
    /// Both sides are rendered in [`FormatMode::Friendly`] first. If that
    /// produces identical text, both are re-rendered in
    /// [`FormatMode::ExactType`] so the entry shows what actually differs.
    pub fn render<V, F>(path: &Path, x: Option<&V>, y: Option<&V>, formatter: &F) -> Self
    where
        V: ?Sized,
        F: ValueFormatter<V> + ?Sized,
    {
        let mut mode = FormatMode::Friendly;
        let mut before = formatter.format(x, mode);
        let mut after = formatter.format(y, mode);
        if before == after {
            mode = FormatMode::ExactType;
            before = formatter.format(x, mode);
            after = formatter.format(y, mode);
        }
        Self {
            path: path.to_string(),
            before,
            after,
            mode,
        }
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\n\t-: {}\n\t+: {}\n",
            self.path, self.before, self.after
        )
    }
}

/// Running tally and bounded storage of rendered differences.
#[derive(Clone, Debug, Default)]
pub struct DiffAccumulator {
    config: ReporterConfig,
    records: Vec<DiffRecord>,
    total: usize,
    bytes: usize,
    lines: usize,
}

impl DiffAccumulator {
    /// Create an accumulator with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with explicit limits.
    pub fn with_config(config: ReporterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Tally one unequal leaf and store its rendering if there is room.
    pub fn record<V, F>(&mut self, path: &Path, x: Option<&V>, y: Option<&V>, formatter: &F)
    where
        V: ?Sized,
        F: ValueFormatter<V> + ?Sized,
    {
        self.total += 1;
        if !self.has_room() {
            return;
        }
        self.store(DiffRecord::render(path, x, y, formatter));
    }

    fn store(&mut self, record: DiffRecord) {
        let text = record.to_string();
        self.bytes += text.len();
        self.lines += text.matches('\n').count();
        trace!(path = %record.path, mode = %record.mode, "stored difference");
        self.records.push(record);

        if !self.has_room() {
            debug!(
                stored = self.records.len(),
                bytes = self.bytes,
                lines = self.lines,
                "diff report limit reached; further differences are only counted"
            );
        }
    }

    fn has_room(&self) -> bool {
        self.bytes < self.config.max_bytes && self.lines < self.config.max_lines
    }

    /// Stored records, in the order they were reported.
    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    /// Number of unequal leaves seen, stored or not.
    pub fn total_diffs(&self) -> usize {
        self.total
    }

    /// Number of stored records.
    pub fn stored_diffs(&self) -> usize {
        self.records.len()
    }

    /// Number of differences that were counted but not stored.
    pub fn omitted_diffs(&self) -> usize {
        self.total - self.records.len()
    }

    /// Byte length of the stored text.
    pub fn stored_bytes(&self) -> usize {
        self.bytes
    }

    /// Newline count of the stored text.
    pub fn stored_lines(&self) -> usize {
        self.lines
    }

    /// Returns `true` if any difference was dropped.
    pub fn is_truncated(&self) -> bool {
        self.omitted_diffs() > 0
    }

    /// The limits in effect.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// The stored records followed, if anything was dropped, by a line
    /// giving the number of omitted differences.
    pub fn final_report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiffAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            write!(f, "{record}")?;
        }
        if self.is_truncated() {
            write!(f, "... {} more differences ...", self.omitted_diffs())?;
        }
        Ok(())
    }
}
