//! Diff reporting for cmpr.
//!
//! A traversal engine comparing two values drives a [`Reporter`] with
//! balanced push/pop calls and one [`Verdict`](cmpr_types::Verdict) per
//! leaf. [`DefaultReporter`] mirrors the descent in a [`PathTracker`] and
//! renders each unequal leaf into a [`DiffAccumulator`], whose output is
//! capped by a [`ReporterConfig`].
//!
//! # Key Types
//!
//! - [`Reporter`] / [`DefaultReporter`] -- The push/report/pop protocol and its text implementation
//! - [`PathTracker`] / [`ValuePair`] -- Path and value stacks, leaf protocol checks
//! - [`DiffAccumulator`] / [`DiffRecord`] -- Bounded storage of rendered differences
//! - [`ReporterConfig`] -- Byte and line limits

pub mod accumulator;
pub mod config;
pub mod error;
pub mod reporter;
pub mod tracker;

pub use accumulator::{DiffAccumulator, DiffRecord};
pub use config::{ReporterConfig, DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES};
pub use error::{ReportError, ReportResult};
pub use reporter::{DefaultReporter, Reporter};
pub use tracker::{PathTracker, ValuePair};
