//! Foundation types for cmpr.
//!
//! A traversal engine comparing two values describes where it is with a
//! [`Path`] of [`PathStep`]s and judges every leaf with a [`Verdict`].
//! Every other cmpr crate depends on `cmpr-types`.
//!
//! # Key Types
//!
//! - [`PathStep`] — One hop of the traversal (field, index, map key, type assertion, ...)
//! - [`Path`] — Steps from the root to the current node, rendered as an access expression
//! - [`Verdict`] — Equal / Unequal / Ignore judgment for a leaf

pub mod path;
pub mod step;
pub mod verdict;

pub use path::Path;
pub use step::PathStep;
pub use verdict::Verdict;
