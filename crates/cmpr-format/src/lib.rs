//! Value formatting boundary for cmpr.
//!
//! The reporter never renders values itself. It asks a [`ValueFormatter`]
//! for a [`FormatMode::Friendly`] rendering first and falls back to
//! [`FormatMode::ExactType`] when both sides print the same.
//!
//! # Key Types
//!
//! - [`ValueFormatter`] / [`FormatMode`] -- The rendering contract
//! - [`ReportValue`] -- Self-rendering values (blanket impl for `Display + Debug`)
//! - [`StandardFormatter`] -- Default formatter over [`ReportValue`]
//! - [`FormatterFn`] -- Closure adapter

pub mod formatter;
pub mod value;

pub use formatter::{FormatMode, FormatterFn, StandardFormatter, ValueFormatter, NON_EXISTENT};
pub use value::ReportValue;
