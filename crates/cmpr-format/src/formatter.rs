//! The formatter seam between the reporter and value rendering.

use std::fmt;

use crate::value::ReportValue;

/// Rendering for a side of a comparison that has no value.
pub const NON_EXISTENT: &str = "<non-existent>";

/// Which rendering a [`ValueFormatter`] should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Prefer the value's own human display representation.
    #[default]
    Friendly,
    /// Annotate the rendering with the concrete type so that values which
    /// display identically can still be told apart.
    ExactType,
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Friendly => write!(f, "friendly"),
            Self::ExactType => write!(f, "exact-type"),
        }
    }
}

/// Renders one side of a leaf comparison to a string.
///
/// Implementations must be deterministic for a given value and mode and
/// must never fail; an absent value renders as a sentinel such as
/// [`NON_EXISTENT`].
pub trait ValueFormatter<V: ?Sized> {
    /// Render `value` in the requested mode.
    fn format(&self, value: Option<&V>, mode: FormatMode) -> String;
}

impl<V: ?Sized, F: ValueFormatter<V> + ?Sized> ValueFormatter<V> for &F {
    fn format(&self, value: Option<&V>, mode: FormatMode) -> String {
        (**self).format(value, mode)
    }
}

/// Formatter for any [`ReportValue`], including `dyn ReportValue`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardFormatter;

impl<V: ReportValue + ?Sized> ValueFormatter<V> for StandardFormatter {
    fn format(&self, value: Option<&V>, mode: FormatMode) -> String {
        match (value, mode) {
            (None, _) => NON_EXISTENT.to_string(),
            (Some(v), FormatMode::Friendly) => v.friendly(),
            (Some(v), FormatMode::ExactType) => v.exact(),
        }
    }
}

/// Adapts a closure into a [`ValueFormatter`].
#[derive(Clone, Copy)]
pub struct FormatterFn<F>(pub F);

impl<V, F> ValueFormatter<V> for FormatterFn<F>
where
    V: ?Sized,
    F: Fn(Option<&V>, FormatMode) -> String,
{
    fn format(&self, value: Option<&V>, mode: FormatMode) -> String {
        (self.0)(value, mode)
    }
}

impl<F> fmt::Debug for FormatterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterFn").finish_non_exhaustive()
    }
}
