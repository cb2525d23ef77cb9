//! How a value renders itself in each [`FormatMode`](crate::FormatMode).

use std::any::type_name;
use std::fmt;

/// A value that can be rendered into a diff report.
///
/// Every type that is both [`Display`](fmt::Display) and
/// [`Debug`](fmt::Debug) gets an implementation for free. The trait is
/// object safe, so an engine comparing heterogeneous values can push
/// `&dyn ReportValue` for every leaf.
pub trait ReportValue {
    /// Human-oriented rendering.
    fn friendly(&self) -> String;

    /// Rendering annotated with the concrete type, used to tell apart
    /// values whose friendly renderings collide.
    fn exact(&self) -> String;
}

impl<T: fmt::Display + fmt::Debug + ?Sized> ReportValue for T {
    fn friendly(&self) -> String {
        self.to_string()
    }

    fn exact(&self) -> String {
        format!("{}({:?})", type_name::<T>(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    #[test]
    fn friendly_uses_display() {
        assert_eq!(42u32.friendly(), "42");
        assert_eq!("hi".friendly(), "hi");
    }

    #[test]
    fn exact_includes_type_and_debug() {
        assert_eq!(42u32.exact(), "u32(42)");
        assert_eq!("hi".exact(), "str(\"hi\")");
    }

    #[test]
    fn exact_disambiguates_colliding_display() {
        let a: &dyn ReportValue = &Timeout;
        let b: &dyn ReportValue = &Refused;
        assert_eq!(a.friendly(), b.friendly());
        assert_ne!(a.exact(), b.exact());
        assert!(a.exact().ends_with("Timeout(Timeout)"));
        assert!(b.exact().ends_with("Refused(Refused)"));
    }
}
