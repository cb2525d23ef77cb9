use std::fmt;

use serde::{Deserialize, Serialize};

/// A traversal engine's judgment of a single leaf pair.
///
/// Exactly one verdict is issued per leaf and never for interior nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The two values are equal.
    Equal,
    /// The two values differ.
    Unequal,
    /// The node was excluded from comparison.
    Ignore,
}

impl Verdict {
    /// Verdict for a plain equality check.
    pub fn from_equal(equal: bool) -> Self {
        if equal {
            Self::Equal
        } else {
            Self::Unequal
        }
    }

    /// Returns `true` for [`Verdict::Unequal`].
    pub fn is_unequal(self) -> bool {
        matches!(self, Self::Unequal)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Unequal => write!(f, "unequal"),
            Self::Ignore => write!(f, "ignore"),
        }
    }
}
