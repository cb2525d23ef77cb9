use std::fmt;

use serde::{Deserialize, Serialize};

/// A single hop taken by a traversal engine while descending into a pair
/// of values.
///
/// Steps are supplied by the engine on every push and are never modified
/// afterwards. Their [`Display`](fmt::Display) form is the fragment the step
/// contributes to a rendered [`Path`](crate::Path).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathStep {
    /// The operation-less step pushed for the root values of a comparison.
    Root {
        /// Name of the type being compared.
        type_name: String,
    },
    /// Access to a named struct field.
    Field {
        /// The field name.
        name: String,
    },
    /// Access to a sequence element.
    ///
    /// Each side carries its own position because element alignment may
    /// pair up different indices, or find no counterpart at all.
    Index {
        /// Position on the left side, if the element exists there.
        x: Option<usize>,
        /// Position on the right side, if the element exists there.
        y: Option<usize>,
    },
    /// Access to a map entry. The key is rendered by the engine.
    MapKey {
        /// The rendered key.
        key: String,
    },
    /// Downcast of a dynamically typed value to a concrete type.
    TypeAssert {
        /// The concrete type asserted.
        type_name: String,
    },
    /// A user-supplied transformation applied to both values.
    Transform {
        /// Name of the transformation.
        name: String,
    },
    /// Dereference of a pointer or box.
    Indirect,
}

impl PathStep {
    /// Root step for a comparison of values of the named type.
    pub fn root(type_name: impl Into<String>) -> Self {
        Self::Root {
            type_name: type_name.into(),
        }
    }

    /// Field access step.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field { name: name.into() }
    }

    /// Sequence step where both sides sit at the same position.
    pub fn index(i: usize) -> Self {
        Self::Index {
            x: Some(i),
            y: Some(i),
        }
    }

    /// Sequence step with independent positions on each side.
    pub fn index_pair(x: Option<usize>, y: Option<usize>) -> Self {
        Self::Index { x, y }
    }

    /// Map entry step.
    pub fn map_key(key: impl Into<String>) -> Self {
        Self::MapKey { key: key.into() }
    }

    /// Type assertion step.
    pub fn type_assert(type_name: impl Into<String>) -> Self {
        Self::TypeAssert {
            type_name: type_name.into(),
        }
    }

    /// Transformation step.
    pub fn transform(name: impl Into<String>) -> Self {
        Self::Transform { name: name.into() }
    }
}

fn write_position(f: &mut fmt::Formatter<'_>, pos: Option<usize>) -> fmt::Result {
    match pos {
        Some(i) => write!(f, "{i}"),
        None => f.write_str("?"),
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root { .. } => Ok(()),
            Self::Field { name } => write!(f, ".{name}"),
            Self::Index { x, y } => {
                f.write_str("[")?;
                write_position(f, *x)?;
                if x != y {
                    f.write_str("->")?;
                    write_position(f, *y)?;
                }
                f.write_str("]")
            }
            Self::MapKey { key } => write!(f, "[{key}]"),
            Self::TypeAssert { type_name } => write!(f, ".({type_name})"),
            Self::Transform { name } => write!(f, "{name}()"),
            Self::Indirect => f.write_str("*"),
        }
    }
}
