use std::fmt;

use serde::{Deserialize, Serialize};

use crate::step::PathStep;

/// The ordered sequence of steps from the root of a comparison to the
/// current pair of sub-values.
///
/// The [`Display`](fmt::Display) form reads like an access expression:
/// field accesses and indices are appended, transformations wrap what was
/// rendered before them, and pointer indirections are folded into
/// `(*...)` groups. Indirection immediately followed by a field access is
/// implicit and elided. A path made only of its root step renders as the
/// root type name in braces, so a diff on the root values is still labeled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    /// Remove and return the last step, or `None` if the path is empty.
    pub fn pop(&mut self) -> Option<PathStep> {
        self.steps.pop()
    }

    /// The last step, if any.
    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps from root to leaf.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix: Vec<String> = Vec::new();
        let mut suffix: Vec<String> = Vec::new();
        let mut pending_indirect = 0usize;

        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Indirect => {
                    pending_indirect += 1;
                    let (open, close) = match self.steps.get(i + 1) {
                        Some(PathStep::Indirect) => continue,
                        Some(PathStep::Field { .. }) => {
                            pending_indirect -= 1;
                            ("(", ")")
                        }
                        None => ("", ""),
                        Some(_) => ("(", ")"),
                    };
                    if pending_indirect > 0 {
                        prefix.push(format!("{open}{}", "*".repeat(pending_indirect)));
                        suffix.push(close.to_string());
                    }
                    pending_indirect = 0;
                }
                PathStep::Transform { name } => {
                    prefix.push(format!("{name}("));
                    suffix.push(")".to_string());
                }
                other => suffix.push(other.to_string()),
            }
        }

        if prefix.is_empty() && suffix.iter().all(String::is_empty) {
            if let Some(PathStep::Root { type_name }) = self.steps.first() {
                return if type_name.is_empty() {
                    f.write_str("root")
                } else {
                    write!(f, "{{{type_name}}}")
                };
            }
        }

        for p in prefix.iter().rev() {
            f.write_str(p)?;
        }
        for s in &suffix {
            f.write_str(s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn path(steps: Vec<PathStep>) -> Path {
        Path::from(steps)
    }

    #[test]
    fn empty_path_renders_empty() {
        assert_eq!(Path::new().to_string(), "");
    }

    #[test]
    fn bare_root_renders_type_name() {
        assert_eq!(path(vec![PathStep::root("Person")]).to_string(), "{Person}");
        assert_eq!(path(vec![PathStep::root("")]).to_string(), "root");
    }

    #[test]
    fn root_and_field() {
        let p = path(vec![PathStep::root("Person"), PathStep::field("Age")]);
        assert_eq!(p.to_string(), ".Age");
    }

    #[test]
    fn nested_fields_and_indices() {
        let p = path(vec![
            PathStep::root("Team"),
            PathStep::field("Members"),
            PathStep::index(2),
            PathStep::field("Name"),
        ]);
        assert_eq!(p.to_string(), ".Members[2].Name");
    }

    #[test]
    fn trailing_indirect_has_no_parens() {
        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("P"),
            PathStep::Indirect,
        ]);
        assert_eq!(p.to_string(), "*.P");
    }

    #[test]
    fn indirect_before_index_is_grouped() {
        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("P"),
            PathStep::Indirect,
            PathStep::index(0),
        ]);
        assert_eq!(p.to_string(), "(*.P)[0]");
    }

    #[test]
    fn single_indirect_before_field_is_implicit() {
        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("P"),
            PathStep::Indirect,
            PathStep::field("A"),
        ]);
        assert_eq!(p.to_string(), ".P.A");
    }

    #[test]
    fn consecutive_indirects_batch() {
        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("P"),
            PathStep::Indirect,
            PathStep::Indirect,
            PathStep::field("A"),
        ]);
        assert_eq!(p.to_string(), "(*.P).A");

        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("P"),
            PathStep::Indirect,
            PathStep::Indirect,
            PathStep::MapKey {
                key: "k".to_string(),
            },
        ]);
        assert_eq!(p.to_string(), "(**.P)[k]");
    }

    #[test]
    fn transforms_wrap_earlier_steps() {
        let p = path(vec![
            PathStep::root("T"),
            PathStep::field("Names"),
            PathStep::transform("Sort"),
            PathStep::index(0),
        ]);
        assert_eq!(p.to_string(), "Sort(.Names)[0]");

        let p = path(vec![
            PathStep::root("T"),
            PathStep::transform("A"),
            PathStep::transform("B"),
        ]);
        assert_eq!(p.to_string(), "B(A())");
    }

    #[test]
    fn push_pop_tracks_len() {
        let mut p = Path::new();
        p.push(PathStep::root("T"));
        p.push(PathStep::field("X"));
        assert_eq!(p.len(), 2);
        assert_eq!(p.last(), Some(&PathStep::field("X")));
        assert_eq!(p.pop(), Some(PathStep::field("X")));
        assert_eq!(p.pop(), Some(PathStep::root("T")));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    proptest! {
        #[test]
        fn field_only_paths_render_as_dotted_names(
            names in proptest::collection::vec("[A-Za-z][A-Za-z0-9_]{0,8}", 1..8)
        ) {
            let p: Path = std::iter::once(PathStep::root("T"))
                .chain(names.iter().map(PathStep::field))
                .collect();
            let expected: String = names.iter().map(|n| format!(".{n}")).collect();
            prop_assert_eq!(p.to_string(), expected);
        }
    }
}
