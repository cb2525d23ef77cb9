//! Recursive comparison of JSON documents.
//!
//! Objects descend into the union of their keys, arrays into the longer of
//! the two index ranges. Everything else, including a type mismatch or a
//! value present on one side only, is a leaf.

use std::collections::BTreeSet;

use cmpr_report::Reporter;
use cmpr_types::{PathStep, Verdict};
use serde_json::Value;

/// Walk `x` and `y`, driving `reporter` with one push/pop pair per node
/// and one verdict per leaf. Object keys listed in `ignore` are reported
/// as ignored at any depth. Returns `true` if no leaf was unequal.
pub fn compare<'a, R>(
    x: &'a Value,
    y: &'a Value,
    ignore: &BTreeSet<String>,
    reporter: &mut R,
) -> bool
where
    R: Reporter<'a, Value>,
{
    reporter.push_step(PathStep::root("json"), Some(x), Some(y));
    let equal = walk(Some(x), Some(y), ignore, reporter);
    reporter.pop_step();
    equal
}

fn walk<'a, R>(
    x: Option<&'a Value>,
    y: Option<&'a Value>,
    ignore: &BTreeSet<String>,
    reporter: &mut R,
) -> bool
where
    R: Reporter<'a, Value>,
{
    match (x, y) {
        (Some(Value::Object(xs)), Some(Value::Object(ys))) if !(xs.is_empty() && ys.is_empty()) => {
            let keys: BTreeSet<&'a String> = xs.keys().chain(ys.keys()).collect();
            let mut equal = true;
            for key in keys {
                let (xv, yv) = (xs.get(key), ys.get(key));
                reporter.push_step(key_step(key), xv, yv);
                if ignore.contains(key) {
                    reporter.report(Verdict::Ignore);
                } else {
                    equal &= walk(xv, yv, ignore, reporter);
                }
                reporter.pop_step();
            }
            equal
        }
        (Some(Value::Array(xs)), Some(Value::Array(ys))) if !(xs.is_empty() && ys.is_empty()) => {
            let mut equal = true;
            for i in 0..xs.len().max(ys.len()) {
                let (xv, yv) = (xs.get(i), ys.get(i));
                reporter.push_step(
                    PathStep::index_pair(xv.map(|_| i), yv.map(|_| i)),
                    xv,
                    yv,
                );
                equal &= walk(xv, yv, ignore, reporter);
                reporter.pop_step();
            }
            equal
        }
        _ => {
            let equal = x == y;
            reporter.report(Verdict::from_equal(equal));
            equal
        }
    }
}

/// Identifier-like keys read as field accesses, anything else as a quoted
/// map key.
fn key_step(key: &str) -> PathStep {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_ident {
        PathStep::field(key)
    } else {
        PathStep::map_key(format!("{key:?}"))
    }
}
