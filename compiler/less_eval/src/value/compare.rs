//! Value comparison used by guard conditions.
//!
//! `None` means the values are incomparable; every comparison operator is
//! false for such a pair, including `=`.

use std::cmp::Ordering;
use std::rc::Rc;

use super::{Color, Dimension, Quoted, Value};

/// Compare two evaluated values.
///
/// Dimensions, colors, quoted strings and anonymous values know how to
/// compare themselves against anything; when the right operand is quoted or
/// anonymous its own rule wins and the result is reversed. Other values of
/// the same kind compare structurally for equality only.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    if has_own_compare(a) && !matches!(b, Value::Quoted(_) | Value::Anonymous(_)) {
        return own_compare(a, b);
    }
    if has_own_compare(b) {
        return own_compare(b, a).map(Ordering::reverse);
    }
    structural(a, b)
}

fn has_own_compare(value: &Value) -> bool {
    matches!(
        value,
        Value::Dimension(_) | Value::Color(_) | Value::Quoted(_) | Value::Anonymous(_)
    )
}

fn own_compare(this: &Value, other: &Value) -> Option<Ordering> {
    match this {
        Value::Dimension(d) => compare_dimension(d, other),
        Value::Color(c) => compare_color(*c, other),
        Value::Quoted(q) => compare_quoted(q, other),
        Value::Anonymous(text) => (other.to_string() == **text).then_some(Ordering::Equal),
        _ => None,
    }
}

fn compare_dimension(this: &Dimension, other: &Value) -> Option<Ordering> {
    let Value::Dimension(other) = other else {
        return None;
    };
    if this.unit.is_none() || other.unit.is_none() {
        return this.value.partial_cmp(&other.value);
    }
    let (a, a_unit) = this.unit.unify(this.value);
    let (b, b_unit) = other.unit.unify(other.value);
    if a_unit != b_unit {
        return None;
    }
    a.partial_cmp(&b)
}

fn compare_color(this: Color, other: &Value) -> Option<Ordering> {
    match other {
        Value::Color(other) if this == *other => Some(Ordering::Equal),
        _ => None,
    }
}

fn compare_quoted(this: &Quoted, other: &Value) -> Option<Ordering> {
    match other {
        Value::Quoted(other) if !this.escaped && !other.escaped => {
            Some(this.text.cmp(&other.text))
        }
        _ => (this.to_string() == other.to_string()).then_some(Ordering::Equal),
    }
}

fn structural(a: &Value, b: &Value) -> Option<Ordering> {
    let equal = match (a, b) {
        (Value::Keyword(x), Value::Keyword(y)) | (Value::Url(x), Value::Url(y)) => x == y,
        (Value::Spaced(x), Value::Spaced(y)) | (Value::List(x), Value::List(y)) => {
            all_equal(x, y)
        }
        (
            Value::Call { name: n1, args: a1 },
            Value::Call { name: n2, args: a2 },
        ) => n1 == n2 && all_equal(a1, a2),
        (Value::DetachedRuleset(x), Value::DetachedRuleset(y)) => {
            Rc::ptr_eq(&x.ruleset, &y.ruleset)
        }
        _ => return None,
    };
    equal.then_some(Ordering::Equal)
}

fn all_equal(xs: &[Value], ys: &[Value]) -> bool {
    xs.len() == ys.len()
        && xs
            .iter()
            .zip(ys)
            .all(|(x, y)| compare(x, y) == Some(Ordering::Equal))
}
