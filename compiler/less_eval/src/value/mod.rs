//! Evaluated values.
//!
//! `Display` renders the CSS text of a value. Pattern parameters and
//! anonymous-value comparison go through this text, so it must be stable.

mod compare;

use std::fmt;
use std::rc::Rc;

use less_ir::{BinaryOp, Literal, Ruleset, Unit};

use crate::errors::{incompatible_units, invalid_operation, EvalResult};
use crate::scope::Frames;

pub use compare::compare;

/// Result of evaluating an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Dimension(Dimension),
    Color(Color),
    Keyword(Box<str>),
    Quoted(Quoted),
    Anonymous(Box<str>),
    Url(Box<str>),
    /// Space separated sequence.
    Spaced(Vec<Value>),
    /// Comma separated sequence.
    List(Vec<Value>),
    /// CSS function that is not a built-in, passed through with evaluated
    /// arguments. Also the result of `default()` outside a guard pass.
    Call { name: Box<str>, args: Vec<Value> },
    DetachedRuleset(DetachedRuleset),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub rgb: [f64; 3],
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quoted {
    pub text: Box<str>,
    pub quote: char,
    pub escaped: bool,
}

/// A `{ ... }` block stored in a variable, with the scope it was created in.
#[derive(Clone, Debug)]
pub struct DetachedRuleset {
    pub ruleset: Rc<Ruleset>,
    pub frames: Frames,
}

impl PartialEq for DetachedRuleset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ruleset, &other.ruleset)
    }
}

impl Value {
    pub fn number(value: f64) -> Value {
        Value::Dimension(Dimension {
            value,
            unit: Unit::None,
        })
    }

    pub fn dimension(value: f64, unit: Unit) -> Value {
        Value::Dimension(Dimension { value, unit })
    }

    pub fn keyword(text: &str) -> Value {
        Value::Keyword(text.into())
    }

    /// `true` or `false` keyword.
    pub fn boolean(value: bool) -> Value {
        Value::keyword(if value { "true" } else { "false" })
    }

    pub fn quoted(text: &str) -> Value {
        Value::Quoted(Quoted {
            text: text.into(),
            quote: '"',
            escaped: false,
        })
    }

    /// Space separated sequence; a single element stands for itself.
    pub fn spaced(mut items: Vec<Value>) -> Value {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return item;
            }
        }
        Value::Spaced(items)
    }

    /// Comma separated sequence; a single element stands for itself.
    pub fn list(mut items: Vec<Value>) -> Value {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return item;
            }
        }
        Value::List(items)
    }

    pub fn from_literal(literal: &Literal) -> Value {
        match literal {
            Literal::Dimension { value, unit } => Value::dimension(*value, unit.clone()),
            Literal::Color { rgb, alpha } => Value::Color(Color {
                rgb: *rgb,
                alpha: *alpha,
            }),
            Literal::Keyword(text) => Value::Keyword(text.clone()),
            Literal::Quoted {
                text,
                quote,
                escaped,
            } => Value::Quoted(Quoted {
                text: text.clone(),
                quote: *quote,
                escaped: *escaped,
            }),
            Literal::Anonymous(text) => Value::Anonymous(text.clone()),
            Literal::Url(text) => Value::Url(text.clone()),
        }
    }

    /// Elements of a space or comma separated sequence.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Spaced(items) | Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_elements(self) -> Result<Vec<Value>, Value> {
        match self {
            Value::Spaced(items) | Value::List(items) => Ok(items),
            other => Err(other),
        }
    }

    /// Arithmetic between two values.
    pub fn operate(&self, op: BinaryOp, other: &Value, strict_units: bool) -> EvalResult<Value> {
        match (self, other) {
            (Value::Dimension(a), Value::Dimension(b)) => {
                a.operate(op, b, strict_units).map(Value::Dimension)
            }
            (Value::Color(a), Value::Color(b)) => Ok(Value::Color(a.operate(op, b))),
            (Value::Color(a), Value::Dimension(b)) => Ok(Value::Color(a.operate(op, &b.to_color()))),
            (Value::Dimension(a), Value::Color(b)) => Ok(Value::Color(a.to_color().operate(op, b))),
            _ => Err(invalid_operation(op.as_symbol())),
        }
    }
}

impl Dimension {
    /// Arithmetic with unit handling.
    ///
    /// A unitless operand takes the other's unit. Convertible units are
    /// converted into the left operand's unit. Incompatible units keep the
    /// left unit, or fail when `strict_units` is set.
    pub fn operate(&self, op: BinaryOp, other: &Dimension, strict_units: bool) -> EvalResult<Dimension> {
        let (rhs, unit) = match (&self.unit, &other.unit) {
            (Unit::None, unit) => (other.value, unit.clone()),
            (unit, Unit::None) => (other.value, unit.clone()),
            (lhs, rhs) => match rhs.convert(other.value, lhs) {
                Some(converted) => (converted, lhs.clone()),
                None if strict_units => {
                    return Err(incompatible_units(lhs.as_str(), rhs.as_str()));
                }
                None => (other.value, lhs.clone()),
            },
        };
        Ok(Dimension {
            value: op.apply(self.value, rhs),
            unit,
        })
    }

    /// Gray color with every channel set to this number.
    pub fn to_color(&self) -> Color {
        Color {
            rgb: [self.value; 3],
            alpha: 1.0,
        }
    }
}

impl Color {
    /// Channel-wise arithmetic; alpha values combine as overlapping layers.
    pub fn operate(&self, op: BinaryOp, other: &Color) -> Color {
        let mut rgb = [0.0; 3];
        for (channel, (a, b)) in rgb.iter_mut().zip(self.rgb.iter().zip(other.rgb)) {
            *channel = op.apply(*a, b);
        }
        Color {
            rgb,
            alpha: 1.0 - (1.0 - self.alpha) * (1.0 - other.alpha),
        }
    }
}

fn fmt_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return write!(f, "{value:.0}");
    }
    let text = format!("{value:.8}");
    f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "channels are clamped to 0..=255 before the cast"
)]
fn channel_byte(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_number(f, self.value)?;
        f.write_str(self.unit.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb.map(channel_byte);
        if self.alpha >= 1.0 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r}, {g}, {b}, ")?;
            fmt_number(f, self.alpha.clamp(0.0, 1.0))?;
            f.write_str(")")
        }
    }
}

impl fmt::Display for Quoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.escaped {
            f.write_str(&self.text)
        } else {
            write!(f, "{q}{}{q}", self.text, q = self.quote)
        }
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, items: &[Value], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Dimension(d) => write!(f, "{d}"),
            Value::Color(c) => write!(f, "{c}"),
            Value::Keyword(text) | Value::Anonymous(text) => f.write_str(text),
            Value::Quoted(q) => write!(f, "{q}"),
            Value::Url(text) => write!(f, "url({text})"),
            Value::Spaced(items) => fmt_joined(f, items, " "),
            Value::List(items) => fmt_joined(f, items, ", "),
            Value::Call { name, args } => {
                write!(f, "{name}(")?;
                fmt_joined(f, args, ", ")?;
                f.write_str(")")
            }
            Value::DetachedRuleset(_) => f.write_str("{...}"),
        }
    }
}
