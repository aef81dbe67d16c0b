//! Built-in functions available to guards.
//!
//! Only the type predicates are provided. Any other function call evaluates
//! its arguments and is passed through to the output as written.

use less_ir::{Name, StringInterner, Unit};
use rustc_hash::FxHashMap;

use crate::errors::{function_arity, EvalResult};
use crate::value::Value;

type Builtin = fn(&[Value]) -> Value;

struct Entry {
    name: &'static str,
    arity: usize,
    apply: Builtin,
}

/// Built-in functions by interned name.
pub struct FunctionTable {
    entries: FxHashMap<Name, Entry>,
}

const BUILTINS: &[(&str, usize, Builtin)] = &[
    ("isnumber", 1, is_number),
    ("isstring", 1, is_string),
    ("iscolor", 1, is_color),
    ("iskeyword", 1, is_keyword),
    ("isurl", 1, is_url),
    ("ispixel", 1, is_pixel),
    ("isem", 1, is_em),
    ("ispercentage", 1, is_percentage),
    ("isunit", 2, is_unit),
    ("isruleset", 1, is_ruleset),
    ("islist", 1, is_list),
];

fn is_number(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::Dimension(_)))
}

fn is_string(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::Quoted(_)))
}

fn is_color(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::Color(_)))
}

fn is_keyword(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::Keyword(_)))
}

fn is_url(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::Url(_)))
}

fn is_pixel(args: &[Value]) -> Value {
    has_unit(&args[0], &Unit::Px)
}

fn is_em(args: &[Value]) -> Value {
    has_unit(&args[0], &Unit::Em)
}

fn is_percentage(args: &[Value]) -> Value {
    has_unit(&args[0], &Unit::Percent)
}

/// `isunit(@value, px)`; the unit may be a keyword or a string.
fn is_unit(args: &[Value]) -> Value {
    let unit = match &args[1] {
        Value::Quoted(quoted) => Unit::parse(&quoted.text),
        other => Unit::parse(&other.to_string()),
    };
    has_unit(&args[0], &unit)
}

fn is_ruleset(args: &[Value]) -> Value {
    Value::boolean(matches!(args[0], Value::DetachedRuleset(_)))
}

fn is_list(args: &[Value]) -> Value {
    Value::boolean(args[0].elements().is_some())
}

fn has_unit(value: &Value, unit: &Unit) -> Value {
    Value::boolean(matches!(value, Value::Dimension(d) if d.unit == *unit))
}

impl FunctionTable {
    pub fn new(interner: &StringInterner) -> Self {
        let entries = BUILTINS
            .iter()
            .map(|&(name, arity, apply)| (interner.intern(name), Entry { name, arity, apply }))
            .collect();
        FunctionTable { entries }
    }

    /// Apply the built-in `name`, or `None` if there is no such built-in.
    pub fn call(&self, name: Name, args: &[Value]) -> Option<EvalResult<Value>> {
        let entry = self.entries.get(&name)?;
        if args.len() != entry.arity {
            return Some(Err(function_arity(entry.name, entry.arity, args.len())));
        }
        Some(Ok((entry.apply)(args)))
    }
}
