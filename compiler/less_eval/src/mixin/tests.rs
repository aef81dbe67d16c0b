use std::rc::Rc;

use less_ir::{Expr, MixinArg, MixinDefinition, MixinParam, Name, Ruleset, StringInterner, Unit};
use pretty_assertions::assert_eq;

use super::{format_call, BoundArgument};
use crate::errors::EvalErrorKind;
use crate::evaluator::Evaluator;
use crate::scope::{Bundle, Frame, Frames, VariableSlot};
use crate::value::Value;

fn positional(value: Value) -> BoundArgument {
    BoundArgument {
        name: None,
        value,
        expand: false,
    }
}

fn named(name: Name, value: Value) -> BoundArgument {
    BoundArgument {
        name: Some(name),
        value,
        expand: false,
    }
}

fn numbers(values: &[f64]) -> Vec<BoundArgument> {
    values.iter().map(|&v| positional(Value::number(v))).collect()
}

fn mixin(interner: &StringInterner, params: Vec<MixinParam>) -> Rc<MixinDefinition> {
    Rc::new(MixinDefinition::new(interner.intern(".m"), params, Vec::new()))
}

fn bound(frame: &Frame, name: Name) -> Value {
    match frame.variable(name) {
        Some(VariableSlot::Bound(value)) => value,
        other => panic!("expected a bound value, got {other:?}"),
    }
}

#[test]
fn arity_with_optional_parameters() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let b = interner.intern("@b");
    let bundle = Bundle::Mixin(mixin(
        &interner,
        vec![MixinParam::named(a), MixinParam::with_default(b, Expr::number(2.0))],
    ));
    let mut evaluator = Evaluator::new(&interner);

    assert!(evaluator.match_args(&bundle, &numbers(&[1.0])).unwrap());
    assert!(evaluator.match_args(&bundle, &numbers(&[1.0, 2.0])).unwrap());
    assert!(!evaluator.match_args(&bundle, &numbers(&[1.0, 2.0, 3.0])).unwrap());
    assert!(!evaluator.match_args(&bundle, &[]).unwrap());
    // Naming an optional parameter does not cover a required one.
    assert!(!evaluator
        .match_args(&bundle, &[named(b, Value::number(5.0))])
        .unwrap());
    assert!(evaluator
        .match_args(&bundle, &[named(a, Value::number(5.0))])
        .unwrap());
}

#[test]
fn variadic_accepts_any_tail() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let bundle = Bundle::Mixin(mixin(
        &interner,
        vec![MixinParam::named(a), MixinParam::Variadic(None)],
    ));
    let mut evaluator = Evaluator::new(&interner);

    assert!(!evaluator.match_args(&bundle, &[]).unwrap());
    assert!(evaluator.match_args(&bundle, &numbers(&[1.0])).unwrap());
    assert!(evaluator.match_args(&bundle, &numbers(&[1.0, 2.0, 3.0, 4.0])).unwrap());
}

#[test]
fn pattern_parameters_compare_css_text() {
    let interner = StringInterner::new();
    let c = interner.intern("@c");
    let bundle = Bundle::Mixin(mixin(
        &interner,
        vec![MixinParam::Pattern(Expr::keyword("dark")), MixinParam::named(c)],
    ));
    let mut evaluator = Evaluator::new(&interner);

    let dark = [positional(Value::keyword("dark")), positional(Value::keyword("red"))];
    let light = [positional(Value::keyword("light")), positional(Value::keyword("red"))];
    assert!(evaluator.match_args(&bundle, &dark).unwrap());
    assert!(!evaluator.match_args(&bundle, &light).unwrap());
}

#[test]
fn plain_rulesets_take_no_arguments() {
    let interner = StringInterner::new();
    let bundle = Bundle::Ruleset(Rc::new(Ruleset::root(Vec::new())));
    let mut evaluator = Evaluator::new(&interner);
    assert!(evaluator.match_args(&bundle, &[]).unwrap());
    assert!(!evaluator.match_args(&bundle, &numbers(&[1.0])).unwrap());
}

#[test]
fn binds_named_then_positional_then_rest() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let b = interner.intern("@b");
    let rest = interner.intern("@rest");
    let definition = mixin(
        &interner,
        vec![
            MixinParam::named(a),
            MixinParam::with_default(b, Expr::number(2.0)),
            MixinParam::Variadic(Some(rest)),
        ],
    );
    let args = [
        positional(Value::number(1.0)),
        named(b, Value::number(5.0)),
        positional(Value::number(9.0)),
        positional(Value::number(10.0)),
    ];
    let mut evaluator = Evaluator::new(&interner);
    let frame = evaluator
        .bind_parameters(&definition, &Frames::new(), &args)
        .unwrap();

    assert_eq!(bound(&frame, a), Value::number(1.0));
    assert_eq!(bound(&frame, b), Value::number(5.0));
    assert_eq!(
        bound(&frame, rest),
        Value::Spaced(vec![Value::number(9.0), Value::number(10.0)])
    );
    assert_eq!(
        bound(&frame, interner.intern("@arguments")),
        Value::Spaced(vec![
            Value::number(1.0),
            Value::number(5.0),
            Value::number(9.0),
            Value::number(10.0),
        ])
    );
}

#[test]
fn defaults_see_earlier_parameters_and_the_closure() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let b = interner.intern("@b");
    let c = interner.intern("@c");
    let outer = interner.intern("@outer");
    let definition = mixin(
        &interner,
        vec![
            MixinParam::named(a),
            MixinParam::with_default(b, Expr::variable(a)),
            MixinParam::with_default(c, Expr::variable(outer)),
        ],
    );
    let closure_frame = Rc::new(Frame::parameters());
    closure_frame.define(outer, Value::dimension(4.0, Unit::Px));
    let scope = Frames::new().push(closure_frame);

    let mut evaluator = Evaluator::new(&interner);
    let frame = evaluator
        .bind_parameters(&definition, &scope, &numbers(&[3.0]))
        .unwrap();
    assert_eq!(bound(&frame, b), Value::number(3.0));
    assert_eq!(bound(&frame, c), Value::dimension(4.0, Unit::Px));
    // Binding leaves the evaluator's own scope untouched.
    assert!(evaluator.frames().is_empty());
}

#[test]
fn unknown_named_argument() {
    let interner = StringInterner::new();
    let definition = mixin(&interner, vec![MixinParam::named(interner.intern("@a"))]);
    let args = [named(interner.intern("@z"), Value::number(1.0))];
    let mut evaluator = Evaluator::new(&interner);
    let err = evaluator
        .bind_parameters(&definition, &Frames::new(), &args)
        .unwrap_err();
    assert_eq!(err.message, "Named argument for .m @z not found");
}

#[test]
fn missing_argument_reports_counts() {
    let interner = StringInterner::new();
    let definition = mixin(
        &interner,
        vec![
            MixinParam::named(interner.intern("@a")),
            MixinParam::named(interner.intern("@b")),
        ],
    );
    let mut evaluator = Evaluator::new(&interner);
    let err = evaluator
        .bind_parameters(&definition, &Frames::new(), &numbers(&[1.0]))
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::WrongArgumentCount {
            mixin: ".m".to_owned(),
            got: 1,
            expected: 2,
        }
    );
    assert_eq!(err.message, "wrong number of arguments for .m (1 for 2)");
}

#[test]
fn leftover_positional_arguments_are_rejected() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let definition = mixin(&interner, vec![MixinParam::named(a)]);
    let mut evaluator = Evaluator::new(&interner);

    let err = evaluator
        .bind_parameters(&definition, &Frames::new(), &numbers(&[1.0, 2.0]))
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::WrongArgumentCount {
            mixin: ".m".to_owned(),
            got: 2,
            expected: 1,
        }
    );

    // A named argument already took the only slot.
    let args = [named(a, Value::number(1.0)), positional(Value::number(2.0))];
    let err = evaluator
        .bind_parameters(&definition, &Frames::new(), &args)
        .unwrap_err();
    assert_eq!(err.message, "wrong number of arguments for .m (2 for 1)");

    let variadic = mixin(&interner, vec![MixinParam::named(a), MixinParam::Variadic(None)]);
    let frame = evaluator
        .bind_parameters(&variadic, &Frames::new(), &numbers(&[1.0, 2.0, 3.0]))
        .unwrap();
    assert_eq!(bound(&frame, a), Value::number(1.0));
}

#[test]
fn expanded_arguments_are_spliced() {
    let interner = StringInterner::new();
    let mut evaluator = Evaluator::new(&interner);
    let args = evaluator
        .bind_arguments(&[
            MixinArg::positional(Expr::number(0.0)),
            MixinArg::expanded(Expr::spaced(vec![Expr::number(1.0), Expr::number(2.0)])),
        ])
        .unwrap();
    let values: Vec<String> = args.iter().map(|arg| arg.value.to_string()).collect();
    assert_eq!(values, vec!["0", "1", "2"]);
    assert!(args.iter().all(|arg| arg.name.is_none() && !arg.expand));
}

#[test]
fn call_text_for_messages() {
    let interner = StringInterner::new();
    let b = interner.intern("@b");
    let args = [
        named(b, Value::number(5.0)),
        positional(Value::dimension(1.0, Unit::Px)),
    ];
    assert_eq!(format_call(".m", &args, &interner), ".m(@b:5, 1px)");
    assert_eq!(format_call("#ns.m", &[], &interner), "#ns.m()");
}
