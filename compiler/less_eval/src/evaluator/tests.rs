use less_ir::{
    BinaryOp, CompareOp, Condition, Expr, Location, MixinCall, MixinDefinition, Rule, Ruleset,
    Selector, Span, StringInterner, Unit,
};
use pretty_assertions::assert_eq;

use super::Evaluator;
use crate::errors::{EvalErrorKind, EvalResult};
use crate::output::{declarations, CssRule};
use crate::value::Value;

fn evaluate(interner: &StringInterner, rules: Vec<Rule>) -> EvalResult<Vec<CssRule>> {
    Evaluator::new(interner).evaluate(&Ruleset::root(rules))
}

fn pairs(rules: &[CssRule]) -> Vec<(String, String)> {
    declarations(rules)
        .into_iter()
        .map(|d| (d.property.to_string(), d.value.to_string()))
        .collect()
}

fn block(interner: &StringInterner, selector: &str, rules: Vec<Rule>) -> Rule {
    Rule::from(Ruleset::new(
        vec![Selector::from_names(&[interner.intern(selector)])],
        rules,
    ))
}

#[test]
fn variables_resolve_regardless_of_order() {
    let interner = StringInterner::new();
    let w = interner.intern("@w");
    let out = evaluate(
        &interner,
        vec![block(
            &interner,
            ".a",
            vec![
                Rule::declaration("width", Expr::variable(w)),
                Rule::variable(w, Expr::dimension(5.0, Unit::Px)),
            ],
        )],
    )
    .unwrap();
    assert_eq!(pairs(&out), vec![("width".to_owned(), "5px".to_owned())]);
}

#[test]
fn inner_scope_shadows_outer() {
    let interner = StringInterner::new();
    let c = interner.intern("@c");
    let out = evaluate(
        &interner,
        vec![
            Rule::variable(c, Expr::keyword("red")),
            block(
                &interner,
                ".a",
                vec![
                    Rule::variable(c, Expr::keyword("blue")),
                    Rule::declaration("color", Expr::variable(c)),
                ],
            ),
            block(&interner, ".b", vec![Rule::declaration("color", Expr::variable(c))]),
        ],
    )
    .unwrap();
    assert_eq!(
        pairs(&out),
        vec![
            ("color".to_owned(), "blue".to_owned()),
            ("color".to_owned(), "red".to_owned()),
        ]
    );
}

#[test]
fn arithmetic_in_declarations() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let out = evaluate(
        &interner,
        vec![
            Rule::variable(a, Expr::dimension(2.0, Unit::Px)),
            Rule::declaration(
                "width",
                Expr::binary(BinaryOp::Mul, Expr::variable(a), Expr::number(3.0)),
            ),
            Rule::declaration("margin", Expr::negative(Expr::variable(a))),
        ],
    )
    .unwrap();
    assert_eq!(
        pairs(&out),
        vec![
            ("width".to_owned(), "6px".to_owned()),
            ("margin".to_owned(), "-2px".to_owned()),
        ]
    );
}

#[test]
fn recursive_variable_is_an_error() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let err = evaluate(&interner, vec![Rule::variable(a, Expr::variable(a))]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::RecursiveVariable {
            name: "@a".to_owned()
        }
    );
}

#[test]
fn undefined_variable_is_located() {
    let interner = StringInterner::new();
    let reference = Expr::Variable {
        name: interner.intern("@nope"),
        span: Span::new(10, 15),
    };
    let err = evaluate(&interner, vec![Rule::declaration("width", reference)]).unwrap_err();
    assert_eq!(err.message, "variable @nope is undefined");
    assert_eq!(err.location, Some(Location::new(Span::new(10, 15))));
}

#[test]
fn css_guards_filter_selectors() {
    let interner = StringInterner::new();
    let yes = Condition::compare(CompareOp::Eq, Expr::number(1.0), Expr::number(1.0));
    let no = Condition::compare(CompareOp::Eq, Expr::number(1.0), Expr::number(2.0));
    let shown = Ruleset::new(
        vec![Selector::from_names(&[interner.intern(".shown")]).with_condition(yes)],
        vec![Rule::declaration("a", Expr::number(1.0))],
    );
    let hidden = Ruleset::new(
        vec![Selector::from_names(&[interner.intern(".hidden")]).with_condition(no)],
        vec![Rule::declaration("b", Expr::number(2.0))],
    );
    let out = evaluate(&interner, vec![Rule::from(shown), Rule::from(hidden)]).unwrap();
    assert_eq!(out.len(), 1);
    let ruleset = out[0].as_ruleset().unwrap();
    assert!(ruleset.selectors[0].condition.is_none());
    assert_eq!(pairs(&out), vec![("a".to_owned(), "1".to_owned())]);
}

#[test]
fn default_in_css_guard_is_an_error() {
    let interner = StringInterner::new();
    let guard = Condition::truthy(Expr::call(interner.intern("default"), Vec::new()));
    let ruleset = Ruleset::new(
        vec![Selector::from_names(&[interner.intern(".a")]).with_condition(guard)],
        Vec::new(),
    );
    let mut evaluator = Evaluator::new(&interner);
    let err = evaluator.evaluate(&Ruleset::root(vec![Rule::from(ruleset)])).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DefaultOutsideGuard);
    assert_eq!(
        err.message,
        "it is currently only allowed in parametric mixin guards"
    );
    // The register is restored even though evaluation failed.
    assert_eq!(evaluator.default_fn.eval(), Ok(None));
    assert!(evaluator.frames().is_empty());
}

#[test]
fn detached_ruleset_call() {
    let interner = StringInterner::new();
    let d = interner.intern("@d");
    let c = interner.intern("@c");
    let detached = Ruleset::root(vec![Rule::declaration("color", Expr::variable(c))]);
    let out = evaluate(
        &interner,
        vec![
            Rule::variable(d, Expr::detached(detached)),
            block(
                &interner,
                ".a",
                vec![
                    Rule::variable(c, Expr::keyword("red")),
                    Rule::detached_call(d),
                ],
            ),
        ],
    )
    .unwrap();
    assert_eq!(pairs(&out), vec![("color".to_owned(), "red".to_owned())]);
}

#[test]
fn calling_a_plain_variable_fails() {
    let interner = StringInterner::new();
    let d = interner.intern("@d");
    let err = evaluate(
        &interner,
        vec![
            Rule::variable(d, Expr::number(1.0)),
            Rule::detached_call(d),
        ],
    )
    .unwrap_err();
    assert_eq!(err.message, "Could not evaluate variable call @d");
}

#[test]
fn unknown_functions_pass_through() {
    let interner = StringInterner::new();
    let call = Expr::call(
        interner.intern("rgba"),
        vec![Expr::number(0.0), Expr::number(0.0), Expr::number(0.0), Expr::number(0.5)],
    );
    let out = evaluate(&interner, vec![Rule::declaration("color", call)]).unwrap();
    assert_eq!(pairs(&out), vec![("color".to_owned(), "rgba(0, 0, 0, 0.5)".to_owned())]);
}

#[test]
fn detached_value_captures_scope() {
    let interner = StringInterner::new();
    let mut evaluator = Evaluator::new(&interner);
    let value = evaluator
        .eval_expr(&Expr::detached(Ruleset::root(Vec::new())))
        .unwrap();
    assert!(matches!(value, Value::DetachedRuleset(_)));
}

#[test]
fn self_calling_detached_ruleset_stops_at_the_depth_limit() {
    let interner = StringInterner::new();
    let d = interner.intern("@d");
    let body = Ruleset::root(vec![Rule::detached_call(d)]);
    let root = Ruleset::root(vec![
        Rule::variable(d, Expr::detached(body)),
        Rule::detached_call(d),
    ]);
    let mut evaluator = Evaluator::new(&interner);
    let err = evaluator.evaluate(&root).unwrap_err();
    assert_eq!(
        err.root_cause().kind,
        EvalErrorKind::RecursionLimit {
            limit: super::MAX_CALL_DEPTH
        }
    );
    assert_eq!(evaluator.call_depth, 0);
    assert!(evaluator.frames().is_empty());
}

#[test]
fn call_depth_unwinds_after_a_failed_expansion() {
    let interner = StringInterner::new();
    let m = interner.intern(".m");
    let call = || Rule::from(MixinCall::new(&[m], Vec::new()));
    let root = Ruleset::root(vec![
        Rule::from(MixinDefinition::new(m, Vec::new(), vec![call()])),
        call(),
    ]);
    let mut evaluator = Evaluator::new(&interner);
    let err = evaluator.evaluate(&root).unwrap_err();
    assert_eq!(err.kind.category(), crate::errors::ErrorCategory::Runtime);
    assert_eq!(evaluator.call_depth, 0);

    // The same evaluator can still expand calls afterwards.
    let ok = Ruleset::root(vec![
        Rule::from(MixinDefinition::new(
            m,
            Vec::new(),
            vec![Rule::declaration("a", Expr::number(1.0))],
        )),
        call(),
    ]);
    let out = evaluator.evaluate(&ok).unwrap();
    assert_eq!(pairs(&out), vec![("a".to_owned(), "1".to_owned())]);
}

#[test]
fn every_default_call_in_a_pass_sees_the_preset() {
    let interner = StringInterner::new();
    let default = || Condition::truthy(Expr::call(interner.intern("default"), Vec::new()));
    let twice = default().and(default());
    let mut evaluator = Evaluator::new(&interner);

    let first = evaluator.with_default_preset(true, |scoped| scoped.eval_condition(&twice));
    assert_eq!(first, Ok(true));
    let second = evaluator.with_default_preset(false, |scoped| scoped.eval_condition(&twice));
    assert_eq!(second, Ok(false));
    let third = evaluator.with_default_preset(true, |scoped| scoped.eval_condition(&twice));
    assert_eq!(third, Ok(true));
    assert_eq!(evaluator.default_fn.eval(), Ok(None));
}

#[test]
fn comments_are_kept_in_place() {
    let interner = StringInterner::new();
    let out = evaluate(
        &interner,
        vec![
            Rule::comment("/* header */"),
            Rule::declaration("a", Expr::paren(Expr::number(1.0))),
        ],
    )
    .unwrap();
    assert_eq!(out.len(), 2);
    assert!(matches!(&out[0], CssRule::Comment(c) if &*c.text == "/* header */"));
    assert_eq!(pairs(&out), vec![("a".to_owned(), "1".to_owned())]);
}
