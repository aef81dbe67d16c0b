use pretty_assertions::assert_eq;

use super::*;
use crate::{Name, StringInterner};

fn names(interner: &StringInterner, parts: &[&str]) -> Vec<Name> {
    parts.iter().map(|p| interner.intern(p)).collect()
}

#[test]
fn selector_matches_call_prefix() {
    let interner = StringInterner::new();
    let ns = Selector::from_names(&names(&interner, &["#ns"]));
    let call = names(&interner, &["#ns", ".m"]);
    assert_eq!(ns.match_elements(&call), 1);

    let full = Selector::from_names(&names(&interner, &["#ns", ".m"]));
    assert_eq!(full.match_elements(&call), 2);
}

#[test]
fn selector_longer_than_call_does_not_match() {
    let interner = StringInterner::new();
    let long = Selector::from_names(&names(&interner, &["#ns", ".m"]));
    assert_eq!(long.match_elements(&names(&interner, &["#ns"])), 0);
    assert_eq!(long.match_elements(&names(&interner, &[".m"])), 0);
}

#[test]
fn parent_reference_is_not_a_mixin_element() {
    let interner = StringInterner::new();
    let m = interner.intern(".m");
    let selector = Selector::new(vec![
        Element {
            combinator: Combinator::Attached,
            value: ElementValue::Parent,
        },
        Element::named(Combinator::Attached, m),
    ]);
    assert_eq!(selector.mixin_elements().collect::<Vec<_>>(), vec![m]);
    assert_eq!(selector.to_css(&interner), "&.m");
}

#[test]
fn selector_css_uses_combinators() {
    let interner = StringInterner::new();
    let descendant = Selector::from_names(&names(&interner, &[".a", ".b"]));
    let compound = Selector::compound(&names(&interner, &["#ns", ".m"]));
    assert_eq!(descendant.to_css(&interner), ".a .b");
    assert_eq!(compound.to_css(&interner), "#ns.m");
}

#[test]
fn required_counts_patterns_and_variadic() {
    let interner = StringInterner::new();
    let a = interner.intern("@a");
    let b = interner.intern("@b");
    let rest = interner.intern("@rest");
    let definition = MixinDefinition::new(
        interner.intern(".m"),
        vec![
            MixinParam::Pattern(Expr::keyword("dark")),
            MixinParam::named(a),
            MixinParam::with_default(b, Expr::number(2.0)),
            MixinParam::Variadic(Some(rest)),
        ],
        Vec::new(),
    );
    assert_eq!(definition.arity(), 4);
    assert_eq!(definition.required(), 3);
    assert!(definition.is_variadic());
    assert_eq!(definition.optional_parameters().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn ruleset_guard_is_last_selector_condition() {
    let interner = StringInterner::new();
    let guard = Condition::truthy(Expr::keyword("true"));
    let ruleset = Ruleset::new(
        vec![
            Selector::from_names(&names(&interner, &[".a"])),
            Selector::from_names(&names(&interner, &[".b"])).with_condition(guard.clone()),
        ],
        Vec::new(),
    );
    assert!(ruleset.has_css_guard());
    assert_eq!(ruleset.guard(), Some(&guard));
}

#[test]
fn compare_op_accepts_both_less_equal_spellings() {
    assert_eq!(CompareOp::parse("<="), Some(CompareOp::LtEq));
    assert_eq!(CompareOp::parse("=<"), Some(CompareOp::LtEq));
    assert_eq!(CompareOp::parse("!="), None);
}

#[test]
fn compare_op_holds() {
    use std::cmp::Ordering;
    assert!(CompareOp::LtEq.holds(Ordering::Equal));
    assert!(CompareOp::GtEq.holds(Ordering::Greater));
    assert!(!CompareOp::Eq.holds(Ordering::Less));
    assert!(!CompareOp::Lt.holds(Ordering::Greater));
}

#[test]
fn not_toggles_negation() {
    let cond = Condition::truthy(Expr::keyword("true"));
    assert!(cond.clone().not().negate);
    assert!(!cond.not().not().negate);
}
