//! Selectors and their elements.

use super::Condition;
use crate::{Name, Span, StringLookup};

/// How an element attaches to the previous one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Written directly after the previous element: `.a.b`.
    #[default]
    Attached,
    /// Whitespace: `.a .b`.
    Descendant,
    Child,
    Adjacent,
    Sibling,
}

impl Combinator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Combinator::Attached => "",
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::Adjacent => " + ",
            Combinator::Sibling => " ~ ",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementValue {
    /// Simple selector text with its prefix: `.m`, `#ns`, `div`.
    Name(Name),
    /// `&`.
    Parent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    pub combinator: Combinator,
    pub value: ElementValue,
}

impl Element {
    pub fn named(combinator: Combinator, name: Name) -> Self {
        Element {
            combinator,
            value: ElementValue::Name(name),
        }
    }
}

/// One selector of a ruleset, with the CSS guard attached to it, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    pub elements: Vec<Element>,
    pub condition: Option<Condition>,
    pub span: Span,
}

impl Selector {
    pub fn new(elements: Vec<Element>) -> Self {
        Selector {
            elements,
            condition: None,
            span: Span::DUMMY,
        }
    }

    /// Selector made of descendant-combined simple names: `#ns .m`.
    pub fn from_names(names: &[Name]) -> Self {
        let elements = names
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                let combinator = if i == 0 {
                    Combinator::Attached
                } else {
                    Combinator::Descendant
                };
                Element::named(combinator, name)
            })
            .collect();
        Self::new(elements)
    }

    /// Compound selector written without whitespace: `#ns.m`.
    pub fn compound(names: &[Name]) -> Self {
        Self::new(
            names
                .iter()
                .map(|&name| Element::named(Combinator::Attached, name))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Element names used for mixin lookup. Combinators and `&` are ignored.
    pub fn mixin_elements(&self) -> impl Iterator<Item = Name> + '_ {
        self.elements.iter().filter_map(|element| match element.value {
            ElementValue::Name(name) => Some(name),
            ElementValue::Parent => None,
        })
    }

    /// Number of leading call elements this selector consumes, or 0 if it
    /// does not match. A selector matches when all of its mixin elements are
    /// a prefix of `call`.
    pub fn match_elements(&self, call: &[Name]) -> usize {
        let mut consumed = 0;
        for (own, &wanted) in self.mixin_elements().zip(call) {
            if own != wanted {
                return 0;
            }
            consumed += 1;
        }
        if consumed == 0 || consumed < self.mixin_elements().count() {
            return 0;
        }
        consumed
    }

    /// CSS text of the selector (guard omitted).
    pub fn to_css(&self, names: &dyn StringLookup) -> String {
        let mut out = String::new();
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.push_str(element.combinator.as_str());
            }
            match element.value {
                ElementValue::Name(name) => out.push_str(names.lookup(name)),
                ElementValue::Parent => out.push('&'),
            }
        }
        out
    }
}
