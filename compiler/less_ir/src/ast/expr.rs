//! Value expressions.

use std::rc::Rc;

use super::{BinaryOp, Ruleset};
use crate::{Name, Span, Unit};

/// Constant written directly in the source.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Number with optional unit: `5`, `10px`, `50%`.
    Dimension { value: f64, unit: Unit },
    /// Color with channels in `0..=255` and alpha in `0..=1`.
    Color { rgb: [f64; 3], alpha: f64 },
    /// Bare identifier such as `red`, `true` or `solid`.
    Keyword(Box<str>),
    /// String literal. `escaped` is the `~"..."` form, printed without quotes.
    Quoted {
        text: Box<str>,
        quote: char,
        escaped: bool,
    },
    /// Raw CSS text the parser did not interpret.
    Anonymous(Box<str>),
    /// `url(...)`.
    Url(Box<str>),
}

/// Expression tree for property values, arguments, defaults and guards.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// `@name`. The name includes the `@`.
    Variable { name: Name, span: Span },
    Operation {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Unary minus, `-@x`.
    Negative(Box<Expr>),
    Paren(Box<Expr>),
    /// `name(args)`: a built-in function or a CSS function passed through.
    Call {
        name: Name,
        args: Vec<Expr>,
        span: Span,
    },
    /// Space separated sequence: `1px solid red`.
    Spaced(Vec<Expr>),
    /// Comma separated sequence: `a, b, c`.
    List(Vec<Expr>),
    /// `{ ... }` assigned to a variable or passed as an argument.
    DetachedRuleset(Rc<Ruleset>),
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Literal(Literal::Dimension {
            value,
            unit: Unit::None,
        })
    }

    pub fn dimension(value: f64, unit: Unit) -> Expr {
        Expr::Literal(Literal::Dimension { value, unit })
    }

    pub fn keyword(text: &str) -> Expr {
        Expr::Literal(Literal::Keyword(text.into()))
    }

    pub fn quoted(text: &str) -> Expr {
        Expr::Literal(Literal::Quoted {
            text: text.into(),
            quote: '"',
            escaped: false,
        })
    }

    /// `~"text"`.
    pub fn escaped(text: &str) -> Expr {
        Expr::Literal(Literal::Quoted {
            text: text.into(),
            quote: '"',
            escaped: true,
        })
    }

    pub fn anonymous(text: &str) -> Expr {
        Expr::Literal(Literal::Anonymous(text.into()))
    }

    pub fn url(text: &str) -> Expr {
        Expr::Literal(Literal::Url(text.into()))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Expr {
        Expr::Literal(Literal::Color {
            rgb: [f64::from(r), f64::from(g), f64::from(b)],
            alpha: 1.0,
        })
    }

    pub fn variable(name: Name) -> Expr {
        Expr::Variable {
            name,
            span: Span::DUMMY,
        }
    }

    pub fn call(name: Name, args: Vec<Expr>) -> Expr {
        Expr::Call {
            name,
            args,
            span: Span::DUMMY,
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Operation {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn negative(inner: Expr) -> Expr {
        Expr::Negative(Box::new(inner))
    }

    pub fn paren(inner: Expr) -> Expr {
        Expr::Paren(Box::new(inner))
    }

    pub fn spaced(items: Vec<Expr>) -> Expr {
        Expr::Spaced(items)
    }

    pub fn list(items: Vec<Expr>) -> Expr {
        Expr::List(items)
    }

    pub fn detached(ruleset: Ruleset) -> Expr {
        Expr::DetachedRuleset(Rc::new(ruleset))
    }
}
