//! Source locations.
//!
//! `Span` is a compact byte range; `Location` pairs it with the file the
//! node came from so diagnostics raised deep inside a mixin expansion can
//! still point at the right stylesheet.

use std::fmt;

use crate::Name;

/// Byte range in a stylesheet, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for nodes synthesized by the evaluator.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Where a node was written: span plus the interned file name, if known.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Location {
    pub span: Span,
    pub file: Option<Name>,
}

impl Location {
    pub const DUMMY: Location = Location {
        span: Span::DUMMY,
        file: None,
    };

    #[inline]
    pub const fn new(span: Span) -> Self {
        Location { span, file: None }
    }

    #[inline]
    #[must_use]
    pub const fn in_file(self, file: Name) -> Self {
        Location {
            span: self.span,
            file: Some(file),
        }
    }
}

impl From<Span> for Location {
    fn from(span: Span) -> Self {
        Location::new(span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
