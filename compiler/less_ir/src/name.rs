//! Interned identifier.

use std::fmt;

/// Index into the [`StringInterner`](crate::StringInterner).
///
/// Variable names keep their `@` sigil and mixin selector elements keep
/// their `.`/`#` prefix, so `@a` and `.a` are distinct names.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips() {
        assert_eq!(Name::from_raw(42).raw(), 42);
        assert_eq!(Name::default(), Name::EMPTY);
    }

    #[test]
    fn names_order_by_index() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
    }
}
