//! String interner for identifiers.
//!
//! Interned strings are leaked so lookups hand out `&'static str` without
//! holding the lock. A stylesheet has a few thousand distinct identifiers at
//! most, so a single `RwLock` is enough.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings")
            }
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Table {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Maps strings to [`Name`]s and back.
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    /// Create an interner with the empty string and the identifiers the
    /// evaluator looks up by name already present.
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(Table::default()),
        };
        interner.intern("");
        for word in PRE_INTERNED {
            interner.intern(word);
        }
        interner
    }

    /// Intern `s`, returning an error if the table is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut table = self.table.write();
        if let Some(&name) = table.map.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(table.strings.len()).map_err(|_| InternError::Overflow {
            count: table.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(index);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up an already interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// String for `name`. Unknown names resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifiers the evaluator resolves by name.
const PRE_INTERNED: &[&str] = &[
    "@arguments",
    "default",
    "true",
    "false",
    "isnumber",
    "isstring",
    "iscolor",
    "iskeyword",
    "isurl",
    "ispixel",
    "isem",
    "ispercentage",
    "isunit",
    "isruleset",
    "islist",
];

/// Anything that can turn a [`Name`] back into text.
///
/// Formatting helpers take `&dyn StringLookup` so they work with a borrowed
/// interner or a test double.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}
