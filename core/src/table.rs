//! Mnemonic tables and their linear search.

use std::cmp::Ordering;

use crate::types::{Category, Lookup, MnemonicEntry};

/// Display fallback returned by reverse lookups that match nothing.
pub const UNDEFINED_MNEMONIC: &str = "undefined";

/// Case-insensitive, locale-independent ordinal comparison.
///
/// ASCII letters fold to lowercase; every other byte compares as-is.
///
/// ```
/// use std::cmp::Ordering;
/// use magick_options_core::locale_compare;
///
/// assert_eq!(locale_compare("sRGB", "SRGB"), Ordering::Equal);
/// assert_eq!(locale_compare("iconGeometry", "iconic"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// An ordered, immutable table of mnemonics for one category.
#[derive(Debug, Clone, Copy)]
pub struct MnemonicTable {
    category: Category,
    entries: &'static [MnemonicEntry],
}

impl MnemonicTable {
    pub fn new(category: Category, entries: &'static [MnemonicEntry]) -> Self {
        Self { category, entries }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &'static [MnemonicEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the first row whose name matches `name`, ignoring case.
    ///
    /// Earlier rows win, so canonical spellings listed before their aliases
    /// are the ones reported.
    pub fn find_by_name(&self, name: &str) -> Option<Lookup<'static>> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name.eq_ignore_ascii_case(name))
            .map(|(index, entry)| Lookup { index, entry })
    }

    /// Returns the name of the first row carrying `value`, or
    /// [`UNDEFINED_MNEMONIC`] when no row does.
    pub fn find_by_value(&self, value: i64) -> &'static str {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map_or(UNDEFINED_MNEMONIC, |entry| entry.name)
    }

    /// Every name in table order, hidden rows included.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Names of the rows that are not hidden, in table order.
    pub fn visible_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| !entry.hidden)
            .map(|entry| entry.name)
            .collect()
    }
}
