//! Table validation.
//!
//! Catches structural problems in mnemonic tables before they are
//! registered: empty names, a name listed twice under different values,
//! and a command table that is out of binary-search order.
//!
//! # Examples
//!
//! ```
//! use magick_options_core::*;
//!
//! static SORTED: &[MnemonicEntry] = &[
//!     MnemonicEntry::new("+adjoin", 0),
//!     MnemonicEntry::new("-adjoin", 0),
//!     MnemonicEntry::new("-blur", 1),
//! ];
//! assert!(validate_command_order(SORTED).is_empty());
//!
//! // `-blur` must come after `-adjoin`, whatever the sigils are.
//! static UNSORTED: &[MnemonicEntry] = &[
//!     MnemonicEntry::new("-blur", 1),
//!     MnemonicEntry::new("+adjoin", 0),
//! ];
//! let errors = validate_command_order(UNSORTED);
//! assert!(matches!(errors[0], TableError::CommandOutOfOrder { index: 1, .. }));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use thiserror::Error;

use crate::command::compare_command;
use crate::types::{Category, MnemonicEntry};

/// Table validation errors.
///
/// The `Display` impl names the table and row so a broken transcription can
/// be fixed without a debugger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row has an empty or whitespace-only name.
    #[error("{category}: row {index} has an empty mnemonic")]
    EmptyMnemonic { category: Category, index: usize },
    /// The same name (ignoring case) appears twice with different values.
    #[error(
        "{category}: {name:?} at row {index} has value {value}, but row {first} already maps it to {expected}"
    )]
    ConflictingDuplicate {
        category: Category,
        name: &'static str,
        index: usize,
        first: usize,
        value: i64,
        expected: i64,
    },
    /// A command row does not sort after the row before it.
    #[error("command table out of order at row {index}: {name:?} does not sort after {previous:?}")]
    CommandOutOfOrder {
        index: usize,
        previous: &'static str,
        name: &'static str,
    },
    /// Two tables were registered for one category.
    #[error("category {0} registered more than once")]
    DuplicateCategory(Category),
}

/// Validates one mnemonic table.
///
/// Repeated names are fine as long as they carry the same value; the first
/// row wins lookups either way, so a conflicting repeat could never be
/// reached.
pub fn validate_table(category: Category, entries: &[MnemonicEntry]) -> Vec<TableError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<String, (usize, i64)> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            errors.push(TableError::EmptyMnemonic { category, index });
            continue;
        }
        let key = entry.name.to_ascii_lowercase();
        match seen.get(&key) {
            Some(&(first, expected)) if expected != entry.value => {
                errors.push(TableError::ConflictingDuplicate {
                    category,
                    name: entry.name,
                    index,
                    first,
                    value: entry.value,
                    expected,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(key, (index, entry.value));
            }
        }
    }

    errors
}

/// Checks that `entries` are strictly ascending under [`compare_command`].
///
/// Binary search silently misses rows that are out of place, so every
/// inversion is reported.
pub fn validate_command_order(entries: &[MnemonicEntry]) -> Vec<TableError> {
    entries
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| compare_command(pair[0].name, pair[1].name) != Ordering::Less)
        .map(|(index, pair)| TableError::CommandOutOfOrder {
            index: index + 1,
            previous: pair[0].name,
            name: pair[1].name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_has_no_errors() {
        static ROWS: &[MnemonicEntry] = &[
            MnemonicEntry::new("Undefined", 0).hidden(),
            MnemonicEntry::new("Center", 1),
            MnemonicEntry::new("Middle", 1),
        ];
        assert!(validate_table(Category::Align, ROWS).is_empty());
    }

    #[test]
    fn test_empty_name_is_reported() {
        static ROWS: &[MnemonicEntry] = &[MnemonicEntry::new("Left", 1), MnemonicEntry::new(" ", 2)];
        assert_eq!(
            validate_table(Category::Align, ROWS),
            vec![TableError::EmptyMnemonic {
                category: Category::Align,
                index: 1,
            }]
        );
    }

    #[test]
    fn test_same_value_repeat_is_allowed() {
        static ROWS: &[MnemonicEntry] = &[MnemonicEntry::new("Left", 1), MnemonicEntry::new("LEFT", 1)];
        assert!(validate_table(Category::Align, ROWS).is_empty());
    }

    #[test]
    fn test_conflicting_repeat_is_reported() {
        static ROWS: &[MnemonicEntry] = &[
            MnemonicEntry::new("Left", 1),
            MnemonicEntry::new("Right", 2),
            MnemonicEntry::new("left", 3),
        ];
        let errors = validate_table(Category::Align, ROWS);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            TableError::ConflictingDuplicate {
                index: 2,
                first: 0,
                value: 3,
                expected: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_command_order_accepts_sigil_pairs() {
        static ROWS: &[MnemonicEntry] = &[
            MnemonicEntry::new("+dissimilarity-threshold", 0),
            MnemonicEntry::new("-dissimilarity-threshold", 1),
            MnemonicEntry::new("-dissolve", 1),
            MnemonicEntry::new("-subimage", 0),
            MnemonicEntry::new("-subimage-search", 0),
        ];
        assert!(validate_command_order(ROWS).is_empty());
    }

    #[test]
    fn test_command_order_reports_each_inversion() {
        static ROWS: &[MnemonicEntry] = &[
            MnemonicEntry::new("-dissolve", 1),
            MnemonicEntry::new("+dissimilarity-threshold", 0),
            MnemonicEntry::new("-subimage-search", 0),
            MnemonicEntry::new("-subimage", 0),
        ];
        let errors = validate_command_order(ROWS);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[1].to_string(),
            "command table out of order at row 3: \"-subimage\" does not sort after \"-subimage-search\""
        );
    }

    #[test]
    fn test_command_order_rejects_duplicates() {
        static ROWS: &[MnemonicEntry] = &[MnemonicEntry::new("-blur", 1), MnemonicEntry::new("-BLUR", 1)];
        assert_eq!(validate_command_order(ROWS).len(), 1);
    }
}
