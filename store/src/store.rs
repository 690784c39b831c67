//! Ordered free-form option store.
//!
//! Holds user-supplied `key=value` settings such as `jpeg:quality=90` that
//! are not part of any mnemonic table. Keys compare case-insensitively with
//! the same ordinal rule as mnemonics, so `JPEG:Quality` and
//! `jpeg:quality` name one entry; the most recent spelling is kept.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;

use magick_options_core::locale_compare;
use tracing::trace;

use crate::error::{Result, StoreError};

/// Map key ordered by [`locale_compare`].
#[derive(Debug, Clone)]
struct OptionKey(String);

impl OptionKey {
    fn new(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl PartialEq for OptionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OptionKey {}

impl PartialOrd for OptionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OptionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        locale_compare(&self.0, &other.0)
    }
}

/// Ordered, case-insensitive key to string map with a restartable cursor.
///
/// # Examples
///
/// ```
/// use magick_options_store::OptionStore;
///
/// let mut options = OptionStore::new();
/// options.define("jpeg:quality=90").unwrap();
/// options.set("filter:blur", Some("0.8"));
///
/// assert_eq!(options.get("JPEG:QUALITY"), Some("90"));
/// let keys: Vec<&str> = options.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec!["filter:blur", "jpeg:quality"]);
///
/// options.set("filter:blur", None);
/// assert!(!options.contains("filter:blur"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionStore {
    entries: BTreeMap<OptionKey, String>,
    cursor: Option<OptionKey>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `key` to `value`, or deletes it when `value` is `None`.
    ///
    /// Returns the previous value. Empty strings are stored like any other
    /// value.
    pub fn set(&mut self, key: &str, value: Option<&str>) -> Option<String> {
        let Some(value) = value else {
            return self.remove(key);
        };
        trace!(key, value, "set option");
        let option_key = OptionKey::new(key);
        let previous = self.entries.remove(&option_key);
        self.entries.insert(option_key, value.to_string());
        previous
    }

    /// Applies a `key=value` definition.
    ///
    /// The split happens at the first `=`, so values may contain `=`.
    /// Without any `=` the key is set to an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDefine`] when the key is empty.
    pub fn define(&mut self, definition: &str) -> Result<()> {
        let (key, value) = definition.split_once('=').unwrap_or((definition, ""));
        if key.is_empty() {
            return Err(StoreError::InvalidDefine(definition.to_string()));
        }
        self.set(key, Some(value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&OptionKey::new(key)).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&OptionKey::new(key))
    }

    /// Deletes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Removes `key` and hands back its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.entries.remove(&OptionKey::new(key));
        if removed.is_some() {
            trace!(key, "removed option");
        }
        removed
    }

    /// Removes every entry and rewinds the cursor.
    pub fn reset(&mut self) {
        trace!(count = self.entries.len(), "reset options");
        self.entries.clear();
        self.cursor = None;
    }

    /// Rewinds the cursor used by [`next_key`](Self::next_key).
    pub fn reset_iterator(&mut self) {
        self.cursor = None;
    }

    /// Advances the cursor and returns the next key in order.
    ///
    /// Entries added or removed between calls are seen according to their
    /// position relative to the cursor.
    ///
    /// ```
    /// use magick_options_store::OptionStore;
    ///
    /// let mut options = OptionStore::new();
    /// options.define("b=2").unwrap();
    /// options.define("a=1").unwrap();
    ///
    /// assert_eq!(options.next_key().as_deref(), Some("a"));
    /// assert_eq!(options.next_key().as_deref(), Some("b"));
    /// assert_eq!(options.next_key(), None);
    ///
    /// options.reset_iterator();
    /// assert_eq!(options.next_key().as_deref(), Some("a"));
    /// ```
    pub fn next_key(&mut self) -> Option<String> {
        let next = match &self.cursor {
            None => self.entries.keys().next(),
            Some(cursor) => self
                .entries
                .range((Bound::Excluded(cursor), Bound::Unbounded))
                .next()
                .map(|(key, _)| key),
        }
        .cloned()?;
        let key = next.0.clone();
        self.cursor = Some(next);
        Some(key)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.0.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_ignore_case() {
        let mut options = OptionStore::new();
        options.set("Density", Some("72"));
        assert_eq!(options.get("density"), Some("72"));
        assert!(options.contains("DENSITY"));
    }

    #[test]
    fn test_set_replaces_value_and_spelling() {
        let mut options = OptionStore::new();
        assert_eq!(options.set("quality", Some("80")), None);
        assert_eq!(options.set("Quality", Some("90")), Some("80".to_string()));
        assert_eq!(options.len(), 1);
        assert_eq!(options.iter().next(), Some(("Quality", "90")));
    }

    #[test]
    fn test_set_none_deletes() {
        let mut options = OptionStore::new();
        options.set("quality", Some("80"));
        assert_eq!(options.set("quality", None), Some("80".to_string()));
        assert!(options.is_empty());
        assert_eq!(options.set("quality", None), None);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let mut options = OptionStore::new();
        options.set("comment", Some(""));
        assert_eq!(options.get("comment"), Some(""));
    }

    #[test]
    fn test_define_splits_at_first_equals() {
        let mut options = OptionStore::new();
        options.define("label=a=b").unwrap();
        options.define("verbose").unwrap();
        assert_eq!(options.get("label"), Some("a=b"));
        assert_eq!(options.get("verbose"), Some(""));
    }

    #[test]
    fn test_define_rejects_empty_key() {
        let mut options = OptionStore::new();
        let err = options.define("=90").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDefine(ref text) if text == "=90"));
        assert!(options.define("").is_err());
    }

    #[test]
    fn test_delete_and_remove() {
        let mut options = OptionStore::new();
        options.define("a=1").unwrap();
        options.define("b=2").unwrap();
        assert!(options.delete("A"));
        assert!(!options.delete("a"));
        assert_eq!(options.remove("b"), Some("2".to_string()));
        assert!(options.is_empty());
    }

    #[test]
    fn test_iteration_is_ordinal() {
        let mut options = OptionStore::new();
        for key in ["zeta", "Alpha", "beta", "_under"] {
            options.set(key, Some("x"));
        }
        let keys: Vec<&str> = options.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["_under", "Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_cursor_survives_removal_of_current_key() {
        let mut options = OptionStore::new();
        for key in ["a", "b", "c"] {
            options.set(key, Some("1"));
        }
        assert_eq!(options.next_key().as_deref(), Some("a"));
        assert_eq!(options.next_key().as_deref(), Some("b"));
        options.delete("b");
        assert_eq!(options.next_key().as_deref(), Some("c"));
        assert_eq!(options.next_key(), None);
        assert_eq!(options.next_key(), None);
    }

    #[test]
    fn test_reset_clears_and_rewinds() {
        let mut options = OptionStore::new();
        options.define("a=1").unwrap();
        options.next_key();
        options.reset();
        assert!(options.is_empty());
        options.define("b=2").unwrap();
        assert_eq!(options.next_key().as_deref(), Some("b"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut options = OptionStore::new();
        options.define("a=1").unwrap();
        let mut copy = options.clone();
        copy.define("a=2").unwrap();
        assert_eq!(options.get("a"), Some("1"));
        assert_eq!(copy.get("a"), Some("2"));
    }
}
