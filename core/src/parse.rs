//! Delimiter-separated mnemonic lists folded into a bitmask.
//!
//! A list such as `"Red,Green,!Blue"` is split on `|` when the input
//! contains one and on `,` otherwise. Each token is resolved against a
//! [`MnemonicTable`] and ORed into the result, or cleared from it when the
//! token carries a leading `!`. A token that does not resolve is retried
//! once with every `-` and `_` after its first character removed, so
//! `floyd-steinberg` finds `FloydSteinberg`. Any token that still fails
//! fails the whole list.

use crate::error::ResolveError;
use crate::table::MnemonicTable;
use crate::types::MnemonicEntry;

/// Longest token the parser keeps, in bytes. Longer tokens are cut.
pub const MAX_TOKEN_LEN: usize = 4095;

/// Which part of a matched row is folded into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldField {
    /// The row's enumerated value.
    #[default]
    Value,
    /// The row's [`OptionFlags`](crate::OptionFlags) bits.
    Flags,
}

/// Outcome of a successful list parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedList {
    /// Folded bitmask.
    pub value: i64,
    /// At least one token exceeded the token limit and was cut.
    pub truncated: bool,
}

/// Configurable list parser over one table.
///
/// # Examples
///
/// ```
/// use magick_options_core::{Category, FoldField, ListParser, Registry};
///
/// let registry = Registry::builtin();
/// let channels = registry.table(Category::Channel).unwrap();
///
/// let parsed = ListParser::new(channels).parse("Red,Green").unwrap();
/// assert_eq!(parsed.value, 0x3);
///
/// // Only the first token is read in single mode.
/// let first = ListParser::new(channels).multiple(false).parse("Red,Green").unwrap();
/// assert_eq!(first.value, 0x1);
///
/// let commands = registry.table(Category::Command).unwrap();
/// let flags = ListParser::new(commands)
///     .field(FoldField::Flags)
///     .parse("-resize")
///     .unwrap();
/// assert_ne!(flags.value, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ListParser<'a> {
    table: &'a MnemonicTable,
    multiple: bool,
    field: FoldField,
    max_token_len: usize,
}

impl<'a> ListParser<'a> {
    /// Creates a parser that accepts multiple tokens and folds values.
    pub fn new(table: &'a MnemonicTable) -> Self {
        Self {
            table,
            multiple: true,
            field: FoldField::Value,
            max_token_len: MAX_TOKEN_LEN,
        }
    }

    /// Whether tokens after the first are read.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn field(mut self, field: FoldField) -> Self {
        self.field = field;
        self
    }

    /// Overrides [`MAX_TOKEN_LEN`]. A limit of zero is raised to one byte.
    pub fn max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len.max(1);
        self
    }

    /// Parses `input` into a folded bitmask.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownMnemonic`] naming the first token that
    /// does not resolve, including an empty token left by a trailing
    /// delimiter. Earlier successes are discarded.
    pub fn parse(&self, input: &str) -> Result<ParsedList, ResolveError> {
        let bytes = input.as_bytes();
        let delimiter = if input.contains('|') { b'|' } else { b',' };
        let mut pos = 0;
        let mut value = 0i64;
        let mut truncated = false;

        loop {
            while pos < bytes.len() && (is_space(bytes[pos]) || bytes[pos] == delimiter) {
                pos += 1;
            }
            let negate = pos < bytes.len() && bytes[pos] == b'!';
            if negate {
                pos += 1;
            }
            let start = pos;
            while pos < bytes.len() && !is_space(bytes[pos]) && bytes[pos] != delimiter {
                pos += 1;
            }

            let mut token = &input[start..pos];
            if token.len() > self.max_token_len {
                token = truncate_to_boundary(token, self.max_token_len);
                truncated = true;
            }

            let entry = resolve_mnemonic(self.table, token)
                .ok_or_else(|| ResolveError::UnknownMnemonic {
                    category: self.table.category(),
                    token: token.to_string(),
                })?;
            let bits = match self.field {
                FoldField::Value => entry.value,
                FoldField::Flags => i64::from(entry.flags.bits()),
            };
            if negate {
                value &= !bits;
            } else {
                value |= bits;
            }

            if !self.multiple {
                break;
            }
            match bytes[pos..].iter().position(|&b| b == delimiter) {
                Some(offset) => pos += offset,
                None => break,
            }
        }

        Ok(ParsedList { value, truncated })
    }
}

/// Resolves one token, retrying once with separators stripped.
pub(crate) fn resolve_mnemonic(
    table: &MnemonicTable,
    token: &str,
) -> Option<&'static MnemonicEntry> {
    if let Some(found) = table.find_by_name(token) {
        return Some(found.entry);
    }
    let normalized = normalize_token(token)?;
    table.find_by_name(&normalized).map(|found| found.entry)
}

/// Removes `-` and `_` after the first character, or returns `None` when
/// there is nothing to remove.
fn normalize_token(token: &str) -> Option<String> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    if !rest.contains(['-', '_']) {
        return None;
    }
    let mut normalized = String::with_capacity(token.len());
    normalized.push(first);
    normalized.extend(rest.chars().filter(|c| !matches!(c, '-' | '_')));
    Some(normalized)
}

fn truncate_to_boundary(token: &str, max: usize) -> &str {
    let mut end = max.min(token.len());
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    &token[..end]
}

/// C `isspace`: ASCII whitespace plus vertical tab.
pub(crate) fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, OptionFlags};

    static CHANNELS: &[MnemonicEntry] = &[
        MnemonicEntry::new("Undefined", 0).hidden(),
        MnemonicEntry::new("All", 0x1f),
        MnemonicEntry::new("Red", 0x1),
        MnemonicEntry::new("Green", 0x2),
        MnemonicEntry::new("Blue", 0x4),
        MnemonicEntry::new("Alpha", 0x10),
    ];

    static LEVELS: &[MnemonicEntry] = &[
        MnemonicEntry::new("AutoLevel", 1),
        MnemonicEntry::new("AutoGamma", 2).with_flags(OptionFlags::SIMPLE_OPERATOR),
        MnemonicEntry::new("Contrast", 4).with_flags(OptionFlags::DEPRECATE),
    ];

    fn channels() -> MnemonicTable {
        MnemonicTable::new(Category::Channel, CHANNELS)
    }

    fn levels() -> MnemonicTable {
        MnemonicTable::new(Category::Undefined, LEVELS)
    }

    fn parse(table: &MnemonicTable, input: &str) -> Result<i64, ResolveError> {
        ListParser::new(table).parse(input).map(|parsed| parsed.value)
    }

    #[test]
    fn test_single_token() {
        assert_eq!(parse(&channels(), "red"), Ok(0x1));
    }

    #[test]
    fn test_comma_and_pipe_lists_agree() {
        let table = channels();
        assert_eq!(parse(&table, "Red,Blue"), Ok(0x5));
        assert_eq!(parse(&table, "Red|Blue"), Ok(0x5));
        assert_eq!(parse(&table, " Red , Blue "), Ok(0x5));
    }

    #[test]
    fn test_negation_clears_bits() {
        assert_eq!(parse(&channels(), "All,!Red"), Ok(0x1f & !0x1));
        assert_eq!(parse(&channels(), "All|!Red|!Alpha"), Ok(0x0e));
    }

    #[test]
    fn test_negation_on_empty_accumulator_is_zero() {
        assert_eq!(parse(&channels(), "!Red"), Ok(0));
    }

    #[test]
    fn test_unknown_token_fails_whole_list() {
        let err = parse(&channels(), "Red,Purple,Blue").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownMnemonic {
                category: Category::Channel,
                token: "Purple".to_string(),
            }
        );
    }

    #[test]
    fn test_pipe_wins_over_comma() {
        // With a pipe present, the comma is part of the token.
        assert!(parse(&channels(), "Red,Green|Blue").is_err());
    }

    #[test]
    fn test_normalization_fallback() {
        let table = levels();
        assert_eq!(parse(&table, "auto-level"), Ok(1));
        assert_eq!(parse(&table, "auto_level"), Ok(1));
        assert_eq!(parse(&table, "AUTO-_LEVEL"), Ok(1));
        assert!(parse(&table, "autolevel-x").is_err());
    }

    #[test]
    fn test_normalization_keeps_first_character() {
        assert_eq!(normalize_token("-auto-level").as_deref(), Some("-autolevel"));
        assert_eq!(normalize_token("plain"), None);
        assert_eq!(normalize_token(""), None);
    }

    #[test]
    fn test_single_mode_stops_after_first_token() {
        let parsed = ListParser::new(&channels())
            .multiple(false)
            .parse("Red,Purple")
            .unwrap();
        assert_eq!(parsed.value, 0x1);
    }

    #[test]
    fn test_whitespace_ends_token_slot() {
        // Text after whitespace but before the next delimiter is ignored.
        assert_eq!(parse(&channels(), "Red Green"), Ok(0x1));
        assert_eq!(parse(&channels(), "Red Green,Blue"), Ok(0x5));
    }

    #[test]
    fn test_trailing_delimiter_fails() {
        assert!(parse(&channels(), "Red,").is_err());
        assert!(parse(&channels(), "").is_err());
    }

    #[test]
    fn test_flags_field() {
        let parsed = ListParser::new(&levels())
            .field(FoldField::Flags)
            .parse("AutoGamma,Contrast")
            .unwrap();
        let expected = OptionFlags::SIMPLE_OPERATOR | OptionFlags::DEPRECATE;
        assert_eq!(parsed.value, i64::from(expected.bits()));
    }

    #[test]
    fn test_truncation_is_reported() {
        let table = channels();
        let parsed = ListParser::new(&table)
            .max_token_len(3)
            .parse("Redder")
            .unwrap();
        assert!(parsed.truncated);
        assert_eq!(parsed.value, 0x1);

        let clean = ListParser::new(&table).max_token_len(3).parse("Red").unwrap();
        assert!(!clean.truncated);
    }

    #[test]
    fn test_truncation_can_cause_spurious_failure() {
        let err = ListParser::new(&channels())
            .max_token_len(4)
            .parse("Green")
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownMnemonic { token, .. } if token == "Gree"));
    }

    #[test]
    fn test_truncation_skips_rest_of_long_token() {
        let parsed = ListParser::new(&channels())
            .max_token_len(4)
            .parse("Bluexxxx,Red")
            .unwrap();
        assert_eq!(parsed.value, 0x5);
        assert!(parsed.truncated);
    }

    #[test]
    fn test_truncation_applies_to_every_token() {
        let err = ListParser::new(&channels())
            .max_token_len(3)
            .parse("Redxxxxx,Blue")
            .unwrap_err();
        assert_eq!(err, ResolveError::unknown(Category::Channel, "Blu"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        assert_eq!(truncate_to_boundary("aé", 2), "a");
        assert_eq!(truncate_to_boundary("abc", 10), "abc");
    }
}
