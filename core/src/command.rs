//! Binary search over the command-option table.
//!
//! The command table has several hundred rows and is probed for every
//! argument on a command line, so it alone is kept sorted and searched in
//! `O(log n)`. The sort key ignores the leading sigil (`-` or `+`) first and
//! only then breaks ties on it, which keeps the set and unset forms of an
//! option next to each other.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use crate::table::locale_compare;
use crate::types::{Lookup, MnemonicEntry};

/// Sentinel returned when a command token matches no row.
pub static UNDEFINED_COMMAND: MnemonicEntry = MnemonicEntry::new("", 0);

const LEN_UNKNOWN: usize = usize::MAX;

fn split_sigil(token: &str) -> (Option<char>, &str) {
    let mut chars = token.chars();
    let sigil = chars.next();
    (sigil, chars.as_str())
}

/// Orders two command mnemonics by `(name[1..], name[0])`.
///
/// The remainder compares case-insensitively; the sigil compares exactly.
///
/// ```
/// use std::cmp::Ordering;
/// use magick_options_core::compare_command;
///
/// assert_eq!(compare_command("+resize", "-resize"), Ordering::Less);
/// assert_eq!(compare_command("-RESIZE", "-resize"), Ordering::Equal);
/// assert_eq!(compare_command("-zoom", "+adjoin"), Ordering::Greater);
/// ```
pub fn compare_command(a: &str, b: &str) -> Ordering {
    let (a_sigil, a_rest) = split_sigil(a);
    let (b_sigil, b_rest) = split_sigil(b);
    locale_compare(a_rest, b_rest).then_with(|| a_sigil.cmp(&b_sigil))
}

/// The sorted command-option table.
#[derive(Debug)]
pub struct CommandTable {
    entries: &'static [MnemonicEntry],
    active_len: AtomicUsize,
}

impl CommandTable {
    /// Wraps a slice that is already sorted by [`compare_command`].
    ///
    /// Ordering is checked by [`validate_command_order`](crate::validate_command_order)
    /// when the table is registered.
    pub fn new(entries: &'static [MnemonicEntry]) -> Self {
        Self {
            entries,
            active_len: AtomicUsize::new(LEN_UNKNOWN),
        }
    }

    pub fn entries(&self) -> &'static [MnemonicEntry] {
        self.entries
    }

    /// Number of searchable rows, counted once and then cached.
    ///
    /// Racing first calls each compute the same count and publish it; the
    /// value never changes afterwards.
    pub fn active_len(&self) -> usize {
        let cached = self.active_len.load(AtomicOrdering::Relaxed);
        if cached != LEN_UNKNOWN {
            return cached;
        }
        let len = self
            .entries
            .iter()
            .take_while(|entry| !entry.is_undefined())
            .count();
        self.active_len.store(len, AtomicOrdering::Relaxed);
        len
    }

    /// Binary search for `token`, returning the row and its index.
    pub fn find(&self, token: &str) -> Option<Lookup<'static>> {
        let all: &'static [MnemonicEntry] = self.entries;
        let entries = &all[..self.active_len()];
        entries
            .binary_search_by(|probe| compare_command(probe.name, token))
            .ok()
            .map(|index| Lookup {
                index,
                entry: &entries[index],
            })
    }

    /// Binary search for `token`, returning [`UNDEFINED_COMMAND`] on a miss.
    pub fn lookup(&self, token: &str) -> &'static MnemonicEntry {
        self.find(token)
            .map_or(&UNDEFINED_COMMAND, |found| found.entry)
    }

    /// Reference linear scan with the same matching rule as [`lookup`](Self::lookup).
    pub fn linear_lookup(&self, token: &str) -> &'static MnemonicEntry {
        self.entries
            .iter()
            .find(|entry| compare_command(entry.name, token) == Ordering::Equal)
            .unwrap_or(&UNDEFINED_COMMAND)
    }
}

/// Returns `true` when `arg` looks like a command option.
///
/// That is a `-` or `+` followed by another `-` or a letter. A lone sigil is
/// never an option.
///
/// ```
/// use magick_options_core::is_command_option;
///
/// assert!(is_command_option("-resize"));
/// assert!(is_command_option("+repage"));
/// assert!(is_command_option("--"));
/// assert!(!is_command_option("-5"));
/// assert!(!is_command_option("image.png"));
/// ```
pub fn is_command_option(arg: &str) -> bool {
    let mut chars = arg.chars();
    match chars.next() {
        Some('-' | '+') => {}
        _ => return false,
    }
    match chars.next() {
        None => false,
        Some(next) => next == '-' || next.is_ascii_alphabetic(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionFlags;

    static COMMANDS: &[MnemonicEntry] = &[
        MnemonicEntry::new("(", 0).with_flags(OptionFlags::NO_IMAGE_OPERATOR),
        MnemonicEntry::new(")", 0).with_flags(OptionFlags::NO_IMAGE_OPERATOR),
        MnemonicEntry::new("+adjoin", 0).with_flags(OptionFlags::IMAGE_INFO),
        MnemonicEntry::new("-adjoin", 0).with_flags(OptionFlags::IMAGE_INFO),
        MnemonicEntry::new("-blur", 1).with_flags(OptionFlags::SIMPLE_OPERATOR),
        MnemonicEntry::new("-subimage", 0).with_flags(OptionFlags::LIST_OPERATOR),
        MnemonicEntry::new("+subimage-search", 0).with_flags(OptionFlags::NON_MAGICK),
        MnemonicEntry::new("-subimage-search", 0).with_flags(OptionFlags::NON_MAGICK),
    ];

    #[test]
    fn test_lookup_finds_both_sigils() {
        let table = CommandTable::new(COMMANDS);
        assert_eq!(table.lookup("+adjoin").name, "+adjoin");
        assert_eq!(table.lookup("-adjoin").name, "-adjoin");
        assert_eq!(table.lookup("-BLUR").value, 1);
    }

    #[test]
    fn test_lookup_miss_returns_sentinel() {
        let table = CommandTable::new(COMMANDS);
        let miss = table.lookup("+blur");
        assert!(miss.is_undefined());
        assert_eq!(miss.value, 0);
        assert!(miss.flags.is_empty());
        assert!(table.lookup("-sharpen").is_undefined());
    }

    #[test]
    fn test_lookup_handles_prefix_names() {
        let table = CommandTable::new(COMMANDS);
        assert_eq!(table.lookup("-subimage").name, "-subimage");
        assert_eq!(table.lookup("+subimage-search").name, "+subimage-search");
        assert!(table.lookup("-subimage-s").is_undefined());
    }

    #[test]
    fn test_find_reports_index() {
        let table = CommandTable::new(COMMANDS);
        let found = table.find(")").unwrap();
        assert_eq!(found.index, 1);
    }

    #[test]
    fn test_active_len_is_memoized() {
        let table = CommandTable::new(COMMANDS);
        assert_eq!(table.active_len(), COMMANDS.len());
        assert_eq!(table.active_len(), COMMANDS.len());
    }

    #[test]
    fn test_active_len_from_many_threads() {
        let table = CommandTable::new(COMMANDS);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert_eq!(table.active_len(), COMMANDS.len()));
            }
        });
    }

    #[test]
    fn test_linear_lookup_agrees_with_binary_search() {
        let table = CommandTable::new(COMMANDS);
        for token in ["(", "+adjoin", "-Adjoin", "-blur", "+blur", "-nothing", "-subimage"] {
            assert_eq!(table.lookup(token), table.linear_lookup(token), "token {token}");
        }
    }

    #[test]
    fn test_lookup_does_not_panic_on_multibyte_sigil() {
        let table = CommandTable::new(COMMANDS);
        assert!(table.lookup("éblur").is_undefined());
        assert!(table.lookup("").is_undefined());
    }

    #[test]
    fn test_is_command_option_rejects_lone_sigils() {
        assert!(!is_command_option("-"));
        assert!(!is_command_option("+"));
        assert!(!is_command_option(""));
    }
}
