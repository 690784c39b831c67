//! Category-indexed registry of mnemonic tables.
//!
//! A [`Registry`] maps each [`Category`] to one table and routes lookups:
//! the command table goes through binary search, every other table through
//! a linear scan. Tables are injected through [`RegistryBuilder`], so tests
//! can resolve against small synthetic tables; [`Registry::builtin`] wires
//! up the full built-in set.
//!
//! # Examples
//!
//! ```
//! use magick_options_core::*;
//!
//! static FILTERS: &[MnemonicEntry] = &[
//!     MnemonicEntry::new("Undefined", 0).hidden(),
//!     MnemonicEntry::new("Box", 1),
//!     MnemonicEntry::new("Lanczos", 2),
//! ];
//!
//! let registry = Registry::builder()
//!     .table(Category::Filter, FILTERS)
//!     .build()
//!     .unwrap();
//! assert_eq!(registry.lookup(Category::Filter, "lanczos").unwrap().value(), 2);
//! assert_eq!(registry.mnemonic(Category::Filter, 7).unwrap(), "undefined");
//! assert_eq!(registry.list(Category::Filter).unwrap(), vec!["Box", "Lanczos"]);
//! assert!(registry.table(Category::Gravity).is_err());
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::channel::{parse_channel_spec, parse_pixel_channel};
use crate::command::CommandTable;
use crate::error::ResolveError;
use crate::parse::{FoldField, ListParser, resolve_mnemonic};
use crate::table::MnemonicTable;
use crate::tables;
use crate::types::{Category, Lookup, MnemonicEntry, OptionFlags};
use crate::validate::{TableError, validate_command_order, validate_table};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    match RegistryBuilder::with_builtin_tables().build() {
        Ok(registry) => registry,
        Err(errors) => {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            panic!("built-in option tables are invalid: {}", details.join("; "))
        }
    }
});

/// Immutable mapping from categories to mnemonic tables.
#[derive(Debug)]
pub struct Registry {
    tables: BTreeMap<Category, MnemonicTable>,
    commands: Option<CommandTable>,
}

/// Collects tables for a [`Registry`] and validates them on
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: Vec<(Category, &'static [MnemonicEntry])>,
}

impl RegistryBuilder {
    /// A builder preloaded with every built-in table.
    ///
    /// Building it reports validation problems as errors, where
    /// [`Registry::builtin`] would panic.
    pub fn with_builtin_tables() -> Self {
        tables::builtin()
            .into_iter()
            .fold(Self::default(), |builder, (category, entries)| {
                builder.table(category, entries)
            })
    }

    /// Registers `entries` as the table for `category`.
    pub fn table(mut self, category: Category, entries: &'static [MnemonicEntry]) -> Self {
        self.tables.push((category, entries));
        self
    }

    /// Validates every table and builds the registry.
    ///
    /// All problems are collected rather than stopping at the first one.
    /// The [`Category::Command`] table must also be in
    /// [`compare_command`](crate::compare_command) order.
    pub fn build(self) -> Result<Registry, Vec<TableError>> {
        let mut errors = Vec::new();
        let mut tables = BTreeMap::new();
        let mut commands = None;

        for (category, entries) in self.tables {
            if tables.contains_key(&category) {
                errors.push(TableError::DuplicateCategory(category));
                continue;
            }
            errors.extend(validate_table(category, entries));
            if category == Category::Command {
                errors.extend(validate_command_order(entries));
                commands = Some(CommandTable::new(entries));
            }
            tables.insert(category, MnemonicTable::new(category, entries));
        }

        if errors.is_empty() {
            Ok(Registry { tables, commands })
        } else {
            Err(errors)
        }
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The process-wide registry over the built-in tables.
    ///
    /// Built and validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if a built-in table fails validation, which means the table
    /// data itself is broken.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Categories that have a table, in discriminant order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.tables.keys().copied()
    }

    /// Selects the table for `category`.
    pub fn table(&self, category: Category) -> Result<&MnemonicTable, ResolveError> {
        self.tables
            .get(&category)
            .ok_or(ResolveError::UnknownCategory(category))
    }

    /// The sorted command table.
    pub fn command_table(&self) -> Result<&CommandTable, ResolveError> {
        self.commands
            .as_ref()
            .ok_or(ResolveError::UnknownCategory(Category::Command))
    }

    /// Resolves `name` to its row in `category`, ignoring case.
    ///
    /// Command lookups use binary search. No name normalization is
    /// applied; see [`parse`](Self::parse) for that.
    pub fn lookup(&self, category: Category, name: &str) -> Result<Lookup<'static>, ResolveError> {
        let found = if category == Category::Command {
            self.command_table()?.find(name)
        } else {
            self.table(category)?.find_by_name(name)
        };
        found.ok_or_else(|| ResolveError::unknown(category, name))
    }

    /// Reverse lookup for display.
    ///
    /// Returns the first name carrying `value`, or `"undefined"` when none
    /// does. Fails only for a category without a table.
    pub fn mnemonic(&self, category: Category, value: i64) -> Result<&'static str, ResolveError> {
        Ok(self.table(category)?.find_by_value(value))
    }

    /// Looks up a command-line option such as `-resize` or `+repage`.
    ///
    /// A miss returns [`UNDEFINED_COMMAND`](crate::UNDEFINED_COMMAND).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidCommandToken`] when `token` is empty
    /// or does not start with an ASCII punctuation sigil.
    ///
    /// ```
    /// use magick_options_core::{OptionFlags, Registry};
    ///
    /// let registry = Registry::builtin();
    /// let resize = registry.find_command("-resize").unwrap();
    /// assert_eq!(resize.value, 1);
    /// assert!(resize.flags.contains(OptionFlags::SIMPLE_OPERATOR));
    ///
    /// assert!(registry.find_command("-no-such-option").unwrap().is_undefined());
    /// assert!(registry.find_command("resize").is_err());
    /// ```
    pub fn find_command(&self, token: &str) -> Result<&'static MnemonicEntry, ResolveError> {
        match token.chars().next() {
            Some(sigil) if sigil.is_ascii_punctuation() => {}
            _ => return Err(ResolveError::InvalidCommandToken(token.to_string())),
        }
        Ok(self.command_table()?.lookup(token))
    }

    /// Every name in `category`, hidden ones included.
    pub fn mnemonics(&self, category: Category) -> Result<Vec<&'static str>, ResolveError> {
        Ok(self.table(category)?.names())
    }

    /// Names in `category` suitable for listing to a user.
    pub fn list(&self, category: Category) -> Result<Vec<&'static str>, ResolveError> {
        Ok(self.table(category)?.visible_names())
    }

    /// Resolves a user-typed category name such as `"filter"` or
    /// `"virtual-pixel"`.
    pub fn category(&self, name: &str) -> Result<Category, ResolveError> {
        let list = self.table(Category::List)?;
        resolve_mnemonic(list, name)
            .and_then(|entry| Category::from_value(entry.value))
            .ok_or_else(|| ResolveError::unknown(Category::List, name))
    }

    /// Parses a mnemonic or mnemonic list into a value.
    ///
    /// With `allow_multiple` unset only the first token is read.
    ///
    /// ```
    /// use magick_options_core::{Category, Registry};
    ///
    /// let registry = Registry::builtin();
    /// let dither = registry.parse(Category::Dither, false, "floyd-steinberg").unwrap();
    /// assert_eq!(registry.mnemonic(Category::Dither, dither).unwrap(), "FloydSteinberg");
    /// ```
    pub fn parse(
        &self,
        category: Category,
        allow_multiple: bool,
        input: &str,
    ) -> Result<i64, ResolveError> {
        ListParser::new(self.table(category)?)
            .multiple(allow_multiple)
            .parse(input)
            .map(|parsed| parsed.value)
    }

    /// Parses a mnemonic list and folds the matched rows' flags instead of
    /// their values.
    pub fn parse_flags(
        &self,
        category: Category,
        allow_multiple: bool,
        input: &str,
    ) -> Result<OptionFlags, ResolveError> {
        ListParser::new(self.table(category)?)
            .multiple(allow_multiple)
            .field(FoldField::Flags)
            .parse(input)
            .map(|parsed| OptionFlags::from_bits_truncate(parsed.value as u32))
    }

    /// Parses a channel mask, accepting full names or letter shorthand.
    pub fn parse_channels(&self, input: &str) -> Result<i64, ResolveError> {
        parse_channel_spec(self.table(Category::Channel)?, input)
    }

    /// Parses a single pixel channel by name or number.
    pub fn parse_pixel_channel(&self, input: &str) -> Result<i64, ResolveError> {
        parse_pixel_channel(self.table(Category::PixelChannel)?, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::UNDEFINED_COMMAND;

    static GRAVITY: &[MnemonicEntry] = &[
        MnemonicEntry::new("Undefined", 0).hidden(),
        MnemonicEntry::new("Center", 1),
        MnemonicEntry::new("NorthWest", 2),
        MnemonicEntry::new("Static", 3).with_flags(OptionFlags::DEPRECATE).hidden(),
    ];

    static COMMANDS: &[MnemonicEntry] = &[
        MnemonicEntry::new("+adjoin", 0).with_flags(OptionFlags::IMAGE_INFO),
        MnemonicEntry::new("-adjoin", 0).with_flags(OptionFlags::IMAGE_INFO),
        MnemonicEntry::new("-blur", 1).with_flags(OptionFlags::SIMPLE_OPERATOR),
        MnemonicEntry::new("-write", 1).with_flags(OptionFlags::FIRE.union(OptionFlags::NO_IMAGE_OPERATOR)),
    ];

    static LIST: &[MnemonicEntry] = &[
        MnemonicEntry::new("Gravity", Category::Gravity as i64),
        MnemonicEntry::new("VirtualPixel", Category::VirtualPixel as i64),
    ];

    fn registry() -> Registry {
        Registry::builder()
            .table(Category::Gravity, GRAVITY)
            .table(Category::Command, COMMANDS)
            .table(Category::List, LIST)
            .build()
            .unwrap()
    }

    #[test]
    fn test_unknown_category() {
        let err = registry().lookup(Category::Filter, "Box").unwrap_err();
        assert_eq!(err, ResolveError::UnknownCategory(Category::Filter));
        assert_eq!(err.to_string(), "no mnemonic table for category Filter");
    }

    #[test]
    fn test_lookup_and_reverse() {
        let registry = registry();
        let found = registry.lookup(Category::Gravity, "northwest").unwrap();
        assert_eq!(found.index, 2);
        assert_eq!(registry.mnemonic(Category::Gravity, 2).unwrap(), "NorthWest");
        assert_eq!(registry.mnemonic(Category::Gravity, 42).unwrap(), "undefined");
    }

    #[test]
    fn test_lookup_miss_names_token() {
        let err = registry().lookup(Category::Gravity, "north-west").unwrap_err();
        assert_eq!(err, ResolveError::unknown(Category::Gravity, "north-west"));
    }

    #[test]
    fn test_lookup_routes_commands_through_binary_search() {
        let found = registry().lookup(Category::Command, "-BLUR").unwrap();
        assert_eq!(found.index, 2);
        assert!(registry().lookup(Category::Command, "+blur").is_err());
    }

    #[test]
    fn test_hidden_rows_resolve_but_are_not_listed() {
        let registry = registry();
        assert_eq!(registry.lookup(Category::Gravity, "static").unwrap().value(), 3);
        assert_eq!(registry.list(Category::Gravity).unwrap(), vec!["Center", "NorthWest"]);
        assert_eq!(registry.mnemonics(Category::Gravity).unwrap().len(), 4);
    }

    #[test]
    fn test_find_command_rejects_bare_words() {
        let registry = registry();
        for token in ["", "blur", "éblur"] {
            assert_eq!(
                registry.find_command(token),
                Err(ResolveError::InvalidCommandToken(token.to_string()))
            );
        }
    }

    #[test]
    fn test_find_command_miss_is_sentinel() {
        let entry = registry().find_command("-sharpen").unwrap();
        assert_eq!(entry, &UNDEFINED_COMMAND);
    }

    #[test]
    fn test_find_command_without_command_table() {
        let registry = Registry::builder().table(Category::Gravity, GRAVITY).build().unwrap();
        assert_eq!(
            registry.find_command("-blur"),
            Err(ResolveError::UnknownCategory(Category::Command))
        );
    }

    #[test]
    fn test_category_by_name() {
        let registry = registry();
        assert_eq!(registry.category("gravity"), Ok(Category::Gravity));
        assert_eq!(registry.category("virtual-pixel"), Ok(Category::VirtualPixel));
        assert!(registry.category("Font").is_err());
    }

    #[test]
    fn test_parse_normalizes_and_stops_early() {
        let registry = registry();
        assert_eq!(registry.parse(Category::Gravity, false, "North_West,Center"), Ok(2));
        assert_eq!(registry.parse(Category::Gravity, true, "North_West,Center"), Ok(3));
    }

    #[test]
    fn test_parse_flags_folds_command_flags() {
        let flags = registry()
            .parse_flags(Category::Command, true, "-blur,-write")
            .unwrap();
        assert_eq!(
            flags,
            OptionFlags::SIMPLE_OPERATOR | OptionFlags::FIRE | OptionFlags::NO_IMAGE_OPERATOR
        );
    }

    #[test]
    fn test_builtin_tables_build_cleanly() {
        let registry = RegistryBuilder::with_builtin_tables().build().unwrap();
        assert_eq!(registry.categories().count(), Registry::builtin().categories().count());
        assert!(registry.command_table().unwrap().active_len() > 0);
    }

    #[test]
    fn test_builtin_builder_reports_errors_instead_of_panicking() {
        let errors = RegistryBuilder::with_builtin_tables()
            .table(Category::Gravity, GRAVITY)
            .build()
            .unwrap_err();
        assert_eq!(errors, vec![TableError::DuplicateCategory(Category::Gravity)]);
    }

    #[test]
    fn test_build_rejects_duplicate_category() {
        let errors = Registry::builder()
            .table(Category::Gravity, GRAVITY)
            .table(Category::Gravity, GRAVITY)
            .build()
            .unwrap_err();
        assert_eq!(errors, vec![TableError::DuplicateCategory(Category::Gravity)]);
    }

    #[test]
    fn test_build_rejects_unsorted_command_table() {
        static UNSORTED: &[MnemonicEntry] = &[MnemonicEntry::new("-blur", 1), MnemonicEntry::new("-adjoin", 0)];
        let errors = Registry::builder()
            .table(Category::Command, UNSORTED)
            .build()
            .unwrap_err();
        assert!(matches!(errors[0], TableError::CommandOutOfOrder { index: 1, .. }));
    }

    #[test]
    fn test_order_is_only_checked_for_commands() {
        static REVERSED: &[MnemonicEntry] = &[MnemonicEntry::new("Zeta", 1), MnemonicEntry::new("Alpha", 2)];
        assert!(Registry::builder().table(Category::Align, REVERSED).build().is_ok());
    }
}
