//! Option registry and resolver for an image-processing command line.
//!
//! This crate translates human-typed mnemonics (`"Lanczos"`, `"sRGB"`,
//! `"-resize"`) into the enumerated values and bitmasks the rest of a tool
//! works with:
//!
//! - [`Registry`] maps a [`Category`] to its [`MnemonicTable`] and resolves
//!   names in both directions. [`Registry::builtin`] covers every built-in
//!   table.
//! - [`CommandTable`] holds the command-line options, kept sorted by
//!   [`compare_command`] and searched with binary search.
//! - [`ListParser`] folds `"Red,Green,!Blue"` style lists into a bitmask,
//!   retrying unresolved tokens with `-` and `_` stripped.
//! - [`channel`] adds the single-letter channel shorthand (`"rgb"`) and
//!   pixel-channel parsing.
//!
//! Validation ([`validate_table`], [`validate_command_order`]) runs whenever
//! a registry is built, so a mis-sorted command table fails loudly instead
//! of silently missing options.
//!
//! # Example
//!
//! ```
//! use magick_options_core::*;
//!
//! let registry = Registry::builtin();
//!
//! let filter = registry.lookup(Category::Filter, "lanczos").unwrap();
//! assert_eq!(registry.mnemonic(Category::Filter, filter.value()).unwrap(), "Lanczos");
//!
//! let mask = registry.parse(Category::Channel, true, "All,!Red").unwrap();
//! assert_eq!(mask, channel::bits::COMPOSITE & !channel::bits::RED);
//!
//! let repage = registry.find_command("+repage").unwrap();
//! assert_eq!(repage.value, 0);
//! assert!(is_command_option("+repage"));
//! ```

pub mod channel;
mod command;
mod error;
mod parse;
mod registry;
mod table;
mod tables;
mod types;
mod validate;

pub use command::{CommandTable, UNDEFINED_COMMAND, compare_command, is_command_option};
pub use error::ResolveError;
pub use parse::{FoldField, ListParser, MAX_TOKEN_LEN, ParsedList};
pub use registry::{Registry, RegistryBuilder};
pub use table::{MnemonicTable, UNDEFINED_MNEMONIC, locale_compare};
pub use types::*;
pub use validate::{TableError, validate_command_order, validate_table};
