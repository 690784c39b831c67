//! Free-form option store and YAML configuration.
//!
//! Mnemonic tables cover enumerated settings; everything else a user passes
//! as `-define key=value` lands in an [`OptionStore`], an ordered map with
//! case-insensitive keys. [`OptionsConfig`] loads defaults for both the
//! store and the list parser from YAML.
//!
//! # Quick start
//!
//! ```no_run
//! use magick_options_store::{OptionStore, OptionsConfig};
//!
//! let config = OptionsConfig::load("magick-options.yml").unwrap();
//! let mut options = OptionStore::new();
//! config.apply(&mut options).unwrap();
//!
//! for (key, value) in options.iter() {
//!     println!("{key}={value}");
//! }
//! ```

mod config;
mod error;
mod store;

pub use config::{OptionsConfig, ParseConfig};
pub use error::{Result, StoreError};
pub use store::OptionStore;
