//! Resolution errors.

use thiserror::Error;

use crate::types::Category;

/// Failure to resolve a category, mnemonic or command token.
///
/// Reverse lookups never produce this error for a known category; they
/// fall back to [`UNDEFINED_MNEMONIC`](crate::UNDEFINED_MNEMONIC) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The registry holds no table for this category.
    #[error("no mnemonic table for category {0}")]
    UnknownCategory(Category),
    /// A token matched no row, even after normalization.
    #[error("unrecognized {category} mnemonic: {token:?}")]
    UnknownMnemonic { category: Category, token: String },
    /// A command lookup was given a token without a leading sigil.
    #[error("invalid command token {0:?}: expected a leading sigil")]
    InvalidCommandToken(String),
}

impl ResolveError {
    pub(crate) fn unknown(category: Category, token: impl Into<String>) -> Self {
        Self::UnknownMnemonic {
            category,
            token: token.into(),
        }
    }
}
