//! # Keyword Error Type
//!
//! [`KeywordError`] reports keyword-list entries that cannot be turned into a
//! character literal chain and a `Kw_<keyword>` identifier.
use thiserror::Error;

/// Errors raised while assembling a [`KeywordSet`](crate::KeywordSet).
///
/// # Examples
/// ```rust
/// # use ppkw_gen::{KeywordError, KeywordSet};
/// let err = KeywordSet::new(["if", "pack-matrix"]).unwrap_err();
/// assert!(matches!(err, KeywordError::Invalid { offending: '-', .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    /// The keyword at `index` is the empty string.
    #[error("empty keyword at position {index}")]
    Empty { index: usize },

    /// The keyword contains a character outside `[A-Za-z0-9_]`.
    #[error("keyword {keyword:?} contains invalid character {offending:?}")]
    Invalid { keyword: String, offending: char },
}
