//! Error type shared by every cipher operation.

use thiserror::Error;

/// Failures reported by the cipher engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Input text holds a character outside `' '..='_'`.
    #[error("character {character:?} at position {position} is outside the cipher alphabet")]
    OutOfBounds {
        /// Offending character
        character: char,
        /// Char index of the offending character
        position: usize,
    },

    /// Bellaso key string has no characters.
    #[error("key must contain at least one character")]
    EmptyKey,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
