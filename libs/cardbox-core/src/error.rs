//! Error types for cardbox-core.

use thiserror::Error;

/// Errors from deck-level validation and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("no card with the term \"{0}\"")]
    UnknownTerm(String),
}

/// Errors from parsing the persisted card format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed card at line {line}: expected term:definition:mistakes")]
    MalformedLine { line: usize },

    #[error("invalid mistake count at line {line}: {value}")]
    InvalidMistakes { line: usize, value: String },
}
