//! Core flashcard library backing the cardbox CLI.
//!
//! Provides:
//! - Card and Deck types, with term/definition uniqueness validation
//! - Quiz grading (verbatim answer comparison, mistake tracking)
//! - Parse/serialize for the flat `term:definition:mistakes` card format
//! - Error types for collection conflicts and storage parsing
//!
//! The library is pure: no printing, no file access. The CLI owns all I/O
//! and feeds parsed lines and user answers in.

pub mod card;
pub mod deck;
pub mod error;
pub mod storage;

pub use card::Card;
pub use deck::{Deck, Grade};
pub use error::{DeckError, ParseError};
