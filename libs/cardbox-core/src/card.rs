//! Flashcard data type.

/// A single term/definition pair with a mistake counter.
///
/// Cards are plain data; uniqueness of terms and definitions is enforced by
/// the deck, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    /// Create a fresh card with no recorded mistakes.
    pub fn new(term: String, definition: String) -> Self {
        Self {
            term,
            definition,
            mistakes: 0,
        }
    }

    /// Restore a card from persisted storage, counter included.
    pub fn with_mistakes(term: String, definition: String, mistakes: u32) -> Self {
        Self {
            term,
            definition,
            mistakes,
        }
    }

    /// Record one wrong answer. There is no upper bound on the counter.
    pub fn record_mistake(&mut self) {
        self.mistakes += 1;
    }

    /// Zero the mistake counter.
    pub fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_card_starts_clean() {
        let card = Card::new("sun".to_string(), "sol".to_string());
        assert_eq!(card.mistakes, 0);
        assert_eq!(card.term, "sun");
        assert_eq!(card.definition, "sol");
    }

    #[test]
    fn restored_card_keeps_counter() {
        let card = Card::with_mistakes("sun".to_string(), "sol".to_string(), 4);
        assert_eq!(card.mistakes, 4);
    }

    #[test]
    fn record_and_reset_mistakes() {
        let mut card = Card::new("sun".to_string(), "sol".to_string());
        card.record_mistake();
        card.record_mistake();
        assert_eq!(card.mistakes, 2);
        card.reset_mistakes();
        assert_eq!(card.mistakes, 0);
    }
}
