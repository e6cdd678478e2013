//! Deck: an ordered collection of cards, unique by term and by definition.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::error::DeckError;

/// Outcome of grading one quiz answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Wrong {
        /// The definition that was asked for.
        correct: String,
        /// Term of the card whose definition the answer matched instead,
        /// if any.
        matched_term: Option<String>,
    },
}

/// An ordered collection of cards keyed by term.
///
/// Insertion order is preserved and lookups are linear scans, which is fine
/// at interactive deck sizes.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Insert without validation, replacing any card with the same term in
    /// place. Import uses this; the last line wins on a term collision, and
    /// the replaced card keeps its position in the order.
    pub fn insert(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.term == card.term) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    /// Reject a term that is already taken.
    pub fn check_term(&self, term: &str) -> Result<(), DeckError> {
        if self.get(term).is_some() {
            return Err(DeckError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Reject a definition that is already taken.
    pub fn check_definition(&self, definition: &str) -> Result<(), DeckError> {
        if self.find_by_definition(definition).is_some() {
            return Err(DeckError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// Remove the card with this term.
    pub fn remove(&mut self, term: &str) -> Result<(), DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| c.term == term)
            .ok_or_else(|| DeckError::UnknownTerm(term.to_string()))?;
        self.cards.remove(index);
        Ok(())
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    /// First card whose definition matches exactly, if any.
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    /// Pick one card uniformly at random. Selection is with replacement
    /// across calls: repeated picks may return the same card.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Card> {
        self.cards.choose(rng)
    }

    /// Compare an answer against a card's definition, verbatim and
    /// case-sensitive. A mismatch records a mistake against the card and
    /// reports which other card, if any, the answer would have been correct
    /// for.
    pub fn grade(&mut self, term: &str, answer: &str) -> Result<Grade, DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| c.term == term)
            .ok_or_else(|| DeckError::UnknownTerm(term.to_string()))?;

        if self.cards[index].definition == answer {
            return Ok(Grade::Correct);
        }

        self.cards[index].record_mistake();
        let correct = self.cards[index].definition.clone();
        let matched_term = self.find_by_definition(answer).map(|c| c.term.clone());
        Ok(Grade::Wrong {
            correct,
            matched_term,
        })
    }

    /// Zero every card's mistake counter.
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.reset_mistakes();
        }
    }

    /// Cards tied at the highest nonzero mistake count, with that count.
    /// Cards with zero mistakes are never considered, so the result is
    /// empty when nothing has been answered wrong.
    pub fn hardest(&self) -> (Vec<&Card>, u32) {
        let mut hardest: Vec<&Card> = Vec::new();
        let mut max_mistakes = 0;

        for card in &self.cards {
            if card.mistakes == 0 {
                continue;
            }
            if card.mistakes > max_mistakes {
                max_mistakes = card.mistakes;
                hardest.clear();
                hardest.push(card);
            } else if card.mistakes == max_mistakes {
                hardest.push(card);
            }
        }

        (hardest, max_mistakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(term: &str, definition: &str) -> Card {
        Card::new(term.to_string(), definition.to_string())
    }

    fn deck_of(cards: &[(&str, &str)]) -> Deck {
        let mut deck = Deck::new();
        for (term, definition) in cards {
            deck.insert(card(term, definition));
        }
        deck
    }

    #[test]
    fn insert_appends_in_order() {
        let deck = deck_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let terms: Vec<&str> = deck.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_replaces_same_term_in_place() {
        let mut deck = deck_of(&[("a", "1"), ("b", "2")]);
        deck.insert(card("a", "one"));

        assert_eq!(deck.len(), 2);
        let terms: Vec<&str> = deck.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "b"]);
        assert_eq!(deck.get("a").unwrap().definition, "one");
    }

    #[test]
    fn check_term_rejects_duplicates() {
        let deck = deck_of(&[("capital", "Paris")]);
        assert_eq!(deck.check_term("country"), Ok(()));
        assert_eq!(
            deck.check_term("capital"),
            Err(DeckError::DuplicateTerm("capital".to_string()))
        );
    }

    #[test]
    fn check_definition_rejects_duplicates() {
        let deck = deck_of(&[("capital", "Paris")]);
        assert_eq!(deck.check_definition("Berlin"), Ok(()));
        assert_eq!(
            deck.check_definition("Paris"),
            Err(DeckError::DuplicateDefinition("Paris".to_string()))
        );
    }

    #[test]
    fn remove_deletes_only_the_named_card() {
        let mut deck = deck_of(&[("a", "1"), ("b", "2")]);
        deck.remove("a").unwrap();
        assert_eq!(deck.len(), 1);
        assert!(deck.get("a").is_none());
        assert!(deck.get("b").is_some());
    }

    #[test]
    fn remove_unknown_term_fails() {
        let mut deck = deck_of(&[("a", "1")]);
        assert_eq!(
            deck.remove("z"),
            Err(DeckError::UnknownTerm("z".to_string()))
        );
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn choose_on_empty_deck_is_none() {
        let deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(deck.choose(&mut rng).is_none());
    }

    #[test]
    fn choose_returns_a_member() {
        let deck = deck_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let picked = deck.choose(&mut rng).unwrap();
            assert!(deck.get(&picked.term).is_some());
        }
    }

    #[test]
    fn grade_correct_answer_leaves_counter_alone() {
        let mut deck = deck_of(&[("capital", "Paris")]);
        let grade = deck.grade("capital", "Paris").unwrap();
        assert_eq!(grade, Grade::Correct);
        assert_eq!(deck.get("capital").unwrap().mistakes, 0);
    }

    #[test]
    fn grade_is_case_sensitive() {
        let mut deck = deck_of(&[("capital", "Paris")]);
        let grade = deck.grade("capital", "paris").unwrap();
        assert_eq!(
            grade,
            Grade::Wrong {
                correct: "Paris".to_string(),
                matched_term: None,
            }
        );
        assert_eq!(deck.get("capital").unwrap().mistakes, 1);
    }

    #[test]
    fn grade_names_the_card_whose_definition_was_typed() {
        let mut deck = deck_of(&[("a", "X"), ("b", "Y")]);
        let grade = deck.grade("a", "Y").unwrap();
        assert_eq!(
            grade,
            Grade::Wrong {
                correct: "X".to_string(),
                matched_term: Some("b".to_string()),
            }
        );
        // Only the asked card takes the mistake.
        assert_eq!(deck.get("a").unwrap().mistakes, 1);
        assert_eq!(deck.get("b").unwrap().mistakes, 0);
    }

    #[test]
    fn grade_unknown_term_fails() {
        let mut deck = deck_of(&[("a", "X")]);
        assert_eq!(
            deck.grade("z", "X"),
            Err(DeckError::UnknownTerm("z".to_string()))
        );
    }

    #[test]
    fn reset_stats_zeroes_every_card() {
        let mut deck = deck_of(&[("a", "X"), ("b", "Y")]);
        deck.grade("a", "wrong").unwrap();
        deck.grade("b", "wrong").unwrap();
        deck.reset_stats();
        assert!(deck.iter().all(|c| c.mistakes == 0));
        let (hardest, max) = deck.hardest();
        assert!(hardest.is_empty());
        assert_eq!(max, 0);
    }

    #[test]
    fn hardest_ignores_cards_without_mistakes() {
        let mut deck = Deck::new();
        deck.insert(Card::with_mistakes("dog".to_string(), "chien".to_string(), 0));
        deck.insert(Card::with_mistakes("cat".to_string(), "chat".to_string(), 2));

        let (hardest, max) = deck.hardest();
        let terms: Vec<&str> = hardest.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["cat"]);
        assert_eq!(max, 2);
    }

    #[test]
    fn hardest_collects_all_cards_tied_at_the_maximum() {
        let mut deck = Deck::new();
        deck.insert(Card::with_mistakes("a".to_string(), "1".to_string(), 3));
        deck.insert(Card::with_mistakes("b".to_string(), "2".to_string(), 1));
        deck.insert(Card::with_mistakes("c".to_string(), "3".to_string(), 3));

        let (hardest, max) = deck.hardest();
        let terms: Vec<&str> = hardest.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "c"]);
        assert_eq!(max, 3);
    }

    #[test]
    fn hardest_on_clean_deck_is_empty() {
        let deck = deck_of(&[("a", "1")]);
        let (hardest, max) = deck.hardest();
        assert!(hardest.is_empty());
        assert_eq!(max, 0);
    }
}
