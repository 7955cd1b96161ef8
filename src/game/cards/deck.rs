use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::basic::Card;
use crate::shared::GameError;

/// A single 52-card deck, used for one round and then dropped.
///
/// Cards are stored bottom-first so that dealing pops from the end of
/// the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every rank x suit combination once, dealing in canonical order.
    pub fn new() -> Self {
        Self::from_cards(Card::all_cards())
    }

    /// Builds a deck that deals `cards` in the given order.
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop().ok_or(GameError::EmptyDeck)?;
        debug!(card = %card, remaining = self.cards.len(), "Dealt card");
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
