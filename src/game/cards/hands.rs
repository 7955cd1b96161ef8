use serde::{Deserialize, Serialize};
use std::fmt;

use super::basic::Card;

pub const BLACKJACK: u8 = 21;

/// Value of a blackjack hand.
///
/// Every Ace starts at 11. While the total is over 21 and an Ace is
/// still counted high, one Ace drops to 1.
pub fn hand_value(cards: &[Card]) -> u8 {
    let (total, _) = reduce_aces(cards);
    total
}

/// A soft hand still counts one of its Aces as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    let (_, high_aces) = reduce_aces(cards);
    high_aces > 0
}

fn reduce_aces(cards: &[Card]) -> (u8, usize) {
    let mut total: u32 = cards.iter().map(|c| u32::from(c.points())).sum();
    let mut aces = cards.iter().filter(|c| c.is_ace()).count();

    while total > u32::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (u8::try_from(total).unwrap_or(u8::MAX), aces)
}

/// Cards held by the player or the dealer for one round, in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Exactly two cards worth 21.
    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        write!(f, "({})", self.value())
    }
}
