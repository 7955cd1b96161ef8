use blackjack::{Card, Deck};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($code:literal),* $(,)?) => {
        vec![$(blackjack::Card::from_string($code).unwrap()),*]
    };
}

// ============================================================================
// Deck Setup Utilities
// ============================================================================

/// Stacks a deck so a round plays out exactly as scripted.
pub struct DeckBuilder {
    player: Vec<Card>,
    dealer: Vec<Card>,
    draws: Vec<Card>,
}

#[allow(dead_code)] // Test utilities may not all be used in every test
impl DeckBuilder {
    pub fn new() -> Self {
        Self {
            player: vec![],
            dealer: vec![],
            draws: vec![],
        }
    }

    /// The player's two starting cards.
    pub fn player(mut self, cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), 2, "player starts with two cards");
        self.player = cards;
        self
    }

    /// The dealer's hole card and up card, in that order.
    pub fn dealer(mut self, cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), 2, "dealer starts with two cards");
        self.dealer = cards;
        self
    }

    /// Cards dealt after the initial deal, player hits first.
    pub fn then(mut self, cards: Vec<Card>) -> Self {
        self.draws.extend(cards);
        self
    }

    pub fn build(self) -> Deck {
        let mut order = vec![
            self.player[0],
            self.dealer[0],
            self.player[1],
            self.dealer[1],
        ];
        order.extend(self.draws);
        Deck::from_cards(order)
    }
}
