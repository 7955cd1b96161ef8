pub mod basic;
pub mod deck;
pub mod hands;

pub use basic::{Card, Rank, Suit};
pub use deck::Deck;
pub use hands::{hand_value, is_soft, Hand, BLACKJACK};
