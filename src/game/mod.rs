// Public API
pub use cards::{Card, Deck, Hand, Rank, Suit};
pub use dealer::{DealerPolicy, DealerState, DEALER_STANDS_AT};
pub use outcome::{settle, Outcome, Settlement};
pub use round::{play_round, play_round_with_deck, PlayerState, RoundSummary};
pub use wager::{accepts_bet, validate_bet, PayoutRatio};

pub mod cards;
pub mod dealer;
pub mod outcome;
pub mod round;
pub mod wager;
