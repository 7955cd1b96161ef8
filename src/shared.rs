use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot deal from an empty deck")]
    EmptyDeck,

    #[error("Bet of {bet} is outside the allowed range 0..={bankroll}")]
    BetOutOfRange { bet: u64, bankroll: u64 },

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Interaction error: {0}")]
    Interaction(String),
}
