// Library crate for the blackjack game
// The rules engine lives in `game`; `interaction` is the boundary it talks through.

pub mod config;
pub mod game;
pub mod interaction;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use game::{Card, Deck, Hand, Outcome, Rank, RoundSummary, Settlement, Suit};
pub use interaction::{ConsolePort, GameEvent, InteractionPort, Move};
pub use session::Session;
pub use shared::GameError;
