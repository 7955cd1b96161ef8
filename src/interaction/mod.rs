//! The boundary between the game rules and whoever is playing.
//!
//! The core calls the port synchronously for every decision it needs and
//! reports everything that happens through [`InteractionPort::announce`].
//! Parsing and re-prompting on bad input are the port's business; the core
//! only ever sees validated values.

pub mod console;
pub mod events;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::GameError;

pub use console::ConsolePort;
pub use events::GameEvent;

/// Shown once the player stands, before the dealer plays.
pub const DEALER_TURN_PROMPT: &str = "Press Enter for Dealer turn...";
/// Shown between dealer steps.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stand,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Hit => "hit",
                Move::Stand => "stand",
            }
        )
    }
}

impl FromStr for Move {
    type Err = String;

    /// Accepts `hit`, `h`, `stand` or `s` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Move::Hit),
            "s" | "stand" => Ok(Move::Stand),
            _ => Err(s.to_string()),
        }
    }
}

pub trait InteractionPort {
    /// A bet satisfying `0 <= bet <= bankroll`.
    fn request_bet(&mut self, bankroll: u64) -> Result<u64, GameError>;

    fn request_move(&mut self) -> Result<Move, GameError>;

    /// One-way notification. Has no effect on the game.
    fn announce(&mut self, event: &GameEvent);

    /// Waits for the player before the game moves on, showing `prompt`.
    fn pause(&mut self, prompt: &str) -> Result<(), GameError>;

    /// Asked between rounds: whether to play another.
    fn request_continue(&mut self) -> Result<bool, GameError>;
}
