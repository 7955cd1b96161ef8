use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::cards::{Card, Hand};
use crate::game::Outcome;

/// Things that happened at the table, in the order they happened.
///
/// The port decides how to render them; `Display` gives the plain-text
/// wording used by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // Session lifecycle
    SessionStarted { bankroll: u64 },
    SessionEnded { bankroll: u64 },

    // Round setup
    BetPlaced { bet: u64, bankroll: u64 },
    /// The dealer's hand after the deal, with the hole card face down.
    DealerShows { up_card: Card },

    // Player turn
    PlayerHand { hand: Hand },
    PlayerDrew { card: Card },
    PlayerBusted,

    // Dealer turn
    DealerHand { hand: Hand },
    DealerHits,
    DealerDrew { card: Card },
    DealerBusted,
    DealerStands,

    /// The round is over and the payout has been applied.
    RoundSettled {
        outcome: Outcome,
        payout: i128,
        bankroll: u64,
    },
}

impl GameEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::SessionStarted { .. } => "session_started",
            GameEvent::SessionEnded { .. } => "session_ended",
            GameEvent::BetPlaced { .. } => "bet_placed",
            GameEvent::DealerShows { .. } => "dealer_shows",
            GameEvent::PlayerHand { .. } => "player_hand",
            GameEvent::PlayerDrew { .. } => "player_drew",
            GameEvent::PlayerBusted => "player_busted",
            GameEvent::DealerHand { .. } => "dealer_hand",
            GameEvent::DealerHits => "dealer_hits",
            GameEvent::DealerDrew { .. } => "dealer_drew",
            GameEvent::DealerBusted => "dealer_busted",
            GameEvent::DealerStands => "dealer_stands",
            GameEvent::RoundSettled { .. } => "round_settled",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::SessionStarted { bankroll } => write!(f, "Starting bankroll: {}", bankroll),
            GameEvent::SessionEnded { .. } => write!(f, "Thanks for playing!"),
            GameEvent::BetPlaced { bet, bankroll } => {
                write!(f, "You bet {} of your {}.", bet, bankroll)
            }
            GameEvent::DealerShows { up_card } => write!(f, "Dealer's hand: [hidden] {}", up_card),
            GameEvent::PlayerHand { hand } => write!(f, "Your hand: {}", hand),
            GameEvent::PlayerDrew { card } => write!(f, "Your card was: {}", card),
            GameEvent::PlayerBusted => write!(f, "You busted :("),
            GameEvent::DealerHand { hand } => write!(f, "Dealer's hand: {}", hand),
            GameEvent::DealerHits => write!(f, "Dealer hits"),
            GameEvent::DealerDrew { card } => write!(f, "Dealer card was: {}", card),
            GameEvent::DealerBusted => write!(f, "Dealer busted!"),
            GameEvent::DealerStands => write!(f, "Dealer stands."),
            GameEvent::RoundSettled {
                outcome, bankroll, ..
            } => write!(f, "{}\n\nNew bankroll: {}", outcome, bankroll),
        }
    }
}
