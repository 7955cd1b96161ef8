use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::cards::Hand;

/// The dealer draws below this value and stands on it or above, soft or hard.
pub const DEALER_STANDS_AT: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerState {
    AwaitingDecision,
    Hit,
    Stand,
    Busted,
}

impl DealerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DealerState::Stand | DealerState::Busted)
    }
}

/// Fixed house policy for the dealer's hand. Never consults the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerPolicy;

impl DealerPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Next state for `hand`, evaluated before the first draw and after every card.
    pub fn decide(&self, hand: &Hand) -> DealerState {
        let value = hand.value();
        let state = if hand.is_busted() {
            DealerState::Busted
        } else if value < DEALER_STANDS_AT {
            DealerState::Hit
        } else {
            DealerState::Stand
        };
        debug!(value = value, soft = hand.is_soft(), state = ?state, "Dealer decision");
        state
    }
}
