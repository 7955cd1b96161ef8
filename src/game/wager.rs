use serde::{Deserialize, Serialize};

use crate::shared::GameError;

/// Whether a requested bet can be placed: `0 <= bet <= bankroll`.
///
/// Betting the whole bankroll is allowed, and so is betting nothing.
pub fn accepts_bet(bet: i128, bankroll: u64) -> bool {
    u64::try_from(bet).is_ok_and(|bet| validate_bet(bet, bankroll).is_ok())
}

pub fn validate_bet(bet: u64, bankroll: u64) -> Result<u64, GameError> {
    if bet <= bankroll {
        Ok(bet)
    } else {
        Err(GameError::BetOutOfRange { bet, bankroll })
    }
}

/// Bonus multiplier for a winning blackjack, as a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u64,
    pub denominator: u64,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Winnings on `bet`, rounded down.
    pub fn calculate_payout(&self, bet: u64) -> i128 {
        i128::from(bet) * i128::from(self.numerator) / i128::from(self.denominator)
    }
}
