use serde::{Deserialize, Serialize};
use std::fmt;

use super::cards::Hand;
use super::wager::PayoutRatio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBusted,
    DealerBusted,
    Push,
    PlayerWins,
    DealerWins,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::DealerBusted | Outcome::PlayerWins => "You win!",
                Outcome::Push => "You and the Dealer push.",
                Outcome::PlayerBusted | Outcome::DealerWins => "Dealer wins.",
            }
        )
    }
}

/// Result of a finished round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    /// Signed bankroll change; losses are negative. Wide enough for any
    /// `u64` bet and its 3:2 bonus.
    pub payout: i128,
}

impl Settlement {
    /// New bankroll after this settlement. A loss never exceeds the bet,
    /// and the bet never exceeds the bankroll, so this stays non-negative.
    /// Winnings past `u64::MAX` are capped there.
    pub fn apply(&self, bankroll: u64) -> u64 {
        let next = i128::from(bankroll) + self.payout;
        u64::try_from(next.max(0)).unwrap_or(u64::MAX)
    }
}

/// Decides the round and the player's payout on `bet`.
///
/// Busts are checked before values are compared. Equal values push even
/// when both hands are blackjack; the blackjack bonus applies only when the
/// player wins, whether on value or on a dealer bust.
pub fn settle(player: &Hand, dealer: &Hand, bet: u64) -> Settlement {
    let stake = i128::from(bet);
    let win = || {
        let ratio = if player.has_blackjack() {
            PayoutRatio::THREE_TO_TWO
        } else {
            PayoutRatio::ONE_TO_ONE
        };
        ratio.calculate_payout(bet)
    };

    let (outcome, payout) = if player.is_busted() {
        (Outcome::PlayerBusted, -stake)
    } else if dealer.is_busted() {
        (Outcome::DealerBusted, win())
    } else if player.value() == dealer.value() {
        (Outcome::Push, 0)
    } else if player.value() > dealer.value() {
        (Outcome::PlayerWins, win())
    } else {
        (Outcome::DealerWins, -stake)
    };

    Settlement { outcome, payout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::Card;
    use rstest::rstest;

    fn hand(codes: &str) -> Hand {
        let cards: Vec<Card> = codes
            .split_whitespace()
            .map(|code| Card::from_string(code).unwrap())
            .collect();
        Hand::from_cards(&cards)
    }

    #[test]
    fn test_blackjack_beats_sixteen_pays_three_to_two() {
        let settlement = settle(&hand("AS KH"), &hand("9C 7D"), 10);
        assert_eq!(settlement.outcome, Outcome::PlayerWins);
        assert_eq!(settlement.payout, 15);
    }

    #[test]
    fn test_equal_twenties_push() {
        let settlement = settle(&hand("KS QH"), &hand("TC JD"), 10);
        assert_eq!(settlement.outcome, Outcome::Push);
        assert_eq!(settlement.payout, 0);
    }

    #[rstest]
    #[case("AS 5D")]
    #[case("KD QD")]
    #[case("AS KD")]
    fn test_player_bust_loses_regardless_of_dealer(#[case] dealer: &str) {
        let settlement = settle(&hand("KS QH 3C"), &hand(dealer), 10);
        assert_eq!(settlement.outcome, Outcome::PlayerBusted);
        assert_eq!(settlement.payout, -10);
    }

    #[test]
    fn test_player_bust_loses_even_if_dealer_busts() {
        let settlement = settle(&hand("KS QH 3C"), &hand("TC 6D 9H"), 10);
        assert_eq!(settlement.outcome, Outcome::PlayerBusted);
        assert_eq!(settlement.payout, -10);
    }

    #[test]
    fn test_blackjack_against_blackjack_is_a_push() {
        let settlement = settle(&hand("AS KH"), &hand("AD QC"), 10);
        assert_eq!(settlement.outcome, Outcome::Push);
        assert_eq!(settlement.payout, 0);
    }

    #[test]
    fn test_blackjack_against_three_card_21_pushes() {
        let settlement = settle(&hand("AS KH"), &hand("7D 7C 7H"), 10);
        assert_eq!(settlement.outcome, Outcome::Push);
        assert_eq!(settlement.payout, 0);
    }

    #[rstest]
    #[case("KS 9H", "TC 6D 8H", 10, Outcome::DealerBusted, 10)]
    #[case("AS KH", "TC 6D 8H", 10, Outcome::DealerBusted, 15)]
    #[case("KS 9H", "TC 8D", 10, Outcome::PlayerWins, 10)]
    #[case("KS 7H", "TC 8D", 10, Outcome::DealerWins, -10)]
    #[case("7S 7H 7C", "TC 9D", 10, Outcome::PlayerWins, 10)] // three-card 21 gets no bonus
    #[case("AS KH", "9C 7D", 5, Outcome::PlayerWins, 7)]
    #[case("AS KH", "9C 7D", 0, Outcome::PlayerWins, 0)]
    #[case("KS 7H", "TC 8D", 0, Outcome::DealerWins, 0)]
    fn test_settle(
        #[case] player: &str,
        #[case] dealer: &str,
        #[case] bet: u64,
        #[case] outcome: Outcome,
        #[case] payout: i128,
    ) {
        let settlement = settle(&hand(player), &hand(dealer), bet);
        assert_eq!(settlement.outcome, outcome);
        assert_eq!(settlement.payout, payout);
    }

    #[test]
    fn test_apply_never_goes_negative() {
        let loss = Settlement {
            outcome: Outcome::DealerWins,
            payout: -100,
        };
        assert_eq!(loss.apply(100), 0);
        let win = Settlement {
            outcome: Outcome::PlayerWins,
            payout: 15,
        };
        assert_eq!(win.apply(100), 115);
    }

    #[test]
    fn test_all_in_loss_on_largest_bankroll_leaves_nothing() {
        let settlement = settle(&hand("KS 7H"), &hand("TC 8D"), u64::MAX);
        assert_eq!(settlement.outcome, Outcome::DealerWins);
        assert_eq!(settlement.payout, -i128::from(u64::MAX));
        assert_eq!(settlement.apply(u64::MAX), 0);
    }

    #[test]
    fn test_bust_loss_above_i64_range_is_exact() {
        let bet = i64::MAX as u64 + 10;
        let settlement = settle(&hand("KS QH 3C"), &hand("TC 8D"), bet);
        assert_eq!(settlement.apply(bet + 5), 5);
    }

    #[test]
    fn test_huge_blackjack_win_caps_bankroll() {
        let settlement = settle(&hand("AS KH"), &hand("9C 7D"), u64::MAX);
        assert_eq!(settlement.payout, i128::from(u64::MAX) * 3 / 2);
        assert_eq!(settlement.apply(u64::MAX), u64::MAX);
    }
}
