// One round of blackjack, start to finish: bet, deal, player turn, dealer
// turn, settlement. Nothing here survives the round except the bankroll.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::cards::{Deck, Hand};
use super::dealer::{DealerPolicy, DealerState};
use super::outcome::{settle, Settlement};
use super::wager::validate_bet;
use crate::interaction::{
    GameEvent, InteractionPort, Move, CONTINUE_PROMPT, DEALER_TURN_PROMPT,
};
use crate::shared::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    AwaitingMove,
    Hit,
    Stand,
    Busted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub bet: u64,
    pub player: Hand,
    pub dealer: Hand,
    pub settlement: Settlement,
    /// Bankroll after the payout.
    pub bankroll: u64,
}

/// Plays a full round with a freshly shuffled deck and returns the new bankroll
/// along with how it got there.
#[instrument(skip(port, rng))]
pub fn play_round<P, R>(port: &mut P, rng: &mut R, bankroll: u64) -> Result<RoundSummary, GameError>
where
    P: InteractionPort + ?Sized,
    R: Rng + ?Sized,
{
    let bet = place_bet(port, bankroll)?;

    let mut deck = Deck::new();
    deck.shuffle(rng);

    play_round_with_deck(port, deck, bet, bankroll)
}

/// Asks the port for a bet and checks it against the bankroll.
pub fn place_bet<P>(port: &mut P, bankroll: u64) -> Result<u64, GameError>
where
    P: InteractionPort + ?Sized,
{
    let requested = port.request_bet(bankroll)?;
    let bet = validate_bet(requested, bankroll).inspect_err(|_| {
        warn!(
            bet = requested,
            bankroll = bankroll,
            "Port returned a bet outside the bankroll"
        );
    })?;

    debug!(bet = bet, bankroll = bankroll, "Bet placed");
    port.announce(&GameEvent::BetPlaced { bet, bankroll });
    Ok(bet)
}

/// Plays a round from the deal onwards using `deck` as given.
#[instrument(skip(port, deck))]
pub fn play_round_with_deck<P>(
    port: &mut P,
    mut deck: Deck,
    bet: u64,
    bankroll: u64,
) -> Result<RoundSummary, GameError>
where
    P: InteractionPort + ?Sized,
{
    let bet = validate_bet(bet, bankroll)?;

    let mut player = Hand::new();
    let mut dealer = Hand::new();
    player.add_card(deck.deal()?);
    dealer.add_card(deck.deal()?);
    player.add_card(deck.deal()?);
    dealer.add_card(deck.deal()?);

    port.announce(&GameEvent::PlayerHand {
        hand: player.clone(),
    });
    if let Some(&up_card) = dealer.cards().get(1) {
        port.announce(&GameEvent::DealerShows { up_card });
    }

    let player_busted = player_turn(port, &mut player, &mut deck)?;
    if !player_busted {
        port.pause(DEALER_TURN_PROMPT)?;
        dealer_turn(port, &DealerPolicy::new(), &mut dealer, &mut deck)?;
    }

    let settlement = settle(&player, &dealer, bet);
    let new_bankroll = settlement.apply(bankroll);
    info!(
        bet = bet,
        outcome = ?settlement.outcome,
        payout = settlement.payout,
        player_value = player.value(),
        dealer_value = dealer.value(),
        bankroll = new_bankroll,
        "Round settled"
    );
    port.announce(&GameEvent::RoundSettled {
        outcome: settlement.outcome,
        payout: settlement.payout,
        bankroll: new_bankroll,
    });

    Ok(RoundSummary {
        bet,
        player,
        dealer,
        settlement,
        bankroll: new_bankroll,
    })
}

/// Runs the player's turn. Returns whether the player busted.
pub fn player_turn<P>(port: &mut P, hand: &mut Hand, deck: &mut Deck) -> Result<bool, GameError>
where
    P: InteractionPort + ?Sized,
{
    let mut state = PlayerState::AwaitingMove;
    loop {
        state = match state {
            PlayerState::AwaitingMove => match port.request_move()? {
                Move::Hit => PlayerState::Hit,
                Move::Stand => PlayerState::Stand,
            },
            PlayerState::Hit => {
                let card = deck.deal()?;
                port.announce(&GameEvent::PlayerDrew { card });
                hand.add_card(card);
                port.announce(&GameEvent::PlayerHand { hand: hand.clone() });
                debug!(card = %card, value = hand.value(), "Player hit");

                if hand.is_busted() {
                    PlayerState::Busted
                } else {
                    PlayerState::AwaitingMove
                }
            }
            PlayerState::Stand => {
                debug!(value = hand.value(), "Player stands");
                return Ok(false);
            }
            PlayerState::Busted => {
                port.announce(&GameEvent::PlayerBusted);
                return Ok(true);
            }
        };
    }
}

/// Draws for the dealer until `policy` stands or the hand busts.
pub fn dealer_turn<P>(
    port: &mut P,
    policy: &DealerPolicy,
    hand: &mut Hand,
    deck: &mut Deck,
) -> Result<DealerState, GameError>
where
    P: InteractionPort + ?Sized,
{
    let mut state = DealerState::AwaitingDecision;
    loop {
        state = match state {
            DealerState::AwaitingDecision => {
                port.announce(&GameEvent::DealerHand { hand: hand.clone() });
                port.pause(CONTINUE_PROMPT)?;
                policy.decide(hand)
            }
            DealerState::Hit => {
                port.announce(&GameEvent::DealerHits);
                let card = deck.deal()?;
                hand.add_card(card);
                port.announce(&GameEvent::DealerDrew { card });

                match policy.decide(hand) {
                    DealerState::Busted => DealerState::Busted,
                    _ => DealerState::AwaitingDecision,
                }
            }
            DealerState::Busted => {
                port.announce(&GameEvent::DealerBusted);
                port.announce(&GameEvent::DealerHand { hand: hand.clone() });
                return Ok(DealerState::Busted);
            }
            DealerState::Stand => {
                port.announce(&GameEvent::DealerStands);
                return Ok(DealerState::Stand);
            }
        };
    }
}
