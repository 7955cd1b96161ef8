use rand::Rng;
use tracing::{info, instrument};

use crate::game::play_round;
use crate::interaction::{GameEvent, InteractionPort};
use crate::shared::GameError;

/// Keeps playing rounds while the player has money and wants to continue.
///
/// The session owns the bankroll for the life of the process and the RNG
/// every round's deck is shuffled with, so the RNG is seeded once, not per
/// round.
pub struct Session<R: Rng> {
    bankroll: u64,
    rng: R,
    rounds_played: usize,
}

impl<R: Rng> Session<R> {
    pub fn new(bankroll: u64, rng: R) -> Self {
        Self {
            bankroll,
            rng,
            rounds_played: 0,
        }
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Runs until the bankroll hits zero or the player declines another round.
    /// Returns the final bankroll.
    #[instrument(skip(self, port), fields(bankroll = self.bankroll))]
    pub fn run<P>(&mut self, port: &mut P) -> Result<u64, GameError>
    where
        P: InteractionPort + ?Sized,
    {
        info!("Session started");
        port.announce(&GameEvent::SessionStarted {
            bankroll: self.bankroll,
        });

        while self.bankroll > 0 {
            let summary = play_round(port, &mut self.rng, self.bankroll)?;
            self.bankroll = summary.bankroll;
            self.rounds_played += 1;

            if self.bankroll == 0 || !port.request_continue()? {
                break;
            }
        }

        info!(
            bankroll = self.bankroll,
            rounds = self.rounds_played,
            "Session ended"
        );
        port.announce(&GameEvent::SessionEnded {
            bankroll: self.bankroll,
        });
        Ok(self.bankroll)
    }
}
