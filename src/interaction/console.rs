use dialoguer::Input;
use tracing::debug;

use super::{GameEvent, InteractionPort, Move};
use crate::game::wager::accepts_bet;
use crate::shared::GameError;

/// Plays the game on the terminal: prompts on stdin, announcements on stdout.
#[derive(Debug, Default)]
pub struct ConsolePort;

impl ConsolePort {
    pub fn new() -> Self {
        Self
    }

    fn prompt_line(&self, prompt: &str) -> Result<String, GameError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(interaction_error)
    }
}

fn interaction_error(err: dialoguer::Error) -> GameError {
    GameError::Interaction(err.to_string())
}

/// Only an explicit `n` ends the session; anything else, even a blank
/// line, plays on.
fn wants_another_round(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}

impl InteractionPort for ConsolePort {
    fn request_bet(&mut self, bankroll: u64) -> Result<u64, GameError> {
        let input = Input::<String>::new()
            .with_prompt("How much would you like to bet?")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &'static str> {
                match i.trim().parse::<i128>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Not a valid input."),
                }
            })
            .validate_with(|i: &String| -> Result<(), &'static str> {
                match i.trim().parse::<i128>() {
                    Ok(bet) if bet < 0 => Err("You can't bet a negative amount."),
                    _ => Ok(()),
                }
            })
            .validate_with(move |i: &String| -> Result<(), &'static str> {
                match i.trim().parse::<i128>() {
                    Ok(bet) if !accepts_bet(bet, bankroll) => {
                        Err("You can't bet more than what you have.")
                    }
                    _ => Ok(()),
                }
            })
            .interact_text()
            .map_err(interaction_error)?;
        println!();

        input
            .trim()
            .parse::<u64>()
            .map_err(|e| GameError::Interaction(e.to_string()))
    }

    fn request_move(&mut self) -> Result<Move, GameError> {
        let input = Input::<String>::new()
            .with_prompt("Enter move (hit [h]/stand [s])")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &'static str> {
                match i.parse::<Move>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Not a valid input."),
                }
            })
            .interact_text()
            .map_err(interaction_error)?;
        println!();

        input.parse::<Move>().map_err(GameError::Interaction)
    }

    fn announce(&mut self, event: &GameEvent) {
        debug!(event_type = event.event_type(), "Announcing event");
        println!("{}", event);
        println!();
    }

    fn pause(&mut self, prompt: &str) -> Result<(), GameError> {
        self.prompt_line(prompt)?;
        println!();
        Ok(())
    }

    fn request_continue(&mut self) -> Result<bool, GameError> {
        let answer = self.prompt_line("Would you like to play again? (Y/N)")?;
        println!();
        Ok(wants_another_round(&answer))
    }
}
