use std::collections::VecDeque;

use blackjack::{GameError, GameEvent, InteractionPort, Move};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Answers prompts from a script and keeps everything it was told.
#[derive(Debug, Default)]
pub struct MockPort {
    bets: VecDeque<u64>,
    moves: VecDeque<Move>,
    continues: VecDeque<bool>,
    all_in: bool,
    bet_requests: Vec<u64>,
    continue_requests: usize,
    events: Vec<GameEvent>,
    pauses: Vec<String>,
}

#[allow(dead_code)] // Test utilities may not all be used in every test
impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bet(mut self, bet: u64) -> Self {
        self.bets.push_back(bet);
        self
    }

    /// Once scripted bets run out, bet the whole bankroll every round.
    pub fn all_in(mut self) -> Self {
        self.all_in = true;
        self
    }

    pub fn hit(mut self) -> Self {
        self.moves.push_back(Move::Hit);
        self
    }

    pub fn stand(mut self) -> Self {
        self.moves.push_back(Move::Stand);
        self
    }

    pub fn play_again(mut self, again: bool) -> Self {
        self.continues.push_back(again);
        self
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.event_type()).collect()
    }

    /// Bankrolls the port was shown when asked for a bet.
    pub fn bet_requests(&self) -> &[u64] {
        &self.bet_requests
    }

    pub fn continue_requests(&self) -> usize {
        self.continue_requests
    }

    pub fn pauses(&self) -> usize {
        self.pauses.len()
    }

    pub fn pause_prompts(&self) -> &[String] {
        &self.pauses
    }

    pub fn unused_moves(&self) -> usize {
        self.moves.len()
    }
}

impl InteractionPort for MockPort {
    fn request_bet(&mut self, bankroll: u64) -> Result<u64, GameError> {
        self.bet_requests.push(bankroll);
        match self.bets.pop_front() {
            Some(bet) => Ok(bet),
            None if self.all_in => Ok(bankroll),
            None => Err(GameError::Interaction("bet script exhausted".to_string())),
        }
    }

    fn request_move(&mut self) -> Result<Move, GameError> {
        self.moves
            .pop_front()
            .ok_or_else(|| GameError::Interaction("move script exhausted".to_string()))
    }

    fn announce(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn pause(&mut self, prompt: &str) -> Result<(), GameError> {
        self.pauses.push(prompt.to_string());
        Ok(())
    }

    fn request_continue(&mut self) -> Result<bool, GameError> {
        self.continue_requests += 1;
        Ok(self.continues.pop_front().unwrap_or(false))
    }
}
