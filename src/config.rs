use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const STARTING_BANKROLL: u64 = 100;

#[derive(Parser, Debug, Clone)]
#[command(name = "blackjack", about = "Single-player blackjack against the house")]
pub struct Config {
    /// Chips the player starts the session with
    #[arg(long, env = "BLACKJACK_BANKROLL", default_value_t = STARTING_BANKROLL)]
    pub bankroll: u64,

    /// Seed for the deck shuffle; random when unset
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "BLACKJACK_LOG", default_value = "blackjack=warn")]
    pub log_filter: String,
}

impl Config {
    /// The process-wide shuffle RNG. Build it once and hand it to the session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
