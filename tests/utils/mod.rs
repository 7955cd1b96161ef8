pub mod game_builders;
pub mod mocks;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use game_builders::DeckBuilder;
#[allow(unused_imports)]
pub use mocks::MockPort;
