//! Dicebot commands.
//!
//! The `commands` help listing comes built-in with herald-framework; only
//! the bot-specific commands live here.

mod random;

pub use random::Random;
