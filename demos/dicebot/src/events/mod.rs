//! Dicebot periodic events.

mod clock;

pub use clock::Clock;
