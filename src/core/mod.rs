//! Core building blocks: player identity and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::Player;
pub use rng::GameRng;
