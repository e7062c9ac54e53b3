//! rf-core: Core game logic for the resonance forge
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable.

pub mod action;
pub mod item;
pub mod player;

mod rng;
mod state;

pub use rng::GameRng;
pub use state::{Channel, GameState, Message, Note};
