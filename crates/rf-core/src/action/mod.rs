//! Player action system
//!
//! Implements player-invoked actions against the game state.

pub mod forge;

pub use forge::{ForgeOutcome, ForgeTarget, ParseTargetError, resonance_forge};
