//! Player system
//!
//! Contains the Player struct, equipment slots, and the quiver.

mod equip;
mod quiver;
mod you;

pub use equip::{ARMOUR_SLOTS, EquipSlot, Equipment, RedrawFlags};
pub use quiver::Quiver;
pub use you::Player;
