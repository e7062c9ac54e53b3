//! Equipment slots and worn-gear tracking

use std::collections::HashMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Equipment slots
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EquipSlot {
    Weapon,
    Offhand,
    Shield,
    Body,
    Cloak,
    Helmet,
    Gloves,
    Boots,
    Barding,
}

/// Armour slots scanned by effects that pick a random worn piece,
/// in a fixed order.
pub const ARMOUR_SLOTS: [EquipSlot; 6] = [
    EquipSlot::Body,
    EquipSlot::Cloak,
    EquipSlot::Helmet,
    EquipSlot::Gloves,
    EquipSlot::Boots,
    EquipSlot::Barding,
];

/// What the player has equipped, as slot -> inventory letter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    worn: HashMap<EquipSlot, char>,
}

impl Equipment {
    /// Letter of the first item in a slot, if any
    pub fn first_in_slot(&self, slot: EquipSlot) -> Option<char> {
        self.worn.get(&slot).copied()
    }

    /// Equip the item with the given inventory letter in a slot
    pub fn set_slot(&mut self, slot: EquipSlot, letter: char) {
        self.worn.insert(slot, letter);
    }

    /// Empty a slot
    pub fn clear_slot(&mut self, slot: EquipSlot) {
        self.worn.remove(&slot);
    }
}

bitflags! {
    /// Displays that need recomputing after gear changes
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct RedrawFlags: u8 {
        const GEAR = 0x01;
        const ARMOUR_CLASS = 0x02;
        const EVASION = 0x04;
        const QUIVER = 0x08;
    }
}
