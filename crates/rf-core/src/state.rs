//! Game state
//!
//! The player, their inventory, the RNG, the live message queue, and the
//! permanent note history. Actions take the state by `&mut` reference;
//! there is no global player context.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemClass};
use crate::player::{EquipSlot, Player};
use crate::rng::GameRng;

/// Message channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Channel {
    #[default]
    Plain,
    /// Permanent character changes (brands, mutations)
    IntrinsicGain,
}

/// One emitted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub channel: Channel,
    pub text: String,
}

/// A permanent, player-visible history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Turn the note was taken on
    pub turn: u64,
    pub text: String,
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player character
    pub player: Player,

    /// Player inventory
    pub inventory: Vec<Item>,

    /// Random number generator
    pub rng: GameRng,

    /// Turn counter
    pub turns: u64,

    /// Messages for the current turn
    #[serde(skip)]
    pub messages: Vec<Message>,

    /// Permanent note history
    pub notes: Vec<Note>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl GameState {
    /// Create a new game state with the given RNG
    pub fn new(rng: GameRng) -> Self {
        Self {
            player: Player::default(),
            inventory: Vec::new(),
            rng,
            turns: 0,
            messages: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Add a message on the plain channel
    pub fn message(&mut self, msg: impl Into<String>) {
        self.message_ch(Channel::Plain, msg);
    }

    /// Add a message on a specific channel
    pub fn message_ch(&mut self, channel: Channel, msg: impl Into<String>) {
        self.messages.push(Message {
            channel,
            text: msg.into(),
        });
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Append an entry to the permanent note history
    pub fn take_note(&mut self, text: impl Into<String>) {
        self.notes.push(Note {
            turn: self.turns,
            text: text.into(),
        });
    }

    /// Add an item to the player's inventory, assigning a free letter
    pub fn add_to_inventory(&mut self, mut item: Item) -> char {
        let used: Vec<char> = self.inventory.iter().map(|i| i.inv_letter).collect();

        let letter = ('a'..='z')
            .chain('A'..='Z')
            .find(|c| !used.contains(c))
            .unwrap_or('$');

        item.inv_letter = letter;
        self.inventory.push(item);
        letter
    }

    /// Get item from inventory by letter
    pub fn get_inventory_item(&self, letter: char) -> Option<&Item> {
        self.inventory.iter().find(|i| i.inv_letter == letter)
    }

    /// Get mutable item from inventory by letter
    pub fn get_inventory_item_mut(&mut self, letter: char) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|i| i.inv_letter == letter)
    }

    /// Equip an inventory item in a slot
    pub fn equip(&mut self, slot: EquipSlot, letter: char) {
        self.player.equipment.set_slot(slot, letter);
    }

    /// First item equipped in a slot, if any
    pub fn equipped_in(&self, slot: EquipSlot) -> Option<&Item> {
        let letter = self.player.equipment.first_in_slot(slot)?;
        self.get_inventory_item(letter)
    }

    /// The wielded weapon, if any
    pub fn wielded_weapon(&self) -> Option<&Item> {
        self.equipped_in(EquipSlot::Weapon)
    }

    /// The off-hand weapon, if any
    pub fn offhand_weapon(&self) -> Option<&Item> {
        self.equipped_in(EquipSlot::Offhand)
    }

    /// The worn shield, if any
    pub fn shield(&self) -> Option<&Item> {
        self.equipped_in(EquipSlot::Shield)
    }

    /// The item selected by the active quiver action, if the selection
    /// still resolves to held ammunition.
    pub fn quivered_item(&self) -> Option<&Item> {
        let letter = self.player.quiver.selected()?;
        let item = self.get_inventory_item(letter)?;
        if item.class() != ItemClass::Missile {
            return None;
        }
        Some(item)
    }
}
