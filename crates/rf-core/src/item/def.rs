//! Item instances and subtype definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Brand;
use crate::player::EquipSlot;

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Broad item classes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemClass {
    Weapon,
    Armour,
    Missile,
}

/// Weapon subtypes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WeaponKind {
    Dagger,
    ShortSword,
    LongSword,
    Scimitar,
    WarAxe,
    Mace,
    Quarterstaff,
    Trident,
    GreatSword,
    Shortbow,
    Longbow,
    Arbalest,
    HandCannon,
    Sling,
}

impl WeaponKind {
    /// Check if this is a ranged-class weapon (a launcher)
    pub const fn is_ranged(&self) -> bool {
        matches!(
            self,
            WeaponKind::Shortbow
                | WeaponKind::Longbow
                | WeaponKind::Arbalest
                | WeaponKind::HandCannon
                | WeaponKind::Sling
        )
    }

    /// Base display name
    pub const fn name(&self) -> &'static str {
        match self {
            WeaponKind::Dagger => "dagger",
            WeaponKind::ShortSword => "short sword",
            WeaponKind::LongSword => "long sword",
            WeaponKind::Scimitar => "scimitar",
            WeaponKind::WarAxe => "war axe",
            WeaponKind::Mace => "mace",
            WeaponKind::Quarterstaff => "quarterstaff",
            WeaponKind::Trident => "trident",
            WeaponKind::GreatSword => "great sword",
            WeaponKind::Shortbow => "shortbow",
            WeaponKind::Longbow => "longbow",
            WeaponKind::Arbalest => "arbalest",
            WeaponKind::HandCannon => "hand cannon",
            WeaponKind::Sling => "sling",
        }
    }
}

/// Armour subtypes, including shields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ArmourKind {
    Robe,
    LeatherArmour,
    RingMail,
    ScaleMail,
    ChainMail,
    PlateArmour,
    Cloak,
    Helmet,
    Gloves,
    Boots,
    Barding,
    Buckler,
    KiteShield,
    TowerShield,
}

impl ArmourKind {
    /// Check if this is a shield
    pub const fn is_shield(&self) -> bool {
        matches!(
            self,
            ArmourKind::Buckler | ArmourKind::KiteShield | ArmourKind::TowerShield
        )
    }

    /// Check if this is a body armour
    pub const fn is_body_armour(&self) -> bool {
        matches!(
            self,
            ArmourKind::Robe
                | ArmourKind::LeatherArmour
                | ArmourKind::RingMail
                | ArmourKind::ScaleMail
                | ArmourKind::ChainMail
                | ArmourKind::PlateArmour
        )
    }

    /// Equipment slot this armour occupies when worn
    pub const fn slot(&self) -> EquipSlot {
        match self {
            ArmourKind::Robe
            | ArmourKind::LeatherArmour
            | ArmourKind::RingMail
            | ArmourKind::ScaleMail
            | ArmourKind::ChainMail
            | ArmourKind::PlateArmour => EquipSlot::Body,
            ArmourKind::Cloak => EquipSlot::Cloak,
            ArmourKind::Helmet => EquipSlot::Helmet,
            ArmourKind::Gloves => EquipSlot::Gloves,
            ArmourKind::Boots => EquipSlot::Boots,
            ArmourKind::Barding => EquipSlot::Barding,
            ArmourKind::Buckler | ArmourKind::KiteShield | ArmourKind::TowerShield => {
                EquipSlot::Shield
            }
        }
    }

    /// Base display name
    pub const fn name(&self) -> &'static str {
        match self {
            ArmourKind::Robe => "robe",
            ArmourKind::LeatherArmour => "leather armour",
            ArmourKind::RingMail => "ring mail",
            ArmourKind::ScaleMail => "scale mail",
            ArmourKind::ChainMail => "chain mail",
            ArmourKind::PlateArmour => "plate armour",
            ArmourKind::Cloak => "cloak",
            ArmourKind::Helmet => "helmet",
            ArmourKind::Gloves => "pair of gloves",
            ArmourKind::Boots => "pair of boots",
            ArmourKind::Barding => "barding",
            ArmourKind::Buckler => "buckler",
            ArmourKind::KiteShield => "kite shield",
            ArmourKind::TowerShield => "tower shield",
        }
    }
}

/// Missile subtypes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MissileKind {
    Stone,
    LargeRock,
    SlingBullet,
    Slug,
    Dart,
    Javelin,
    Boomerang,
    ThrowingNet,
}

impl MissileKind {
    /// Base display name
    pub const fn name(&self) -> &'static str {
        match self {
            MissileKind::Stone => "stone",
            MissileKind::LargeRock => "large rock",
            MissileKind::SlingBullet => "sling bullet",
            MissileKind::Slug => "slug",
            MissileKind::Dart => "dart",
            MissileKind::Javelin => "javelin",
            MissileKind::Boomerang => "boomerang",
            MissileKind::ThrowingNet => "throwing net",
        }
    }
}

/// Subtype-carrying item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponKind),
    Armour(ArmourKind),
    Missile(MissileKind),
}

impl ItemKind {
    /// Broad class of this kind
    pub const fn class(&self) -> ItemClass {
        match self {
            ItemKind::Weapon(_) => ItemClass::Weapon,
            ItemKind::Armour(_) => ItemClass::Armour,
            ItemKind::Missile(_) => ItemClass::Missile,
        }
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Subtype
    pub kind: ItemKind,

    /// Quantity (for missile stacks)
    pub quantity: i32,

    /// Enchantment
    pub enchantment: i8,

    /// Active brand; at most one, a new brand overwrites the old
    pub brand: Brand,

    /// Artefact name. Artefacts are unique, hand-crafted items and are
    /// immune to rebranding.
    pub artefact_name: Option<String>,

    /// Inventory letter
    pub inv_letter: char,
}

impl Item {
    /// Create a new unbranded item of the given kind
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            quantity: 1,
            enchantment: 0,
            brand: Brand::None,
            artefact_name: None,
            inv_letter: '\0',
        }
    }

    /// Check if this is a unique, hand-crafted artefact
    pub const fn is_artefact(&self) -> bool {
        self.artefact_name.is_some()
    }

    /// Broad class of this item
    pub const fn class(&self) -> ItemClass {
        self.kind.class()
    }
}
