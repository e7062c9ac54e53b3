//! Item system
//!
//! Item instances, subtype definitions, brand properties, and naming.

mod brand;
mod def;
mod name;

pub use brand::{
    ArmourEgo, Brand, MissileBrand, WeaponBrand, choose_armour_ego, random_missile_brand,
    rebrand_weapon,
};
pub use def::{ArmourKind, Item, ItemClass, ItemId, ItemKind, MissileKind, WeaponKind};
pub use name::{DescForm, item_desc};
