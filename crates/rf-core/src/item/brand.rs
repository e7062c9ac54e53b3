//! Brand and ego properties
//!
//! Selection tables for rebranding weapons, armour, and missile stacks.
//! All selection goes through the supplied [`GameRng`] so results are
//! reproducible under a fixed seed.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{ArmourKind, Item, ItemKind, MissileKind};
use crate::rng::GameRng;

/// Melee and launcher brands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WeaponBrand {
    Flaming,
    Freezing,
    Venom,
    Electrocution,
    Draining,
    Protection,
    Vampirism,
    Speed,
    Spectral,
    Antimagic,
    Distortion,
    Chaos,
}

impl WeaponBrand {
    /// Name as it appears in an item description ("of ...")
    pub const fn suffix(&self) -> &'static str {
        match self {
            WeaponBrand::Flaming => "flaming",
            WeaponBrand::Freezing => "freezing",
            WeaponBrand::Venom => "venom",
            WeaponBrand::Electrocution => "electrocution",
            WeaponBrand::Draining => "draining",
            WeaponBrand::Protection => "protection",
            WeaponBrand::Vampirism => "vampirism",
            WeaponBrand::Speed => "speed",
            WeaponBrand::Spectral => "spectral binding",
            WeaponBrand::Antimagic => "antimagic",
            WeaponBrand::Distortion => "distortion",
            WeaponBrand::Chaos => "chaos",
        }
    }
}

/// Armour and shield egos
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ArmourEgo {
    Ponderousness,
    Resistance,
    Reflection,
    Willpower,
    Rampaging,
    Fire,
    Cold,
    Poison,
    Stealth,
    Strength,
    SeeInvisible,
    Flying,
    Hurling,
}

impl ArmourEgo {
    /// Name as it appears in an item description ("of ...")
    pub const fn suffix(&self) -> &'static str {
        match self {
            ArmourEgo::Ponderousness => "ponderousness",
            ArmourEgo::Resistance => "resistance",
            ArmourEgo::Reflection => "reflection",
            ArmourEgo::Willpower => "willpower",
            ArmourEgo::Rampaging => "rampaging",
            ArmourEgo::Fire => "fire resistance",
            ArmourEgo::Cold => "cold resistance",
            ArmourEgo::Poison => "poison resistance",
            ArmourEgo::Stealth => "stealth",
            ArmourEgo::Strength => "strength",
            ArmourEgo::SeeInvisible => "see invisible",
            ArmourEgo::Flying => "flying",
            ArmourEgo::Hurling => "hurling",
        }
    }
}

/// Missile brands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MissileBrand {
    Silver,
    Dispersal,
    Chaos,
    Disjunction,
}

impl MissileBrand {
    /// Name as it appears in an item description ("of ...");
    /// silver reads as a prefix instead (see the naming module).
    pub const fn suffix(&self) -> &'static str {
        match self {
            MissileBrand::Silver => "silver",
            MissileBrand::Dispersal => "dispersal",
            MissileBrand::Chaos => "chaos",
            MissileBrand::Disjunction => "disjunction",
        }
    }
}

/// Active brand on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    None,
    Weapon(WeaponBrand),
    Armour(ArmourEgo),
    Missile(MissileBrand),
}

const MELEE_BRANDS: &[(u32, WeaponBrand)] = &[
    (15, WeaponBrand::Flaming),
    (15, WeaponBrand::Freezing),
    (10, WeaponBrand::Venom),
    (8, WeaponBrand::Electrocution),
    (8, WeaponBrand::Draining),
    (5, WeaponBrand::Protection),
    (5, WeaponBrand::Vampirism),
    (3, WeaponBrand::Speed),
    (3, WeaponBrand::Spectral),
    (2, WeaponBrand::Antimagic),
    (2, WeaponBrand::Chaos),
    (1, WeaponBrand::Distortion),
];

const RANGED_BRANDS: &[(u32, WeaponBrand)] = &[
    (15, WeaponBrand::Flaming),
    (15, WeaponBrand::Freezing),
    (8, WeaponBrand::Electrocution),
    (8, WeaponBrand::Draining),
    (4, WeaponBrand::Speed),
    (3, WeaponBrand::Antimagic),
    (2, WeaponBrand::Chaos),
];

/// Give a weapon a fresh random brand, always different from its current
/// one. No-op for non-weapons.
pub fn rebrand_weapon(item: &mut Item, rng: &mut GameRng) {
    let ItemKind::Weapon(kind) = item.kind else {
        return;
    };
    let table = if kind.is_ranged() {
        RANGED_BRANDS
    } else {
        MELEE_BRANDS
    };

    let new_brand = loop {
        // The tables are non-empty, so the draw cannot fail
        if let Some(pick) = rng.choose_weighted(table)
            && Brand::Weapon(pick) != item.brand
        {
            break pick;
        }
    };
    item.brand = Brand::Weapon(new_brand);
}

/// Per-subtype ego tables. The `None` entries are the plain, un-egoed
/// outcome and carry most of the weight.
fn armour_ego_table(kind: ArmourKind) -> &'static [(u32, Option<ArmourEgo>)] {
    use ArmourEgo::*;

    if kind.is_shield() {
        return &[
            (30, None),
            (10, Some(Reflection)),
            (6, Some(Fire)),
            (6, Some(Cold)),
            (4, Some(Poison)),
        ];
    }
    if kind.is_body_armour() {
        return &[
            (30, None),
            (10, Some(Fire)),
            (10, Some(Cold)),
            (8, Some(Poison)),
            (6, Some(Willpower)),
            (2, Some(Resistance)),
        ];
    }
    match kind {
        ArmourKind::Cloak => &[
            (30, None),
            (12, Some(Poison)),
            (10, Some(Willpower)),
            (8, Some(Stealth)),
        ],
        ArmourKind::Helmet => &[(30, None), (10, Some(SeeInvisible)), (8, Some(Willpower))],
        ArmourKind::Gloves => &[(30, None), (12, Some(Strength)), (8, Some(Hurling))],
        ArmourKind::Boots => &[
            (30, None),
            (10, Some(Rampaging)),
            (10, Some(Stealth)),
            (5, Some(Flying)),
        ],
        // Barding, and anything not otherwise covered
        _ => &[(30, None), (8, Some(Fire)), (8, Some(Cold)), (5, Some(Flying))],
    }
}

/// Draw a random ego appropriate to the given armour subtype.
///
/// Returns `None` for a plain result, which is a common outcome.
pub fn choose_armour_ego(kind: ArmourKind, rng: &mut GameRng) -> Option<ArmourEgo> {
    rng.choose_weighted(armour_ego_table(kind)).flatten()
}

/// Random brand for a missile stack, weighted per subtype
pub fn random_missile_brand(kind: MissileKind, rng: &mut GameRng) -> MissileBrand {
    use MissileBrand::*;

    let table: &[(u32, MissileBrand)] = match kind {
        MissileKind::Javelin => &[(45, Silver), (35, Dispersal), (20, Chaos)],
        MissileKind::LargeRock | MissileKind::Stone => &[(60, Dispersal), (40, Chaos)],
        MissileKind::Dart => &[(50, Disjunction), (35, Dispersal), (15, Chaos)],
        MissileKind::ThrowingNet => &[(100, Dispersal)],
        MissileKind::SlingBullet | MissileKind::Slug | MissileKind::Boomerang => {
            &[(65, Dispersal), (35, Chaos)]
        }
    };
    rng.choose_weighted(table).unwrap_or(Dispersal)
}
