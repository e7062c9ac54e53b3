//! The resonance forge
//!
//! A player-invoked action that re-enchants one equipped item of a chosen
//! category. The outcome reports whether the action was consumed and
//! whether a guardian wave should follow; callers trigger the wave
//! themselves when `spawn_wave` is set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use thiserror::Error;

use crate::item::{
    ArmourEgo, ArmourKind, Brand, DescForm, Item, ItemKind, choose_armour_ego, item_desc,
    random_missile_brand, rebrand_weapon,
};
use crate::player::{ARMOUR_SLOTS, RedrawFlags};
use crate::rng::GameRng;
use crate::state::{Channel, GameState};

/// Equipment category the forge can focus on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum ForgeTarget {
    Weapon,
    Ranged,
    Armour,
    Shield,
    Offhand,
    Thrown,
}

/// Unknown forge target token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown forge target '{0}'")]
pub struct ParseTargetError(pub String);

impl FromStr for ForgeTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weapon" => Ok(ForgeTarget::Weapon),
            "ranged" => Ok(ForgeTarget::Ranged),
            "armour" => Ok(ForgeTarget::Armour),
            "shield" => Ok(ForgeTarget::Shield),
            "offhand" => Ok(ForgeTarget::Offhand),
            "thrown" => Ok(ForgeTarget::Thrown),
            other => Err(ParseTargetError(other.to_string())),
        }
    }
}

impl ForgeTarget {
    /// The parse token for this target
    pub const fn token(self) -> &'static str {
        match self {
            ForgeTarget::Weapon => "weapon",
            ForgeTarget::Ranged => "ranged",
            ForgeTarget::Armour => "armour",
            ForgeTarget::Shield => "shield",
            ForgeTarget::Offhand => "offhand",
            ForgeTarget::Thrown => "thrown",
        }
    }

    /// Display noun; not the parse token
    pub const fn noun(self) -> &'static str {
        match self {
            ForgeTarget::Weapon => "weapon",
            ForgeTarget::Ranged => "ranged weapon",
            ForgeTarget::Armour => "armour",
            ForgeTarget::Shield => "shield",
            ForgeTarget::Offhand => "off-hand weapon",
            ForgeTarget::Thrown => "thrown ammunition",
        }
    }

    /// Usage hint shown in the confirmation dialog
    pub const fn usage_hint(self) -> &'static str {
        match self {
            ForgeTarget::Weapon => {
                "Wield the melee weapon you wish to reshape before invoking the forge."
            }
            ForgeTarget::Ranged => "Wield the bow, crossbow, or launcher you wish to reshape.",
            ForgeTarget::Armour => "Wear the piece of armour you wish to retune.",
            ForgeTarget::Shield => "Equip the shield you wish to reshape in your off hand.",
            ForgeTarget::Offhand => "Equip the auxiliary or off-hand weapon you wish to retune.",
            ForgeTarget::Thrown => "Quiver the ammunition stack you wish to retune.",
        }
    }
}

impl fmt::Display for ForgeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Result of one forge invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeOutcome {
    /// The action found a target and was consumed
    pub ok: bool,

    /// Outcome message for the caller
    pub message: String,

    /// A guardian wave should follow; true iff a brand actually changed
    pub spawn_wave: bool,
}

impl ForgeOutcome {
    fn failed(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
            spawn_wave: false,
        }
    }
}

/// Perform the resonance forge on the chosen category.
///
/// Exactly one category branch runs per call. Artefacts resist the forge:
/// the action is still consumed but nothing changes and no wave follows.
pub fn resonance_forge(state: &mut GameState, target: ForgeTarget) -> ForgeOutcome {
    match target {
        ForgeTarget::Weapon => {
            let Some(letter) = resolve_melee_weapon(state) else {
                return ForgeOutcome::failed("You have no suitable melee weapon wielded.");
            };
            forge_weapon_at(state, letter)
        }
        ForgeTarget::Ranged => {
            let Some(letter) = resolve_ranged_weapon(state) else {
                return ForgeOutcome::failed("You must wield a launcher to attune it.");
            };
            forge_weapon_at(state, letter)
        }
        ForgeTarget::Armour => {
            let candidates = gather_armour_targets(state);
            let Some(&letter) = state.rng.choose(&candidates) else {
                return ForgeOutcome::failed("You are not wearing any reforgable armour.");
            };
            forge_armour_at(state, letter)
        }
        ForgeTarget::Shield => {
            let Some(shield) = state.shield() else {
                return ForgeOutcome::failed("You are not wielding a reforgable shield.");
            };
            let letter = shield.inv_letter;
            forge_armour_at(state, letter)
        }
        ForgeTarget::Offhand => {
            let Some(offhand) = state.offhand_weapon() else {
                return ForgeOutcome::failed("You have no reforgable off-hand weapon.");
            };
            let letter = offhand.inv_letter;
            forge_weapon_at(state, letter)
        }
        ForgeTarget::Thrown => {
            let Some(ammo) = state.quivered_item() else {
                return ForgeOutcome::failed("You must quiver ammunition to reforge it.");
            };
            let letter = ammo.inv_letter;
            forge_thrown_at(state, letter)
        }
    }
}

/// Wielded weapon letter, melee only
fn resolve_melee_weapon(state: &GameState) -> Option<char> {
    let weapon = state.wielded_weapon()?;
    match weapon.kind {
        ItemKind::Weapon(kind) if !kind.is_ranged() => Some(weapon.inv_letter),
        _ => None,
    }
}

/// Wielded weapon letter, launchers only
fn resolve_ranged_weapon(state: &GameState) -> Option<char> {
    let weapon = state.wielded_weapon()?;
    match weapon.kind {
        ItemKind::Weapon(kind) if kind.is_ranged() => Some(weapon.inv_letter),
        _ => None,
    }
}

/// Every worn armour piece, scanning the fixed slot order
fn gather_armour_targets(state: &GameState) -> Vec<char> {
    ARMOUR_SLOTS
        .iter()
        .filter_map(|&slot| state.equipped_in(slot))
        .map(|item| item.inv_letter)
        .collect()
}

/// Up to 10 attempts at a subtype-appropriate ego, then a uniform
/// fallback among the general-purpose egos if every attempt comes up
/// plain.
fn forge_armour_ego(kind: ArmourKind, rng: &mut GameRng) -> ArmourEgo {
    for _ in 0..10 {
        if let Some(ego) = choose_armour_ego(kind, rng) {
            return ego;
        }
    }

    const FALLBACK: [(u32, ArmourEgo); 5] = [
        (1, ArmourEgo::Ponderousness),
        (1, ArmourEgo::Resistance),
        (1, ArmourEgo::Reflection),
        (1, ArmourEgo::Willpower),
        (1, ArmourEgo::Rampaging),
    ];
    rng.choose_weighted(&FALLBACK).unwrap_or(ArmourEgo::Resistance)
}

fn forge_weapon_at(state: &mut GameState, letter: char) -> ForgeOutcome {
    forge_item_at(state, letter, RedrawFlags::GEAR, |item, rng| {
        rebrand_weapon(item, rng);
    })
}

fn forge_armour_at(state: &mut GameState, letter: char) -> ForgeOutcome {
    let redraw = RedrawFlags::GEAR | RedrawFlags::ARMOUR_CLASS | RedrawFlags::EVASION;
    forge_item_at(state, letter, redraw, |item, rng| {
        if let ItemKind::Armour(kind) = item.kind {
            item.brand = Brand::Armour(forge_armour_ego(kind, rng));
        }
    })
}

fn forge_thrown_at(state: &mut GameState, letter: char) -> ForgeOutcome {
    let redraw = RedrawFlags::GEAR | RedrawFlags::QUIVER;
    forge_item_at(state, letter, redraw, |item, rng| {
        if let ItemKind::Missile(kind) = item.kind {
            item.brand = Brand::Missile(random_missile_brand(kind, rng));
        }
    })
}

/// Shared application path: artefact check, brand mutation, announce,
/// display-dirty flags.
fn forge_item_at(
    state: &mut GameState,
    letter: char,
    redraw: RedrawFlags,
    apply: impl FnOnce(&mut Item, &mut GameRng),
) -> ForgeOutcome {
    let Some(idx) = state.inventory.iter().position(|i| i.inv_letter == letter) else {
        return ForgeOutcome::failed("The forge cannot function.");
    };

    if state.inventory[idx].is_artefact() {
        return resonance_resistance(&state.inventory[idx]);
    }

    let item = &mut state.inventory[idx];
    let old_name = item_desc(item, DescForm::Your);
    apply(item, &mut state.rng);
    let new_name = item_desc(&state.inventory[idx], DescForm::Your);

    let message = announce_success(state, &old_name, &new_name);
    state.player.redraw |= redraw;

    ForgeOutcome {
        ok: true,
        message,
        spawn_wave: true,
    }
}

/// Artefacts absorb the resonance: the action is consumed but nothing
/// changes and no wave follows.
fn resonance_resistance(item: &Item) -> ForgeOutcome {
    ForgeOutcome {
        ok: true,
        message: format!(
            "The forge's resonance skitters off {}; it resists change.",
            item_desc(item, DescForm::Your)
        ),
        spawn_wave: false,
    }
}

fn announce_success(state: &mut GameState, old_name: &str, new_name: &str) -> String {
    let message = if old_name == new_name {
        format!("You infuse {new_name} with resonant harmonics!")
    } else {
        format!("You forge {old_name} into {new_name}!")
    };

    state.message_ch(Channel::IntrinsicGain, message.clone());
    state.take_note(message.clone());
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, MissileBrand, MissileKind, WeaponKind};
    use crate::player::EquipSlot;

    fn state() -> GameState {
        GameState::new(GameRng::new(42))
    }

    fn give(state: &mut GameState, id: u32, kind: ItemKind) -> char {
        state.add_to_inventory(Item::new(ItemId(id), kind))
    }

    fn give_equipped(state: &mut GameState, id: u32, kind: ItemKind, slot: EquipSlot) -> char {
        let letter = give(state, id, kind);
        state.equip(slot, letter);
        letter
    }

    #[test]
    fn test_weapon_requires_melee_wielded() {
        let mut state = state();
        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);
        assert!(!outcome.ok);
        assert!(!outcome.spawn_wave);
        assert_eq!(outcome.message, "You have no suitable melee weapon wielded.");
    }

    #[test]
    fn test_weapon_rejects_wielded_launcher() {
        let mut state = state();
        give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::Longbow),
            EquipSlot::Weapon,
        );
        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You have no suitable melee weapon wielded.");
    }

    #[test]
    fn test_ranged_rejects_wielded_melee() {
        let mut state = state();
        give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::LongSword),
            EquipSlot::Weapon,
        );
        let outcome = resonance_forge(&mut state, ForgeTarget::Ranged);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You must wield a launcher to attune it.");
    }

    #[test]
    fn test_forge_melee_weapon() {
        let mut state = state();
        let letter = give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::LongSword),
            EquipSlot::Weapon,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);
        assert!(outcome.ok);
        assert!(outcome.spawn_wave);
        assert!(outcome.message.starts_with("You forge your long sword into "));

        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(item.brand, Brand::Weapon(_)));
        assert!(state.player.redraw.contains(RedrawFlags::GEAR));
        assert!(!state.player.redraw.contains(RedrawFlags::ARMOUR_CLASS));
    }

    #[test]
    fn test_forge_launcher_via_ranged() {
        let mut state = state();
        let letter = give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::Arbalest),
            EquipSlot::Weapon,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Ranged);
        assert!(outcome.ok);
        assert!(outcome.spawn_wave);
        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(item.brand, Brand::Weapon(_)));
    }

    #[test]
    fn test_artefact_resists() {
        let mut state = state();
        let letter = give(&mut state, 1, ItemKind::Weapon(WeaponKind::Scimitar));
        {
            let item = state.get_inventory_item_mut(letter).unwrap();
            item.artefact_name = Some(String::from("the Singing Sword"));
        }
        state.equip(EquipSlot::Weapon, letter);

        let before = state.get_inventory_item(letter).unwrap().brand;
        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);

        assert!(outcome.ok);
        assert!(!outcome.spawn_wave);
        assert_eq!(
            outcome.message,
            "The forge's resonance skitters off the Singing Sword; it resists change."
        );
        assert_eq!(state.get_inventory_item(letter).unwrap().brand, before);
        assert!(state.notes.is_empty());
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_armour_with_no_candidates_fails() {
        let mut state = state();
        // A wielded weapon is not an armour candidate
        give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::Dagger),
            EquipSlot::Weapon,
        );
        let outcome = resonance_forge(&mut state, ForgeTarget::Armour);
        assert!(!outcome.ok);
        assert!(!outcome.spawn_wave);
        assert_eq!(outcome.message, "You are not wearing any reforgable armour.");
    }

    #[test]
    fn test_armour_single_candidate_is_deterministic() {
        let mut state = state();
        let letter = give_equipped(
            &mut state,
            1,
            ItemKind::Armour(ArmourKind::Cloak),
            EquipSlot::Cloak,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Armour);
        assert!(outcome.ok);
        assert!(outcome.spawn_wave);

        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(item.brand, Brand::Armour(_)));
        assert!(state.player.redraw.contains(RedrawFlags::ARMOUR_CLASS));
        assert!(state.player.redraw.contains(RedrawFlags::EVASION));
    }

    #[test]
    fn test_armour_picks_among_worn_pieces() {
        let mut state = state();
        let body = give_equipped(
            &mut state,
            1,
            ItemKind::Armour(ArmourKind::ChainMail),
            EquipSlot::Body,
        );
        let boots = give_equipped(
            &mut state,
            2,
            ItemKind::Armour(ArmourKind::Boots),
            EquipSlot::Boots,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Armour);
        assert!(outcome.ok);

        let branded = [body, boots]
            .iter()
            .filter(|&&l| {
                matches!(
                    state.get_inventory_item(l).unwrap().brand,
                    Brand::Armour(_)
                )
            })
            .count();
        assert_eq!(branded, 1);
    }

    #[test]
    fn test_shield_requires_shield() {
        let mut state = state();
        let outcome = resonance_forge(&mut state, ForgeTarget::Shield);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You are not wielding a reforgable shield.");
    }

    #[test]
    fn test_forge_shield() {
        let mut state = state();
        let letter = give_equipped(
            &mut state,
            1,
            ItemKind::Armour(ArmourKind::KiteShield),
            EquipSlot::Shield,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Shield);
        assert!(outcome.ok);
        assert!(outcome.spawn_wave);
        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(item.brand, Brand::Armour(_)));
    }

    #[test]
    fn test_offhand_requires_offhand_weapon() {
        let mut state = state();
        // A wielded main-hand weapon does not satisfy the off-hand focus
        give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::LongSword),
            EquipSlot::Weapon,
        );
        let outcome = resonance_forge(&mut state, ForgeTarget::Offhand);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You have no reforgable off-hand weapon.");
    }

    #[test]
    fn test_forge_offhand_weapon() {
        let mut state = state();
        let letter = give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::Dagger),
            EquipSlot::Offhand,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Offhand);
        assert!(outcome.ok);
        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(item.brand, Brand::Weapon(_)));
    }

    #[test]
    fn test_thrown_requires_quivered_ammo() {
        let mut state = state();
        let outcome = resonance_forge(&mut state, ForgeTarget::Thrown);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You must quiver ammunition to reforge it.");

        // A quivered non-missile is rejected too
        let sword = give(&mut state, 1, ItemKind::Weapon(WeaponKind::LongSword));
        state.player.quiver.quiver(sword);
        let outcome = resonance_forge(&mut state, ForgeTarget::Thrown);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "You must quiver ammunition to reforge it.");
    }

    #[test]
    fn test_forge_quivered_javelins() {
        let mut state = state();
        let mut javelins = Item::new(ItemId(1), ItemKind::Missile(MissileKind::Javelin));
        javelins.quantity = 5;
        let letter = state.add_to_inventory(javelins);
        state.player.quiver.quiver(letter);

        let outcome = resonance_forge(&mut state, ForgeTarget::Thrown);
        assert!(outcome.ok);
        assert!(outcome.spawn_wave);

        let item = state.get_inventory_item(letter).unwrap();
        assert!(matches!(
            item.brand,
            Brand::Missile(
                MissileBrand::Silver | MissileBrand::Dispersal | MissileBrand::Chaos
            )
        ));
        assert!(state.player.redraw.contains(RedrawFlags::QUIVER));
    }

    #[test]
    fn test_success_is_announced_and_noted() {
        let mut state = state();
        give_equipped(
            &mut state,
            1,
            ItemKind::Weapon(WeaponKind::LongSword),
            EquipSlot::Weapon,
        );

        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].channel, Channel::IntrinsicGain);
        assert_eq!(state.messages[0].text, outcome.message);
        assert_eq!(state.notes.len(), 1);
        assert_eq!(state.notes[0].text, outcome.message);
    }

    #[test]
    fn test_failure_is_not_announced() {
        let mut state = state();
        let outcome = resonance_forge(&mut state, ForgeTarget::Weapon);
        assert!(!outcome.ok);
        assert!(state.messages.is_empty());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn test_infuse_variant_when_name_is_stable() {
        // Rebranding an already-branded weapon can land on a different
        // brand only, so the name always changes; armour egos never
        // produce an identical description either once branded. Drive the
        // infuse variant directly through the announce helper.
        let mut state = state();
        let message = announce_success(&mut state, "your long sword", "your long sword");
        assert_eq!(
            message,
            "You infuse your long sword with resonant harmonics!"
        );
    }

    #[test]
    fn test_parse_tokens() {
        for (token, expected) in [
            ("weapon", ForgeTarget::Weapon),
            ("ranged", ForgeTarget::Ranged),
            ("armour", ForgeTarget::Armour),
            ("shield", ForgeTarget::Shield),
            ("offhand", ForgeTarget::Offhand),
            ("thrown", ForgeTarget::Thrown),
        ] {
            assert_eq!(token.parse::<ForgeTarget>().unwrap(), expected);
            assert_eq!(expected.token(), token);
        }

        assert!("armor".parse::<ForgeTarget>().is_err());
        assert!("".parse::<ForgeTarget>().is_err());
        assert!("Weapon".parse::<ForgeTarget>().is_err());
    }

    #[test]
    fn test_nouns_are_not_tokens() {
        assert_eq!(ForgeTarget::Ranged.noun(), "ranged weapon");
        assert_eq!(ForgeTarget::Offhand.noun(), "off-hand weapon");
        assert_eq!(ForgeTarget::Thrown.noun(), "thrown ammunition");
        assert!(ForgeTarget::Ranged.noun().parse::<ForgeTarget>().is_err());
    }

    #[test]
    fn test_armour_ego_fallback_is_general_purpose() {
        // The fallback only fires when ten draws all come up plain; feed
        // it directly to check the membership.
        let mut rng = GameRng::new(42);
        const FALLBACK: [ArmourEgo; 5] = [
            ArmourEgo::Ponderousness,
            ArmourEgo::Resistance,
            ArmourEgo::Reflection,
            ArmourEgo::Willpower,
            ArmourEgo::Rampaging,
        ];
        for _ in 0..100 {
            let ego = forge_armour_ego(ArmourKind::ChainMail, &mut rng);
            // Subtype table hits are fine; what must never appear is an
            // ego foreign to both the subtype table and the fallback set.
            let body_table = [
                ArmourEgo::Fire,
                ArmourEgo::Cold,
                ArmourEgo::Poison,
                ArmourEgo::Willpower,
                ArmourEgo::Resistance,
            ];
            assert!(FALLBACK.contains(&ego) || body_table.contains(&ego));
        }
    }
}
