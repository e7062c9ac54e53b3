//! Item naming
//!
//! Builds context-sensitive display descriptions from subtype names and
//! instance modifiers (enchantment, quantity, brand).

use super::{Brand, Item, ItemKind, MissileBrand};

/// Possessive form for an item description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescForm {
    /// "your long sword"
    Your,
    /// "the long sword"
    The,
}

/// Full description of an item.
///
/// Artefacts render their stored name verbatim; mundane items render as
/// `{your|the} [+N] [qty] base [brand affix]`.
pub fn item_desc(item: &Item, form: DescForm) -> String {
    if let Some(name) = &item.artefact_name {
        return name.clone();
    }

    let mut out = match form {
        DescForm::Your => String::from("your"),
        DescForm::The => String::from("the"),
    };

    if item.enchantment != 0 {
        out.push_str(&format!(" {:+}", item.enchantment));
    }

    if item.quantity > 1 {
        out.push_str(&format!(" {}", item.quantity));
    }

    // Silver reads as a prefix; every other brand as an "of ..." suffix
    if item.brand == Brand::Missile(MissileBrand::Silver) {
        out.push_str(" silver");
    }

    let base = base_name(item.kind);
    out.push(' ');
    if item.quantity > 1 {
        out.push_str(&plural(base));
    } else {
        out.push_str(base);
    }

    match item.brand {
        Brand::None | Brand::Missile(MissileBrand::Silver) => {}
        Brand::Weapon(brand) => {
            out.push_str(" of ");
            out.push_str(brand.suffix());
        }
        Brand::Armour(ego) => {
            out.push_str(" of ");
            out.push_str(ego.suffix());
        }
        Brand::Missile(brand) => {
            out.push_str(" of ");
            out.push_str(brand.suffix());
        }
    }

    out
}

fn base_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Weapon(k) => k.name(),
        ItemKind::Armour(k) => k.name(),
        ItemKind::Missile(k) => k.name(),
    }
}

/// Simple pluralization; good enough for the subtype names we own
fn plural(base: &str) -> String {
    format!("{base}s")
}
