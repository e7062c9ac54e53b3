//! Resonance forge driver
//!
//! Builds a small demo character, asks for confirmation, performs the
//! forge, and prints the outcome. Callers of the library gate the
//! guardian-wave side effect on the reported `spawn_wave` flag; here it
//! is only printed.

use std::io;
use std::process::exit;
use std::str::FromStr;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use strum::IntoEnumIterator;

use rf_core::action::{ForgeTarget, resonance_forge};
use rf_core::item::{ArmourKind, Item, ItemId, ItemKind, MissileKind, WeaponKind};
use rf_core::player::EquipSlot;
use rf_core::{GameRng, GameState};
use rf_tui::prompt::show_forge_prompt;
use rf_tui::theme::Theme;

/// Invoke the resonance forge against a demo kit
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(author, version, about = "Resonance forge — re-enchant an equipped item", long_about = None)]
struct Args {
    /// Forge focus (weapon, ranged, armour, shield, offhand, thrown)
    #[arg(short, long, default_value = "weapon")]
    target: String,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// List the accepted focus tokens and exit
    #[arg(short, long)]
    list: bool,

    /// Force the light terminal theme
    #[arg(long)]
    light: bool,

    /// Skip the confirmation dialog
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.list {
        for target in ForgeTarget::iter() {
            println!("{:<8} {}", target.token(), target.noun());
        }
        return Ok(());
    }

    let target = match ForgeTarget::from_str(&args.target) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("forge: {err}");
            eprintln!(
                "accepted tokens: {}",
                ForgeTarget::iter()
                    .map(|t| t.token())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            exit(2);
        }
    };

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    let mut state = demo_state(args.seed);

    let confirmed = if args.yes {
        true
    } else {
        prompt_in_terminal(target, &theme)?
    };
    if !confirmed {
        println!("You step back from the forge.");
        return Ok(());
    }

    let outcome = resonance_forge(&mut state, target);

    for msg in &state.messages {
        println!("{}", msg.text);
    }
    if state.messages.is_empty() {
        // Failure and resistance outcomes only reach the caller
        println!("{}", outcome.message);
    }
    if outcome.spawn_wave {
        println!("(The forge's guardians stir; a wave will answer this use.)");
    }

    Ok(())
}

/// Run the blocking confirmation dialog inside a raw-mode alternate
/// screen, restoring the terminal before returning.
fn prompt_in_terminal(target: ForgeTarget, theme: &Theme) -> io::Result<bool> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let confirmed = show_forge_prompt(&mut terminal, target, theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    confirmed
}

/// A small kit that gives every forge focus something to find
fn demo_state(seed: Option<u64>) -> GameState {
    let rng = match seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut state = GameState::new(rng);
    let mut id = ItemId::NONE;
    let mut fresh = move || {
        id = id.next();
        id
    };

    let sword = state.add_to_inventory(Item::new(
        fresh(),
        ItemKind::Weapon(WeaponKind::LongSword),
    ));
    state.equip(EquipSlot::Weapon, sword);

    let dagger =
        state.add_to_inventory(Item::new(fresh(), ItemKind::Weapon(WeaponKind::Dagger)));
    state.equip(EquipSlot::Offhand, dagger);

    let mail = state.add_to_inventory(Item::new(
        fresh(),
        ItemKind::Armour(ArmourKind::ChainMail),
    ));
    state.equip(EquipSlot::Body, mail);

    let cloak =
        state.add_to_inventory(Item::new(fresh(), ItemKind::Armour(ArmourKind::Cloak)));
    state.equip(EquipSlot::Cloak, cloak);

    let shield = state.add_to_inventory(Item::new(
        fresh(),
        ItemKind::Armour(ArmourKind::KiteShield),
    ));
    state.equip(EquipSlot::Shield, shield);

    let mut javelins = Item::new(fresh(), ItemKind::Missile(MissileKind::Javelin));
    javelins.quantity = 5;
    let javelins = state.add_to_inventory(javelins);
    state.player.quiver.quiver(javelins);

    state
}
