//! rf-tui: Terminal UI layer using ratatui
//!
//! Provides the forge confirmation dialog and the terminal theme.

pub mod prompt;
pub mod theme;

pub use prompt::{ForgePrompt, show_forge_prompt};
pub use theme::Theme;
