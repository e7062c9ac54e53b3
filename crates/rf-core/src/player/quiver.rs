//! Quiver selection
//!
//! The player's currently selected thrown-attack choice. The quiver holds
//! an inventory letter which may go stale; consumers re-validate it
//! against the inventory at the point of use.

use serde::{Deserialize, Serialize};

/// The active quiver action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiver {
    selected: Option<char>,
}

impl Quiver {
    /// Select an inventory letter as the active ammunition
    pub fn quiver(&mut self, letter: char) {
        self.selected = Some(letter);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Letter of the active quiver action, if any
    pub fn selected(&self) -> Option<char> {
        self.selected
    }
}
