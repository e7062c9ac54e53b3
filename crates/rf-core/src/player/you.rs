//! The player character

use serde::{Deserialize, Serialize};

use super::{Equipment, Quiver, RedrawFlags};

/// Player character state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Worn and wielded gear
    pub equipment: Equipment,

    /// Active thrown-attack selection
    pub quiver: Quiver,

    /// Pending display recomputes (transient)
    #[serde(skip)]
    pub redraw: RedrawFlags,
}
