//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, or applied
//! immediately through the engine's direct-call methods.

use serde::{Deserialize, Serialize};

use crate::enums::PowerupKind;
use crate::types::{Position, Velocity};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat ---
    /// Fire the gun from `origin` along `direction` (need not be normalised).
    Fire { origin: Position, direction: Velocity },
    /// Buy the next gun level (only at a portal).
    UpgradeGun,

    // --- Survival mode ---
    /// Start survival mode from wave 1.
    ActivateWaves,
    /// Forced exit: clear enemies and stop.
    DeactivateWaves,

    // --- Movement ---
    /// Walking intent on the ground plane. Zero stops.
    SetMoveIntent { x: f64, z: f64 },
    /// Teleport the player (fast travel, respawn).
    SetPlayerPosition { position: Position },

    // --- Modifiers and items ---
    /// Toggle the gravity exemption for player projectiles.
    SetNoBulletDrop { enabled: bool },
    /// Consume a power-up.
    UsePowerup { kind: PowerupKind },
    /// Restore the gun level from a code handed out at game over.
    /// Invalid codes are ignored.
    RedeemProgressCode { code: String },

    // --- Simulation control ---
    Pause,
    Resume,
    /// Full reset after game over (or at any time).
    Reset,
}
