//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who fired a projectile. Decides which collision targets apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Why a projectile left the world.
///
/// Checks run in declaration order; the first match retires the projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetireReason {
    /// Lifetime ran out.
    Expired,
    /// Entered an environment collider.
    Blocked,
    /// Player projectile struck an enemy.
    Hit,
    /// Enemy projectile struck the player.
    HitPlayer,
    /// Dropped below the ground plane.
    Grounded,
}

/// Wave system life cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Survival mode off (never started, boss cleared, or deactivated).
    #[default]
    Idle,
    /// Enemies of the current wave are alive.
    InProgress,
    /// Standard wave cleared, next wave scheduled.
    Intermission,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
    /// Player health reached zero. Only a reset leaves this phase.
    GameOver,
}

/// Consumable pickups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    Health,
    Energy,
    Ration,
}

/// Reason a gun upgrade was refused. No state changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeRejection {
    /// Not within range of any portal.
    NotAtPortal,
    /// Portal in range but the player cannot pay.
    InsufficientFunds { cost: u64, money: u64 },
}
