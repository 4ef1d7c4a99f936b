//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOwner;

/// A hostile combatant spawned by a wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id, unique within a session.
    pub id: u32,
    pub health: f64,
    pub is_boss: bool,
    /// Minimum seconds between shots.
    pub fire_cooldown_secs: f64,
    /// Simulation time of the last shot.
    pub last_shot_secs: f64,
    /// Damage carried by this enemy's projectiles.
    pub projectile_damage: f64,
}

/// An in-flight projectile. Position and velocity are separate components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    /// Seconds until the projectile expires.
    pub lifetime_secs: f64,
    /// Damage on hit. `None` falls back to the owner's default.
    pub damage: Option<f64>,
}
