//! Game state snapshot: the complete visible state handed to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioCue, SimEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
    pub audio: Vec<AudioCue>,
}

/// Text values shown on the survival HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub money: u64,
    pub gun_level: u32,
    pub damage_multiplier: f64,
    /// Price of the next gun level.
    pub upgrade_cost: u64,
    pub wave_number: u32,
    pub wave_phase: WavePhase,
    pub is_boss_wave: bool,
    pub enemies_remaining: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: f64,
    pub hunger: f64,
    pub energy: f64,
    pub speed_boost_secs: f64,
    pub no_bullet_drop: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub position: Position,
    pub health: f64,
    pub is_boss: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: ProjectileOwner,
    pub position: Position,
    pub velocity: Velocity,
    pub lifetime_secs: f64,
}
