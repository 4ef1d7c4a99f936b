//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Named audio cues for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    Gunshot,
    EnemyGunshot,
    HitImpact,
    PlayerHit,
    UseItem,
}

/// Gameplay events, drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveStarted {
        wave_number: u32,
        is_boss_wave: bool,
        enemy_count: u32,
    },
    EnemySpawned {
        enemy_id: u32,
        is_boss: bool,
        position: Position,
    },
    EnemyKilled {
        enemy_id: u32,
        is_boss: bool,
        /// Where the enemy fell.
        position: Position,
        score_gain: u64,
        money_gain: u64,
    },
    /// A standard wave was cleared; the next one follows automatically.
    WaveCleared { wave_number: u32 },
    /// A boss wave was cleared; survival mode stops until re-activated.
    BossWaveCleared { wave_number: u32, reward: u64 },
    WavesDeactivated { wave_number: u32 },
    PlayerDamaged { amount: f64, health: f64 },
    ProjectileRetired {
        owner: ProjectileOwner,
        reason: RetireReason,
        position: Position,
    },
    GunUpgraded { level: u32, cost: u64 },
    UpgradeRejected { reason: UpgradeRejection },
    /// Carries the progress code that restores the current gun level.
    GameOver { score: u64, progress_code: String },
    ProgressRestored { gun_level: u32 },
}
