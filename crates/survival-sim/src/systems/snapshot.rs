//! Snapshot system: builds a `GameStateSnapshot` from the engine state.
//!
//! Read-only with respect to the world.

use hecs::World;

use survival_core::components::{Enemy, Projectile};
use survival_core::enums::GamePhase;
use survival_core::events::{AudioCue, SimEvent};
use survival_core::state::*;
use survival_core::types::{Position, SimTime, Velocity};

use crate::economy::Economy;
use crate::player::PlayerState;
use crate::waves::WaveManager;

/// Build a complete snapshot. `events` and `audio` are the drained buffers
/// for this tick.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    waves: &WaveManager,
    player: &PlayerState,
    events: Vec<SimEvent>,
    audio: Vec<AudioCue>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);

    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            score: economy.score,
            money: economy.money,
            gun_level: economy.gun_level,
            damage_multiplier: economy.damage_multiplier(),
            upgrade_cost: economy.next_upgrade_cost(),
            wave_number: waves.wave_number(),
            wave_phase: waves.phase(),
            is_boss_wave: waves.is_boss_wave(),
            enemies_remaining: enemies.len() as u32,
        },
        player: PlayerView {
            position: player.position,
            health: player.health,
            hunger: player.hunger,
            energy: player.energy,
            speed_boost_secs: player.modifiers.speed_boost_secs,
            no_bullet_drop: player.modifiers.no_bullet_drop,
        },
        enemies,
        projectiles: build_projectiles(world),
        events,
        audio,
    }
}

/// Enemies sorted by id for stable output.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            enemy_id: enemy.id,
            position: *pos,
            health: enemy.health,
            is_boss: enemy.is_boss,
        })
        .collect();
    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            owner: projectile.owner,
            position: *pos,
            velocity: *vel,
            lifetime_secs: projectile.lifetime_secs,
        })
        .collect()
}
