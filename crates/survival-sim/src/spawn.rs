//! Spawn director: turns a wave request into concrete enemy placements and stats.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survival_core::constants::*;
use survival_core::types::Position;

/// Everything needed to spawn one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpec {
    pub position: Position,
    pub is_boss: bool,
    pub health: f64,
    pub projectile_damage: f64,
    /// Includes the random jitter.
    pub fire_cooldown_secs: f64,
}

/// Wave-scaled stats before placement and jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f64,
    pub projectile_damage: f64,
    pub base_fire_cooldown_secs: f64,
}

/// Enemies requested for a standard wave: 3, 5, 7, ...
pub fn standard_enemy_count(wave_number: u32) -> u32 {
    ENEMIES_BASE_COUNT
        .saturating_add(wave_number.saturating_sub(1).saturating_mul(ENEMIES_PER_WAVE_GROWTH))
}

/// Radius of the spawn ring around the player. Early waves spawn close.
pub fn ring_radius(wave_number: u32) -> f64 {
    let waves_past_first = wave_number.saturating_sub(1) as f64;
    (SPAWN_RING_MIN_RADIUS + waves_past_first * SPAWN_RING_GROWTH_PER_WAVE)
        .min(SPAWN_RING_MAX_RADIUS)
}

pub fn enemy_stats(wave_number: u32, is_boss: bool) -> EnemyStats {
    let waves_past_first = wave_number.saturating_sub(1) as f64;

    let (base_health, health_per_wave) = if is_boss {
        (BOSS_BASE_HEALTH, BOSS_HEALTH_PER_WAVE)
    } else {
        (ENEMY_BASE_HEALTH, ENEMY_HEALTH_PER_WAVE)
    };
    let (base_damage, damage_per_wave) = if is_boss {
        (BOSS_BASE_PROJECTILE_DAMAGE, BOSS_PROJECTILE_DAMAGE_PER_WAVE)
    } else {
        (ENEMY_BASE_PROJECTILE_DAMAGE, ENEMY_PROJECTILE_DAMAGE_PER_WAVE)
    };
    let (base_cooldown, min_cooldown) = if is_boss {
        (BOSS_BASE_FIRE_COOLDOWN, BOSS_MIN_FIRE_COOLDOWN)
    } else {
        (ENEMY_BASE_FIRE_COOLDOWN, ENEMY_MIN_FIRE_COOLDOWN)
    };

    EnemyStats {
        health: base_health + waves_past_first * health_per_wave,
        projectile_damage: base_damage + waves_past_first * damage_per_wave,
        base_fire_cooldown_secs: (base_cooldown
            - FIRE_COOLDOWN_REDUCTION_PER_WAVE * waves_past_first)
            .max(min_cooldown),
    }
}

/// Lay out a wave of enemies evenly around `center`.
///
/// `requested_count` is clamped to `MAX_ENEMIES_PER_WAVE`. In a boss wave
/// the first enemy is the boss.
pub fn plan_wave(
    wave_number: u32,
    is_boss_wave: bool,
    requested_count: u32,
    center: &Position,
    rng: &mut ChaCha8Rng,
) -> Vec<EnemySpec> {
    let count = requested_count.min(MAX_ENEMIES_PER_WAVE);
    let radius = ring_radius(wave_number);

    (0..count)
        .map(|i| {
            let is_boss = is_boss_wave && i == 0;
            let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
            let height = if is_boss {
                BOSS_SPAWN_HEIGHT
            } else {
                ENEMY_SPAWN_MIN_HEIGHT + rng.gen::<f64>()
            };
            let stats = enemy_stats(wave_number, is_boss);
            let jitter = rng.gen_range(0.0..FIRE_COOLDOWN_JITTER);

            EnemySpec {
                position: Position::new(
                    center.x + angle.cos() * radius,
                    height,
                    center.z + angle.sin() * radius,
                ),
                is_boss,
                health: stats.health,
                projectile_damage: stats.projectile_damage,
                fire_cooldown_secs: stats.base_fire_cooldown_secs + jitter,
            }
        })
        .collect()
}
