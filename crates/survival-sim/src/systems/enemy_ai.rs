//! Enemy AI system: walk toward the player and shoot when in range.

use glam::DVec3;
use hecs::World;

use survival_core::components::Enemy;
use survival_core::constants::*;
use survival_core::enums::ProjectileOwner;
use survival_core::events::AudioCue;
use survival_core::types::{Position, Velocity};

use crate::world_setup::spawn_projectile;

struct Shot {
    origin: Position,
    velocity: Velocity,
    damage: f64,
}

/// Run enemy behaviour for one tick at sim time `now_secs`.
pub fn run(
    world: &mut World,
    player_pos: &Position,
    now_secs: f64,
    dt: f64,
    audio: &mut Vec<AudioCue>,
) {
    let aim_point = player_pos.as_dvec3() + DVec3::Y * ENEMY_AIM_OFFSET;
    let mut shots: Vec<Shot> = Vec::new();

    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        // Range is measured before this tick's step.
        let distance = pos.horizontal_range_to(player_pos);

        if distance > ENEMY_STOP_DISTANCE {
            let step = ENEMY_MOVE_SPEED * dt;
            pos.x += (player_pos.x - pos.x) / distance * step;
            pos.z += (player_pos.z - pos.z) / distance * step;
        }

        if distance >= ENEMY_SHOOT_RANGE || now_secs - enemy.last_shot_secs < enemy.fire_cooldown_secs {
            continue;
        }

        let origin = pos.as_dvec3() + DVec3::Y * ENEMY_AIM_OFFSET;
        let Some(direction) = (aim_point - origin).try_normalize() else {
            continue;
        };

        enemy.last_shot_secs = now_secs;
        shots.push(Shot {
            origin: origin.into(),
            velocity: (direction * ENEMY_PROJECTILE_SPEED).into(),
            damage: enemy.projectile_damage,
        });
    }

    for shot in shots {
        spawn_projectile(
            world,
            ProjectileOwner::Enemy,
            shot.origin,
            shot.velocity,
            ENEMY_PROJECTILE_LIFETIME,
            Some(shot.damage),
        );
        audio.push(AudioCue::EnemyGunshot);
    }
}
