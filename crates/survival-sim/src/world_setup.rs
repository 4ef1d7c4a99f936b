//! Entity spawn factories and registry helpers.
//!
//! Enemies carry `(Enemy, Position)`; projectiles carry
//! `(Projectile, Position, Velocity)`.

use hecs::{Entity, World};

use survival_core::components::{Enemy, Projectile};
use survival_core::enums::ProjectileOwner;
use survival_core::types::{Position, Velocity};

use crate::spawn::EnemySpec;

/// Spawn an enemy from a director spec.
pub fn spawn_enemy(world: &mut World, spec: &EnemySpec, id: u32) -> Entity {
    let enemy = Enemy {
        id,
        health: spec.health,
        is_boss: spec.is_boss,
        fire_cooldown_secs: spec.fire_cooldown_secs,
        last_shot_secs: 0.0,
        projectile_damage: spec.projectile_damage,
    };
    world.spawn((enemy, spec.position))
}

pub fn spawn_projectile(
    world: &mut World,
    owner: ProjectileOwner,
    position: Position,
    velocity: Velocity,
    lifetime_secs: f64,
    damage: Option<f64>,
) -> Entity {
    let projectile = Projectile {
        owner,
        lifetime_secs,
        damage,
    };
    world.spawn((projectile, position, velocity))
}

/// Number of live enemies.
pub fn enemy_count(world: &World) -> u32 {
    world.query::<&Enemy>().iter().count() as u32
}

/// Find the entity of the enemy with the given id.
pub fn find_enemy(world: &World, enemy_id: u32) -> Option<Entity> {
    world
        .query::<&Enemy>()
        .iter()
        .find(|(_, enemy)| enemy.id == enemy_id)
        .map(|(entity, _)| entity)
}

/// Remove every enemy. Uses a pre-allocated buffer to avoid allocation.
pub fn despawn_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();
    for (entity, _enemy) in world.query_mut::<&Enemy>() {
        despawn_buffer.push(entity);
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
