//! Enemy damage handler.

use hecs::{Entity, World};

use survival_core::components::Enemy;
use survival_core::types::Position;

use crate::world_setup::enemy_count;

/// An enemy that just died and has already been removed from the world.
#[derive(Debug, Clone, PartialEq)]
pub struct KillReport {
    pub enemy_id: u32,
    pub is_boss: bool,
    pub position: Position,
    /// Live enemies right after this one was removed.
    pub remaining_after: u32,
}

/// Subtract `amount` from an enemy's health, despawning it at zero.
///
/// Returns a report only for the hit that kills. Damage to an entity that is
/// no longer an enemy (already killed, cleared by deactivation) is ignored.
pub fn apply_enemy_damage(world: &mut World, entity: Entity, amount: f64) -> Option<KillReport> {
    let (enemy_id, is_boss) = {
        let mut enemy = world.get::<&mut Enemy>(entity).ok()?;
        enemy.health -= amount;
        if enemy.health > 0.0 {
            return None;
        }
        (enemy.id, enemy.is_boss)
    };

    let position = world
        .get::<&Position>(entity)
        .map(|p| *p)
        .unwrap_or_default();
    let _ = world.despawn(entity);

    Some(KillReport {
        enemy_id,
        is_boss,
        position,
        remaining_after: enemy_count(world),
    })
}
