//! Combat resolver: advances projectiles and settles what they hit.
//!
//! Per projectile, per tick: gravity → integrate → lifetime → environment →
//! entity → ground. The first check that matches retires the projectile.

use hecs::{Entity, World};

use survival_core::components::{Enemy, Projectile};
use survival_core::constants::*;
use survival_core::enums::{ProjectileOwner, RetireReason};
use survival_core::types::{Position, Velocity};

use crate::colliders::ColliderSet;
use crate::player::PlayerState;
use crate::systems::damage::{apply_enemy_damage, KillReport};

/// Read-only inputs for one resolver pass.
pub struct CombatContext<'a> {
    pub dt: f64,
    pub no_bullet_drop: bool,
    pub colliders: &'a ColliderSet,
    /// Player shot damage when the projectile carries none.
    pub fallback_player_damage: f64,
}

/// A projectile removed this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Retirement {
    pub owner: ProjectileOwner,
    pub reason: RetireReason,
    pub position: Position,
}

/// Damage the player actually took from one hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHit {
    pub amount: f64,
    pub health_after: f64,
}

/// Everything the resolver changed, in the order it happened.
#[derive(Debug, Clone, Default)]
pub struct CombatReport {
    pub retired: Vec<Retirement>,
    pub kills: Vec<KillReport>,
    pub player_hits: Vec<PlayerHit>,
}

/// Resolve all projectiles fired by `owner`.
pub fn run(
    world: &mut World,
    owner: ProjectileOwner,
    ctx: &CombatContext,
    player: &mut PlayerState,
    report: &mut CombatReport,
) {
    let in_flight = advance(world, owner, ctx);

    for (entity, position, lifetime_secs, damage) in in_flight {
        let reason = if lifetime_secs <= LIFETIME_EPSILON {
            Some(RetireReason::Expired)
        } else if ctx.colliders.blocks(&position) {
            Some(RetireReason::Blocked)
        } else if let Some(reason) = match owner {
            ProjectileOwner::Player => strike_enemy(
                world,
                &position,
                damage.unwrap_or(ctx.fallback_player_damage),
                report,
            ),
            ProjectileOwner::Enemy => strike_player(
                player,
                &position,
                damage.unwrap_or(ENEMY_FALLBACK_PROJECTILE_DAMAGE),
                report,
            ),
        } {
            Some(reason)
        } else if position.y < 0.0 {
            Some(RetireReason::Grounded)
        } else {
            None
        };

        if let Some(reason) = reason {
            let _ = world.despawn(entity);
            report.retired.push(Retirement {
                owner,
                reason,
                position,
            });
        }
    }
}

/// Apply gravity, integrate and burn lifetime for this owner's projectiles.
/// Returns (entity, new position, remaining lifetime, damage).
fn advance(
    world: &mut World,
    owner: ProjectileOwner,
    ctx: &CombatContext,
) -> Vec<(Entity, Position, f64, Option<f64>)> {
    let dt = ctx.dt;
    let apply_gravity = owner == ProjectileOwner::Player && !ctx.no_bullet_drop;
    let mut in_flight = Vec::new();

    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity)>()
    {
        if projectile.owner != owner {
            continue;
        }
        if apply_gravity {
            vel.y -= BULLET_GRAVITY * dt;
        }
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
        projectile.lifetime_secs -= dt;

        in_flight.push((entity, *pos, projectile.lifetime_secs, projectile.damage));
    }

    in_flight
}

/// First live enemy within the hit radius takes the damage.
fn strike_enemy(
    world: &mut World,
    position: &Position,
    damage: f64,
    report: &mut CombatReport,
) -> Option<RetireReason> {
    let radius_sq = ENEMY_HIT_RADIUS * ENEMY_HIT_RADIUS;
    let target = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .find(|(_, (_, enemy_pos))| enemy_pos.range_sq_to(position) < radius_sq)
        .map(|(entity, _)| entity)?;

    if let Some(kill) = apply_enemy_damage(world, target, damage) {
        report.kills.push(kill);
    }
    Some(RetireReason::Hit)
}

fn strike_player(
    player: &mut PlayerState,
    position: &Position,
    damage: f64,
    report: &mut CombatReport,
) -> Option<RetireReason> {
    let radius_sq = PLAYER_HIT_RADIUS * PLAYER_HIT_RADIUS;
    if player.position.range_sq_to(position) >= radius_sq {
        return None;
    }

    if let Some(amount) = player.take_damage(damage) {
        report.player_hits.push(PlayerHit {
            amount,
            health_after: player.health,
        });
    }
    Some(RetireReason::HitPlayer)
}
