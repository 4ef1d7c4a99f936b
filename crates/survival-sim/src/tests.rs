//! Tests for the simulation engine: waves, combat, economy and game flow.

use glam::DVec3;

use survival_core::commands::PlayerCommand;
use survival_core::components::Enemy;
use survival_core::enums::*;
use survival_core::events::{AudioCue, SimEvent};
use survival_core::state::GameStateSnapshot;
use survival_core::types::{Position, Velocity};

use crate::colliders::Aabb;
use crate::config::SimConfig;
use crate::engine::SimulationEngine;
use crate::world_setup;

const DT: f64 = 0.05;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default())
}

fn enemy_ids(engine: &SimulationEngine) -> Vec<u32> {
    let mut ids: Vec<u32> = engine
        .world()
        .query::<&Enemy>()
        .iter()
        .map(|(_, enemy)| enemy.id)
        .collect();
    ids.sort_unstable();
    ids
}

fn kill_all(engine: &mut SimulationEngine) {
    for id in enemy_ids(engine) {
        assert!(engine.damage_enemy(id, 1.0e6));
    }
}

/// Tick until `wave_number` starts. Returns every event seen on the way.
fn tick_until_wave(engine: &mut SimulationEngine, wave_number: u32) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for _ in 0..200 {
        let snap = engine.tick(DT);
        events.extend(snap.events);
        if engine.waves().wave_number() == wave_number {
            return events;
        }
    }
    panic!("wave {wave_number} never started");
}

fn count_events(events: &[SimEvent], pred: impl Fn(&SimEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

// ---- Waves ----

#[test]
fn test_activation_spawns_wave_one() {
    let mut engine = engine();
    engine.activate_waves();
    let snap = engine.tick(DT);

    assert_eq!(
        snap.events[0],
        SimEvent::WaveStarted {
            wave_number: 1,
            is_boss_wave: false,
            enemy_count: 3
        }
    );
    assert_eq!(
        count_events(&snap.events, |e| matches!(e, SimEvent::EnemySpawned { .. })),
        3
    );
    assert_eq!(snap.hud.enemies_remaining, 3);
    assert_eq!(snap.hud.wave_phase, WavePhase::InProgress);
    assert_eq!(snap.enemies.len(), 3);
}

#[test]
fn test_enemies_spawn_on_ring_around_player() {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::SetPlayerPosition {
        position: Position::new(40.0, 0.0, -10.0),
    });
    engine.tick(DT);
    engine.activate_waves();

    let player = engine.player().position;
    for (_, (_, pos)) in engine.world().query::<(&Enemy, &Position)>().iter() {
        let ring = pos.horizontal_range_to(&player);
        assert!((ring - 50.0).abs() < 1e-6, "ring distance {ring}");
        assert!(pos.y >= 2.0 && pos.y < 3.0);
    }
}

#[test]
fn test_standard_waves_auto_advance() {
    let mut engine = engine();
    engine.activate_waves();
    kill_all(&mut engine);

    assert_eq!(engine.waves().phase(), WavePhase::Intermission);
    assert_eq!(engine.scheduler().pending(), 1);

    let events = tick_until_wave(&mut engine, 2);
    assert!(events.contains(&SimEvent::WaveCleared { wave_number: 1 }));
    assert!(events.contains(&SimEvent::WaveStarted {
        wave_number: 2,
        is_boss_wave: false,
        enemy_count: 5
    }));
    // Auto-advance waits roughly two seconds.
    assert!(engine.time().elapsed_secs >= 1.95);
}

#[test]
fn test_boss_run_pays_reward_and_stops() {
    let mut engine = engine();
    engine.activate_waves();

    let mut events = Vec::new();
    for wave in 1..=5 {
        assert_eq!(engine.waves().wave_number(), wave);
        kill_all(&mut engine);
        if wave < 5 {
            events.extend(tick_until_wave(&mut engine, wave + 1));
        }
    }
    events.extend(engine.tick(DT).events);

    assert!(events.contains(&SimEvent::BossWaveCleared {
        wave_number: 5,
        reward: 500
    }));
    assert_eq!(
        count_events(&events, |e| matches!(e, SimEvent::EnemyKilled { is_boss: true, .. })),
        1
    );
    // 34 regular kills, one boss, the boss reward.
    assert_eq!(engine.economy().money, 500 + 34 * 25 + 75 + 500);
    assert_eq!(engine.economy().money, 1925);
    assert_eq!(engine.economy().score, 34 * 100 + 300);
    assert_eq!(engine.waves().phase(), WavePhase::Idle);

    // No auto-advance after a boss wave.
    for _ in 0..200 {
        let snap = engine.tick(DT);
        assert!(!snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::WaveStarted { .. })));
    }
    assert_eq!(engine.waves().wave_number(), 5);
    assert_eq!(world_setup::enemy_count(engine.world()), 0);
}

#[test]
fn test_boss_reward_tracks_gun_level() {
    let mut engine = engine();
    engine.activate_waves();
    for wave in 1..5 {
        kill_all(&mut engine);
        tick_until_wave(&mut engine, wave + 1);
    }
    engine.economy_mut().gun_level = 3;
    kill_all(&mut engine);

    let snap = engine.tick(DT);
    assert!(snap.events.contains(&SimEvent::BossWaveCleared {
        wave_number: 5,
        reward: 2000
    }));
}

#[test]
fn test_deactivate_cancels_pending_advance() {
    let mut engine = engine();
    engine.activate_waves();
    engine.tick(DT);
    kill_all(&mut engine);
    engine.deactivate_waves();

    let mut events = engine.tick(DT).events;
    for _ in 0..100 {
        events.extend(engine.tick(DT).events);
    }

    assert!(events.contains(&SimEvent::WavesDeactivated { wave_number: 1 }));
    assert_eq!(
        count_events(&events, |e| matches!(e, SimEvent::WaveStarted { .. })),
        0
    );
    assert_eq!(world_setup::enemy_count(engine.world()), 0);
    assert_eq!(engine.waves().phase(), WavePhase::Idle);
}

#[test]
fn test_deactivate_mid_wave_clears_enemies() {
    let mut engine = engine();
    engine.activate_waves();
    engine.tick(DT);
    engine.deactivate_waves();

    let snap = engine.tick(DT);
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.hud.enemies_remaining, 0);
    assert!(!engine.waves().is_active());

    // Deactivating again is harmless and silent.
    engine.deactivate_waves();
    assert!(engine.tick(DT).events.is_empty());
}

#[test]
fn test_reactivate_during_pending_advance_starts_once() {
    let mut engine = engine();
    engine.activate_waves();
    engine.tick(DT);
    kill_all(&mut engine);
    engine.activate_waves();

    let mut events = Vec::new();
    for _ in 0..200 {
        events.extend(engine.tick(DT).events);
    }
    assert_eq!(
        count_events(&events, |e| matches!(e, SimEvent::WaveStarted { .. })),
        1
    );
    assert_eq!(engine.waves().wave_number(), 2);
}

#[test]
fn test_restart_after_deactivate_ignores_stale_advance() {
    let mut engine = engine();
    engine.activate_waves();
    engine.tick(DT);
    kill_all(&mut engine);
    engine.deactivate_waves();
    engine.tick(DT);
    engine.activate_waves();

    let mut events = Vec::new();
    for _ in 0..80 {
        events.extend(engine.tick(DT).events);
    }
    assert_eq!(engine.waves().wave_number(), 1);
    assert_eq!(
        count_events(&events, |e| matches!(e, SimEvent::WaveStarted { .. })),
        1
    );
}

// ---- Combat ----

#[test]
fn test_player_shot_expires_on_exact_tick() {
    let mut engine = engine();
    engine.player_mut().modifiers.no_bullet_drop = true;
    assert!(engine.fire(Position::new(0.0, 1.7, 0.0), DVec3::X));

    let mut retired_at = None;
    for tick in 1..=70 {
        let snap = engine.tick(DT);
        let expired = snap.events.iter().any(|e| {
            matches!(
                e,
                SimEvent::ProjectileRetired {
                    reason: RetireReason::Expired,
                    ..
                }
            )
        });
        if expired {
            retired_at = Some(tick);
            break;
        }
    }
    assert_eq!(retired_at, Some(60));
}

#[test]
fn test_double_hit_counts_one_kill() {
    let mut engine = engine();
    engine.activate_waves();
    engine.player_mut().modifiers.no_bullet_drop = true;

    let id = enemy_ids(&engine)[0];
    let entity = world_setup::find_enemy(engine.world(), id).unwrap();
    let target = *engine.world().get::<&Position>(entity).unwrap();
    let origin = target.as_dvec3() - DVec3::X * 3.6;

    assert!(engine.fire(origin.into(), DVec3::X));
    assert!(engine.fire(origin.into(), DVec3::X));
    let snap = engine.tick(DT);

    assert_eq!(
        count_events(&snap.events, |e| matches!(e, SimEvent::EnemyKilled { .. })),
        1
    );
    assert_eq!(snap.hud.enemies_remaining, 2);
    assert_eq!(snap.hud.money, 525);
    assert_eq!(snap.hud.score, 100);
    assert!(snap.audio.contains(&AudioCue::HitImpact));
    // The second shot flew on.
    assert_eq!(
        snap.projectiles
            .iter()
            .filter(|p| p.owner == ProjectileOwner::Player)
            .count(),
        1
    );
}

#[test]
fn test_damage_to_dead_enemy_is_ignored() {
    let mut engine = engine();
    engine.activate_waves();
    let id = enemy_ids(&engine)[0];

    assert!(engine.damage_enemy(id, 100.0));
    assert!(!engine.damage_enemy(id, 100.0));
    assert_eq!(engine.economy().money, 525);
}

#[test]
fn test_kill_outside_survival_still_pays() {
    let mut engine = engine();
    let spec = crate::spawn::EnemySpec {
        position: Position::new(10.0, 2.0, 0.0),
        is_boss: false,
        health: 30.0,
        projectile_damage: 4.0,
        fire_cooldown_secs: 3.5,
    };
    world_setup::spawn_enemy(engine.world_mut(), &spec, 900);

    assert!(engine.damage_enemy(900, 50.0));
    let snap = engine.tick(DT);
    assert!(snap.events.contains(&SimEvent::EnemyKilled {
        enemy_id: 900,
        is_boss: false,
        position: Position::new(10.0, 2.0, 0.0),
        score_gain: 100,
        money_gain: 25
    }));
    assert_eq!(engine.economy().money, 525);
    assert_eq!(engine.economy().score, 100);
    // The wave manager ignores it: nothing is scheduled.
    assert_eq!(engine.scheduler().pending(), 0);
    assert_eq!(engine.waves().phase(), WavePhase::Idle);
}

#[test]
fn test_collider_blocks_shot() {
    let mut engine = SimulationEngine::new(SimConfig {
        colliders: vec![Aabb::new(DVec3::new(9.0, 0.0, -5.0), DVec3::new(11.0, 5.0, 5.0))],
        ..Default::default()
    });
    engine.player_mut().modifiers.no_bullet_drop = true;
    engine.fire(Position::new(0.0, 1.7, 0.0), DVec3::X);

    let mut reasons = Vec::new();
    for _ in 0..5 {
        for event in engine.tick(DT).events {
            if let SimEvent::ProjectileRetired { reason, .. } = event {
                reasons.push(reason);
            }
        }
    }
    assert_eq!(reasons, vec![RetireReason::Blocked]);
}

#[test]
fn test_downward_shot_hits_ground() {
    let mut engine = engine();
    engine.fire(Position::new(0.0, 1.7, 0.0), DVec3::new(1.0, -1.0, 0.0));

    let mut reasons = Vec::new();
    for _ in 0..10 {
        for event in engine.tick(DT).events {
            if let SimEvent::ProjectileRetired { reason, .. } = event {
                reasons.push(reason);
            }
        }
    }
    assert_eq!(reasons, vec![RetireReason::Grounded]);
}

#[test]
fn test_bullet_drop_toggle() {
    let mut engine = engine();
    engine.fire(Position::new(0.0, 50.0, 0.0), DVec3::X);
    let snap = engine.tick(DT);
    assert!(snap.projectiles[0].velocity.y < 0.0);

    let mut engine = self::engine();
    engine.queue_command(PlayerCommand::SetNoBulletDrop { enabled: true });
    engine.tick(DT);
    engine.fire(Position::new(0.0, 50.0, 0.0), DVec3::X);
    let snap = engine.tick(DT);
    assert_eq!(snap.projectiles[0].velocity.y, 0.0);
    assert!(snap.player.no_bullet_drop);
}

#[test]
fn test_fire_command_and_zero_direction() {
    let mut engine = engine();
    assert!(!engine.fire(Position::new(0.0, 1.7, 0.0), DVec3::ZERO));

    engine.queue_command(PlayerCommand::Fire {
        origin: Position::new(0.0, 1.7, 0.0),
        direction: Velocity::new(0.0, 0.0, -2.0),
    });
    let snap = engine.tick(DT);
    assert_eq!(snap.audio, vec![AudioCue::Gunshot]);
    assert_eq!(snap.projectiles.len(), 1);
    assert!((snap.projectiles[0].velocity.speed() - 60.0).abs() < 1.0);
}

#[test]
fn test_upgraded_gun_hits_harder() {
    let mut engine = engine();
    engine.upgrade_gun();
    engine.player_mut().modifiers.no_bullet_drop = true;
    assert!(engine.fire(Position::new(0.0, 1.7, 0.0), DVec3::X));

    let shot = engine
        .world()
        .query::<&survival_core::components::Projectile>()
        .iter()
        .map(|(_, p)| p.damage)
        .next()
        .flatten()
        .unwrap();
    assert!((shot - 48.0).abs() < 1e-9);
}

#[test]
fn test_enemies_close_in_and_shoot() {
    let mut engine = engine();
    engine.activate_waves();
    for (_, (_, pos)) in engine.world_mut().query_mut::<(&Enemy, &mut Position)>() {
        let dir = DVec3::new(pos.x, 0.0, pos.z).normalize();
        pos.x = dir.x * 20.0;
        pos.z = dir.z * 20.0;
    }

    let mut saw_shot = false;
    for _ in 0..120 {
        let snap = engine.tick(DT);
        if snap.audio.contains(&AudioCue::EnemyGunshot) {
            assert!(snap
                .projectiles
                .iter()
                .any(|p| p.owner == ProjectileOwner::Enemy));
            saw_shot = true;
            break;
        }
    }
    assert!(saw_shot);
}

// ---- Player and game flow ----

#[test]
fn test_enemy_projectile_hit_damages_player() {
    let mut engine = engine();
    world_setup::spawn_projectile(
        engine.world_mut(),
        ProjectileOwner::Enemy,
        Position::new(0.0, 1.7, 1.5),
        Velocity::new(0.0, 0.0, -15.0),
        4.0,
        Some(8.0),
    );

    let snap = engine.tick(DT);
    assert!(snap.events.contains(&SimEvent::PlayerDamaged {
        amount: 8.0,
        health: 92.0
    }));
    assert!(snap.audio.contains(&AudioCue::PlayerHit));
    assert_eq!(snap.phase, GamePhase::Running);
}

#[test]
fn test_starving_player_takes_extra_damage() {
    let mut engine = engine();
    engine.player_mut().hunger = 10.0;
    world_setup::spawn_projectile(
        engine.world_mut(),
        ProjectileOwner::Enemy,
        Position::new(0.0, 1.7, 1.5),
        Velocity::new(0.0, 0.0, -15.0),
        4.0,
        Some(10.0),
    );

    let snap = engine.tick(DT);
    let dealt = snap.events.iter().find_map(|e| match e {
        SimEvent::PlayerDamaged { amount, .. } => Some(*amount),
        _ => None,
    });
    assert_eq!(dealt, Some(15.0));
}

#[test]
fn test_lethal_hit_ends_game_and_reset_recovers() {
    let mut engine = engine();
    engine.activate_waves();
    engine.player_mut().health = 3.0;
    world_setup::spawn_projectile(
        engine.world_mut(),
        ProjectileOwner::Enemy,
        Position::new(0.0, 1.7, 1.5),
        Velocity::new(0.0, 0.0, -15.0),
        4.0,
        Some(8.0),
    );

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.player.health, 0.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::GameOver { score: 0, .. })));

    // Only Reset is honoured after game over.
    let frozen = engine.time();
    engine.queue_commands([
        PlayerCommand::DeactivateWaves,
        PlayerCommand::UpgradeGun,
        PlayerCommand::Resume,
    ]);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.events.is_empty());
    assert_eq!(engine.time(), frozen);
    assert_eq!(snap.enemies.len(), 3);

    engine.queue_command(PlayerCommand::Reset);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.player.health, 100.0);
    assert_eq!(snap.hud.money, 500);
    assert_eq!(snap.hud.gun_level, 1);
    assert_eq!(snap.hud.wave_number, 0);
    assert!(snap.enemies.is_empty());
}

#[test]
fn test_progress_code_survives_reset() {
    let mut engine = engine();
    engine.economy_mut().gun_level = 3;
    engine.player_mut().health = 0.005;
    engine.player_mut().hunger = 0.0;

    let snap = engine.tick(DT);
    let code = snap
        .events
        .iter()
        .find_map(|e| match e {
            SimEvent::GameOver { progress_code, .. } => Some(progress_code.clone()),
            _ => None,
        })
        .unwrap();
    assert!(code.starts_with("ULS-"));

    engine.queue_command(PlayerCommand::Reset);
    assert_eq!(engine.tick(DT).hud.gun_level, 1);

    engine.queue_command(PlayerCommand::RedeemProgressCode { code });
    let snap = engine.tick(DT);
    assert!(snap
        .events
        .contains(&SimEvent::ProgressRestored { gun_level: 3 }));
    assert_eq!(snap.hud.gun_level, 3);
    assert!((snap.hud.damage_multiplier - 1.4).abs() < 1e-12);
    assert_eq!(snap.hud.upgrade_cost, 2000);
}

#[test]
fn test_invalid_progress_code_is_ignored() {
    let mut engine = engine();
    engine.queue_commands([
        PlayerCommand::RedeemProgressCode {
            code: "ULS-not base64".into(),
        },
        PlayerCommand::RedeemProgressCode {
            code: "MXw3fDQzMjE_".into(),
        },
    ]);

    let snap = engine.tick(DT);
    assert!(snap.events.is_empty());
    assert_eq!(snap.hud.gun_level, 1);
    assert_eq!(
        engine.redeem_progress_code("ULS-Mnw1fDEyMzQ_"),
        Err(crate::progress_code::ProgressCodeError::UnsupportedVersion(2))
    );
}

#[test]
fn test_starvation_ends_game() {
    let mut engine = engine();
    engine.player_mut().hunger = 0.0;
    engine.player_mut().health = 0.005;

    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
}

#[test]
fn test_vitals_decay() {
    let mut engine = engine();
    let mut snap = GameStateSnapshot::default();
    for _ in 0..200 {
        snap = engine.tick(DT);
    }
    assert!((snap.player.hunger - (100.0 - 0.15 * 10.0)).abs() < 1e-6);
    assert!((snap.player.energy - (100.0 - 0.1 * 10.0)).abs() < 1e-6);
    assert_eq!(snap.player.health, 100.0);
}

#[test]
fn test_powerups() {
    let mut engine = engine();
    engine.player_mut().health = 50.0;
    engine.player_mut().hunger = 90.0;
    engine.queue_commands([
        PlayerCommand::UsePowerup {
            kind: PowerupKind::Health,
        },
        PlayerCommand::UsePowerup {
            kind: PowerupKind::Ration,
        },
        PlayerCommand::UsePowerup {
            kind: PowerupKind::Energy,
        },
    ]);

    let snap = engine.tick(DT);
    assert_eq!(snap.audio, vec![AudioCue::UseItem; 3]);
    assert!((snap.player.health - 85.0).abs() < 1e-9);
    assert!((snap.player.hunger - 100.0).abs() < 0.01);
    assert!(snap.player.speed_boost_secs > 9.9);
}

#[test]
fn test_movement_and_speed_boost() {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::SetMoveIntent { x: 1.0, z: 0.0 });
    for _ in 0..20 {
        engine.tick(DT);
    }
    assert!((engine.player().position.x - 5.0).abs() < 1e-9);
    assert_eq!(engine.player().position.y, 1.7);

    engine.use_powerup(PowerupKind::Energy);
    for _ in 0..20 {
        engine.tick(DT);
    }
    assert!((engine.player().position.x - 13.0).abs() < 1e-9);
}

#[test]
fn test_pause_freezes_and_blocks_gameplay() {
    let mut engine = engine();
    engine.tick(DT);
    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Paused);
    let paused_at = engine.time();

    engine.queue_commands([
        PlayerCommand::Fire {
            origin: Position::new(0.0, 1.7, 0.0),
            direction: Velocity::new(1.0, 0.0, 0.0),
        },
        PlayerCommand::ActivateWaves,
    ]);
    let snap = engine.tick(DT);
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.hud.wave_number, 0);
    assert_eq!(engine.time(), paused_at);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.time.tick, paused_at.tick + 1);
}

#[test]
fn test_frame_dt_is_clamped() {
    let mut engine = engine();
    let snap = engine.tick(1.0);
    assert!((snap.time.elapsed_secs - 0.05).abs() < 1e-12);

    let snap = engine.tick(-1.0);
    assert!((snap.time.elapsed_secs - 0.05).abs() < 1e-12);
    assert_eq!(snap.time.tick, 2);
}

// ---- Economy ----

#[test]
fn test_upgrade_far_from_portal_changes_nothing() {
    let mut engine = engine();
    engine.economy_mut().money = 10_000;
    engine.queue_command(PlayerCommand::SetPlayerPosition {
        position: Position::new(300.0, 0.0, 300.0),
    });
    engine.queue_command(PlayerCommand::UpgradeGun);

    let snap = engine.tick(DT);
    assert!(snap.events.contains(&SimEvent::UpgradeRejected {
        reason: UpgradeRejection::NotAtPortal
    }));
    assert_eq!(snap.hud.money, 10_000);
    assert_eq!(snap.hud.gun_level, 1);
}

#[test]
fn test_upgrade_at_portal() {
    let mut engine = engine();
    engine.queue_commands([PlayerCommand::UpgradeGun, PlayerCommand::UpgradeGun]);

    let snap = engine.tick(DT);
    assert_eq!(
        snap.events,
        vec![
            SimEvent::GunUpgraded { level: 2, cost: 500 },
            SimEvent::UpgradeRejected {
                reason: UpgradeRejection::InsufficientFunds {
                    cost: 1000,
                    money: 0
                }
            },
        ]
    );
    assert_eq!(snap.hud.money, 0);
    assert_eq!(snap.hud.upgrade_cost, 1000);
    assert!((snap.hud.damage_multiplier - 1.2).abs() < 1e-12);
}

// ---- Determinism ----

fn scripted_run(seed: u64) -> Vec<String> {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_commands([
        PlayerCommand::ActivateWaves,
        PlayerCommand::SetMoveIntent { x: 0.3, z: -1.0 },
    ]);

    (0..400)
        .map(|i| {
            if i % 10 == 0 {
                engine.queue_command(PlayerCommand::Fire {
                    origin: engine.player().position,
                    direction: Velocity::new(1.0, 0.0, 0.0),
                });
            }
            serde_json::to_string(&engine.tick(DT)).unwrap()
        })
        .collect()
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(scripted_run(12345), scripted_run(12345));
}

#[test]
fn test_determinism_different_seeds() {
    assert_ne!(scripted_run(111), scripted_run(222));
}
