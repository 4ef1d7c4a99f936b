//! Simulation engine: the core of survival mode.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of game state
//! (player, economy, waves, deferred events). It processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use survival_core::commands::PlayerCommand;
use survival_core::constants::*;
use survival_core::enums::{GamePhase, PowerupKind, ProjectileOwner, RetireReason, WavePhase};
use survival_core::events::{AudioCue, SimEvent};
use survival_core::state::GameStateSnapshot;
use survival_core::types::{Position, SimTime};

use crate::colliders::ColliderSet;
use crate::config::SimConfig;
use crate::economy::Economy;
use crate::player::PlayerState;
use crate::progress_code::{self, ProgressCodeError};
use crate::scheduler::{DeferredAction, Scheduler};
use crate::spawn::plan_wave;
use crate::systems;
use crate::systems::damage::{apply_enemy_damage, KillReport};
use crate::systems::projectiles::{CombatContext, CombatReport};
use crate::waves::{KillOutcome, WaveManager, WaveStart};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    colliders: ColliderSet,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    audio: Vec<AudioCue>,

    player: PlayerState,
    economy: Economy,
    waves: WaveManager,
    scheduler: Scheduler,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let colliders = ColliderSet::new(&config.colliders, config.collider_margin);
        Self {
            world: World::new(),
            colliders,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            audio: Vec::new(),
            player: PlayerState::default(),
            economy: Economy::new(config.starting_money),
            waves: WaveManager::default(),
            scheduler: Scheduler::default(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]` so a stalled frame cannot
    /// tunnel projectiles through enemies.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_dt)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.waves,
            &self.player,
            std::mem::take(&mut self.events),
            std::mem::take(&mut self.audio),
        )
    }

    // --- Direct calls -----------------------------------------------------

    /// Fire the player's gun. The shot starts a little ahead of `origin`.
    /// Returns false when nothing was fired.
    pub fn fire(&mut self, origin: Position, direction: DVec3) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(direction) = direction.try_normalize() else {
            return false;
        };

        let start = origin.as_dvec3() + direction * MUZZLE_OFFSET;
        let damage = self.player_shot_damage();
        world_setup::spawn_projectile(
            &mut self.world,
            ProjectileOwner::Player,
            start.into(),
            (direction * PLAYER_PROJECTILE_SPEED).into(),
            PLAYER_PROJECTILE_LIFETIME,
            Some(damage),
        );
        self.audio.push(AudioCue::Gunshot);
        true
    }

    /// Start survival mode at wave 1. No-op while already active.
    pub fn activate_waves(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        if let Some(start) = self.waves.activate() {
            self.scheduler.invalidate();
            self.spawn_wave(start);
        }
    }

    /// Forced exit from survival mode. Clears every enemy and cancels any
    /// pending wave advance.
    pub fn deactivate_waves(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        let removed = world_setup::despawn_enemies(&mut self.world, &mut self.despawn_buffer);
        self.scheduler.invalidate();

        if self.waves.deactivate() {
            info!(
                wave = self.waves.wave_number(),
                removed, "survival mode deactivated"
            );
            self.events.push(SimEvent::WavesDeactivated {
                wave_number: self.waves.wave_number(),
            });
        }
    }

    /// Buy the next gun level at a portal.
    pub fn upgrade_gun(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        match self.economy.try_upgrade(
            &self.player.position,
            &self.config.portals,
            self.config.portal_radius,
        ) {
            Ok(receipt) => {
                debug!(level = receipt.level, cost = receipt.cost, "gun upgraded");
                self.events.push(SimEvent::GunUpgraded {
                    level: receipt.level,
                    cost: receipt.cost,
                });
            }
            Err(reason) => {
                debug!(?reason, "upgrade rejected");
                self.events.push(SimEvent::UpgradeRejected { reason });
            }
        }
    }

    /// Damage an enemy by id outside the projectile path (melee, scripted
    /// damage). Returns false when no such enemy is alive.
    pub fn damage_enemy(&mut self, enemy_id: u32, amount: f64) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(entity) = world_setup::find_enemy(&self.world, enemy_id) else {
            return false;
        };
        if let Some(kill) = apply_enemy_damage(&mut self.world, entity, amount) {
            self.handle_kill(kill);
        }
        true
    }

    /// Restore the gun level from a progress code. Returns the restored
    /// level; invalid codes change nothing.
    pub fn redeem_progress_code(&mut self, code: &str) -> Result<u32, ProgressCodeError> {
        match progress_code::decode(code) {
            Ok(gun_level) => {
                self.economy.gun_level = gun_level;
                info!(gun_level, "progress code redeemed");
                self.events.push(SimEvent::ProgressRestored { gun_level });
                Ok(gun_level)
            }
            Err(err) => {
                debug!(%err, "progress code rejected");
                Err(err)
            }
        }
    }

    pub fn use_powerup(&mut self, kind: PowerupKind) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.player.apply_powerup(kind);
        self.audio.push(AudioCue::UseItem);
    }

    // --- Accessors --------------------------------------------------------

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn waves(&self) -> &WaveManager {
        &self.waves
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    // --- Commands ---------------------------------------------------------

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::GameOver && !matches!(command, PlayerCommand::Reset) {
            return;
        }

        match command {
            PlayerCommand::Fire { origin, direction } => {
                self.fire(origin, direction.as_dvec3());
            }
            PlayerCommand::UpgradeGun => self.upgrade_gun(),
            PlayerCommand::ActivateWaves => self.activate_waves(),
            PlayerCommand::DeactivateWaves => self.deactivate_waves(),
            PlayerCommand::SetMoveIntent { x, z } => self.player.set_move_intent(x, z),
            PlayerCommand::SetPlayerPosition { position } => {
                self.player.position = Position::new(position.x, PLAYER_EYE_HEIGHT, position.z);
            }
            PlayerCommand::SetNoBulletDrop { enabled } => {
                self.player.modifiers.no_bullet_drop = enabled;
            }
            PlayerCommand::UsePowerup { kind } => self.use_powerup(kind),
            PlayerCommand::RedeemProgressCode { code } => {
                let _ = self.redeem_progress_code(&code);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Back to a fresh session with the same config and seed.
    fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Running;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.next_enemy_id = 0;
        self.player = PlayerState::default();
        self.economy = Economy::new(self.config.starting_money);
        self.waves = WaveManager::default();
        self.scheduler.invalidate();
        info!("simulation reset");
    }

    // --- Systems ----------------------------------------------------------

    /// Run all systems in order for one tick.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. Deferred events
        for action in self.scheduler.drain_due(now) {
            match action {
                DeferredAction::StartNextWave => {
                    if self.waves.phase() == WavePhase::Intermission {
                        let start = self.waves.start_next_wave();
                        self.spawn_wave(start);
                    }
                }
            }
        }

        // 2. Player vitals
        self.player.update_vitals(dt);
        if self.player.is_dead() {
            self.game_over();
            return;
        }

        // 3. Player movement
        self.player.update_movement(dt);

        // 4. Projectiles: player shots first, then enemy shots
        let mut report = CombatReport::default();
        let ctx = CombatContext {
            dt,
            no_bullet_drop: self.player.modifiers.no_bullet_drop,
            colliders: &self.colliders,
            fallback_player_damage: self.player_shot_damage(),
        };
        for owner in [ProjectileOwner::Player, ProjectileOwner::Enemy] {
            systems::projectiles::run(&mut self.world, owner, &ctx, &mut self.player, &mut report);
        }
        self.apply_combat_report(report);
        if self.phase != GamePhase::Running {
            return;
        }

        // 5. Enemy AI
        systems::enemy_ai::run(
            &mut self.world,
            &self.player.position,
            now,
            dt,
            &mut self.audio,
        );
    }

    fn apply_combat_report(&mut self, report: CombatReport) {
        for retired in report.retired {
            trace!(owner = ?retired.owner, reason = ?retired.reason, "projectile retired");
            if retired.reason == RetireReason::Hit {
                self.audio.push(AudioCue::HitImpact);
            }
            self.events.push(SimEvent::ProjectileRetired {
                owner: retired.owner,
                reason: retired.reason,
                position: retired.position,
            });
        }

        for kill in report.kills {
            self.handle_kill(kill);
        }

        for hit in report.player_hits {
            self.audio.push(AudioCue::PlayerHit);
            self.events.push(SimEvent::PlayerDamaged {
                amount: hit.amount,
                health: hit.health_after,
            });
        }

        if self.player.is_dead() {
            self.game_over();
        }
    }

    /// Credit a kill and let the wave manager react to it.
    fn handle_kill(&mut self, kill: KillReport) {
        let (score_gain, money_gain) = self.economy.award_kill(kill.is_boss);
        debug!(
            enemy = kill.enemy_id,
            boss = kill.is_boss,
            remaining = kill.remaining_after,
            "enemy killed"
        );
        self.events.push(SimEvent::EnemyKilled {
            enemy_id: kill.enemy_id,
            is_boss: kill.is_boss,
            position: kill.position,
            score_gain,
            money_gain,
        });

        match self.waves.on_enemy_killed(kill.remaining_after) {
            KillOutcome::Ignored | KillOutcome::Remaining(_) => {}
            KillOutcome::Cleared { wave_number } => {
                info!(wave = wave_number, "wave cleared");
                self.events.push(SimEvent::WaveCleared { wave_number });
                self.scheduler.schedule(
                    DeferredAction::StartNextWave,
                    self.time.elapsed_secs + self.config.auto_advance_delay_secs,
                );
            }
            KillOutcome::BossCleared { wave_number } => {
                let reward = self.economy.boss_run_reward();
                self.economy.deposit(reward);
                info!(wave = wave_number, reward, "boss wave cleared");
                self.events.push(SimEvent::BossWaveCleared {
                    wave_number,
                    reward,
                });
            }
        }
    }

    /// Lay out and spawn a wave around the player.
    fn spawn_wave(&mut self, start: WaveStart) {
        let specs = plan_wave(
            start.wave_number,
            start.is_boss_wave,
            start.requested_count,
            &self.player.position,
            &mut self.rng,
        );

        info!(
            wave = start.wave_number,
            boss = start.is_boss_wave,
            enemies = specs.len(),
            "wave started"
        );
        self.events.push(SimEvent::WaveStarted {
            wave_number: start.wave_number,
            is_boss_wave: start.is_boss_wave,
            enemy_count: specs.len() as u32,
        });

        for spec in &specs {
            self.next_enemy_id += 1;
            world_setup::spawn_enemy(&mut self.world, spec, self.next_enemy_id);
            self.events.push(SimEvent::EnemySpawned {
                enemy_id: self.next_enemy_id,
                is_boss: spec.is_boss,
                position: spec.position,
            });
        }
    }

    fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.scheduler.invalidate();
        let progress_code = progress_code::generate(self.economy.gun_level, &mut self.rng);
        info!(score = self.economy.score, %progress_code, "game over");
        self.events.push(SimEvent::GameOver {
            score: self.economy.score,
            progress_code,
        });
    }

    fn player_shot_damage(&self) -> f64 {
        self.config.gun_base_damage * self.economy.damage_multiplier()
    }
}
