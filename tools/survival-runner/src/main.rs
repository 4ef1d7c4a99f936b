//! Survival runner - drives a scripted headless session.
//!
//! The scripted player stands at the downtown portal, shoots the nearest
//! enemy on a fixed cadence, buys gun upgrades whenever it can afford them,
//! and restarts survival mode after each boss run.

use std::path::PathBuf;

use clap::Parser;
use glam::DVec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use survival_core::commands::PlayerCommand;
use survival_core::constants::{BULLET_GRAVITY, PLAYER_PROJECTILE_SPEED};
use survival_core::enums::{GamePhase, WavePhase};
use survival_core::events::SimEvent;
use survival_core::state::GameStateSnapshot;
use survival_core::types::Velocity;
use survival_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "survival-runner")]
#[command(about = "Run a scripted headless survival session")]
struct Args {
    /// JSON config file (missing fields take defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(long, default_value = "120")]
    seconds: f64,

    /// Frame step in seconds
    #[arg(long, default_value = "0.05")]
    dt: f64,

    /// Seconds between shots
    #[arg(long, default_value = "0.3")]
    fire_interval: f64,

    /// Progress code from an earlier session to restore the gun level
    #[arg(long)]
    progress_code: Option<String>,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default)]
struct Tally {
    waves_started: u32,
    kills: u32,
    boss_runs: u32,
    upgrades: u32,
    damage_taken: f64,
    progress_code: Option<String>,
}

impl Tally {
    fn record(&mut self, events: &[SimEvent]) {
        for event in events {
            match event {
                SimEvent::WaveStarted { .. } => self.waves_started += 1,
                SimEvent::EnemyKilled { .. } => self.kills += 1,
                SimEvent::BossWaveCleared { .. } => self.boss_runs += 1,
                SimEvent::GunUpgraded { .. } => self.upgrades += 1,
                SimEvent::PlayerDamaged { amount, .. } => self.damage_taken += amount,
                SimEvent::GameOver { progress_code, .. } => {
                    self.progress_code = Some(progress_code.clone());
                }
                _ => {}
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    if !(args.dt > 0.0) || !(args.seconds >= 0.0) {
        return Err("--dt must be positive and --seconds non-negative".into());
    }

    info!(seed = config.seed, seconds = args.seconds, dt = args.dt, "starting session");

    let mut engine = SimulationEngine::new(config);
    let mut tally = Tally::default();
    if let Some(code) = &args.progress_code {
        let level = engine.redeem_progress_code(code)?;
        info!(level, "gun level restored");
    }
    let mut snapshot = engine.tick(0.0);
    let mut next_shot_secs = 0.0;

    while snapshot.time.elapsed_secs < args.seconds && snapshot.phase != GamePhase::GameOver {
        if snapshot.hud.wave_phase == WavePhase::Idle {
            engine.queue_command(PlayerCommand::ActivateWaves);
        }
        if snapshot.hud.money >= snapshot.hud.upgrade_cost {
            engine.queue_command(PlayerCommand::UpgradeGun);
        }
        if snapshot.time.elapsed_secs >= next_shot_secs {
            if let Some(direction) = aim(&snapshot) {
                engine.queue_command(PlayerCommand::Fire {
                    origin: snapshot.player.position,
                    direction,
                });
                next_shot_secs = snapshot.time.elapsed_secs + args.fire_interval;
            }
        }

        snapshot = engine.tick(args.dt);
        tally.record(&snapshot.events);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("phase:          {:?}", snapshot.phase);
    println!("time:           {:.2}s ({} ticks)", snapshot.time.elapsed_secs, snapshot.time.tick);
    println!("wave:           {}", snapshot.hud.wave_number);
    println!("waves started:  {}", tally.waves_started);
    println!("boss runs:      {}", tally.boss_runs);
    println!("kills:          {}", tally.kills);
    println!("score:          {}", snapshot.hud.score);
    println!("money:          {}", snapshot.hud.money);
    println!("gun level:      {} ({} upgrades)", snapshot.hud.gun_level, tally.upgrades);
    println!("health:         {:.1}", snapshot.player.health);
    println!("damage taken:   {:.1}", tally.damage_taken);
    if let Some(code) = &tally.progress_code {
        println!("progress code:  {code}");
    }
    Ok(())
}

/// Aim at the nearest enemy, lifting the aim point to cancel bullet drop.
fn aim(snapshot: &GameStateSnapshot) -> Option<Velocity> {
    let eye = snapshot.player.position;
    let target = snapshot
        .enemies
        .iter()
        .min_by(|a, b| eye.range_sq_to(&a.position).total_cmp(&eye.range_sq_to(&b.position)))?;

    let mut aim_point = target.position.as_dvec3();
    if !snapshot.player.no_bullet_drop {
        let flight_secs = eye.range_to(&target.position) / PLAYER_PROJECTILE_SPEED;
        aim_point += DVec3::Y * 0.5 * BULLET_GRAVITY * flight_secs * flight_secs;
    }
    Some((aim_point - eye.as_dvec3()).into())
}
