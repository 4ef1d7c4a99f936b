//! Gameplay constants and tuning parameters.

// --- Frame ---

/// Upper bound on a single tick's dt (seconds). Large frame gaps are clamped.
pub const MAX_FRAME_DT: f64 = 0.05;

// --- Player ---

/// Camera eye height above the ground.
pub const PLAYER_EYE_HEIGHT: f64 = 1.7;

/// Starting (and maximum) value for health, hunger and energy.
pub const PLAYER_STAT_MAX: f64 = 100.0;

/// Hunger below this threshold triggers penalties.
pub const HUNGER_PENALTY_THRESHOLD: f64 = 20.0;

/// Incoming damage multiplier while starving.
pub const HUNGER_DAMAGE_MULTIPLIER: f64 = 1.5;

/// Hunger decay per second.
pub const HUNGER_DECAY_PER_SEC: f64 = 0.15;

/// Energy decay per second.
pub const ENERGY_DECAY_PER_SEC: f64 = 0.1;

/// Health drain per second while starving.
pub const STARVATION_DRAIN_PER_SEC: f64 = 0.2;

/// Base walking speed (units/s).
pub const PLAYER_BASE_MOVE_SPEED: f64 = 5.0;

/// Speed multiplier while a speed boost is active.
pub const SPEED_BOOST_MULTIPLIER: f64 = 1.6;

/// Speed multiplier while starving.
pub const HUNGER_SPEED_MULTIPLIER: f64 = 0.6;

// --- Power-ups ---

pub const POWERUP_HEALTH_AMOUNT: f64 = 35.0;
pub const POWERUP_ENERGY_AMOUNT: f64 = 40.0;
pub const POWERUP_HUNGER_AMOUNT: f64 = 40.0;

/// Minimum speed boost granted by an energy power-up (seconds).
pub const POWERUP_SPEED_BOOST_SECS: f64 = 10.0;

// --- Player weapon ---

/// Gun damage before the level multiplier is applied.
pub const GUN_BASE_DAMAGE: f64 = 40.0;

/// Damage bonus per gun level above 1.
pub const GUN_DAMAGE_PER_LEVEL: f64 = 0.2;

/// Player projectile muzzle speed (units/s).
pub const PLAYER_PROJECTILE_SPEED: f64 = 60.0;

/// Player projectile lifetime (seconds).
pub const PLAYER_PROJECTILE_LIFETIME: f64 = 3.0;

/// Distance ahead of the origin at which player projectiles spawn.
pub const MUZZLE_OFFSET: f64 = 0.6;

/// Downward acceleration applied to player projectiles (units/s²).
pub const BULLET_GRAVITY: f64 = 9.8;

// --- Collision ---

/// Hit radius around an enemy for player projectiles.
pub const ENEMY_HIT_RADIUS: f64 = 2.0;

/// Hit radius around the player for enemy projectiles.
pub const PLAYER_HIT_RADIUS: f64 = 1.0;

/// Margin added to environment collider boxes.
pub const COLLIDER_MARGIN: f64 = 0.1;

/// Remaining lifetime at or below which a projectile is considered expired.
/// Absorbs float error from accumulating many small dt steps.
pub const LIFETIME_EPSILON: f64 = 1e-9;

// --- Enemies ---

/// Hard cap on enemies spawned per wave.
pub const MAX_ENEMIES_PER_WAVE: u32 = 24;

/// Enemies in wave 1; each later wave adds `ENEMIES_PER_WAVE_GROWTH`.
pub const ENEMIES_BASE_COUNT: u32 = 3;
pub const ENEMIES_PER_WAVE_GROWTH: u32 = 2;

/// Spawn ring radius: min(MAX, MIN + (wave - 1) * GROWTH).
pub const SPAWN_RING_MIN_RADIUS: f64 = 50.0;
pub const SPAWN_RING_GROWTH_PER_WAVE: f64 = 30.0;
pub const SPAWN_RING_MAX_RADIUS: f64 = 220.0;

/// Boss spawn height.
pub const BOSS_SPAWN_HEIGHT: f64 = 3.0;

/// Normal enemies spawn at MIN + U[0, 1).
pub const ENEMY_SPAWN_MIN_HEIGHT: f64 = 2.0;

pub const BOSS_BASE_HEALTH: f64 = 140.0;
pub const BOSS_HEALTH_PER_WAVE: f64 = 40.0;
pub const ENEMY_BASE_HEALTH: f64 = 30.0;
pub const ENEMY_HEALTH_PER_WAVE: f64 = 8.0;

pub const BOSS_BASE_PROJECTILE_DAMAGE: f64 = 8.0;
pub const BOSS_PROJECTILE_DAMAGE_PER_WAVE: f64 = 1.5;
pub const ENEMY_BASE_PROJECTILE_DAMAGE: f64 = 4.0;
pub const ENEMY_PROJECTILE_DAMAGE_PER_WAVE: f64 = 1.0;

pub const BOSS_BASE_FIRE_COOLDOWN: f64 = 2.5;
pub const BOSS_MIN_FIRE_COOLDOWN: f64 = 1.2;
pub const ENEMY_BASE_FIRE_COOLDOWN: f64 = 3.5;
pub const ENEMY_MIN_FIRE_COOLDOWN: f64 = 1.8;

/// Cooldown reduction per wave (seconds).
pub const FIRE_COOLDOWN_REDUCTION_PER_WAVE: f64 = 0.15;

/// Upper bound (exclusive) of the random cooldown jitter.
pub const FIRE_COOLDOWN_JITTER: f64 = 0.8;

/// Enemy walking speed toward the player (units/s).
pub const ENEMY_MOVE_SPEED: f64 = 1.5;

/// Enemies stop closing in below this horizontal distance.
pub const ENEMY_STOP_DISTANCE: f64 = 0.1;

/// Enemies only shoot within this horizontal distance.
pub const ENEMY_SHOOT_RANGE: f64 = 32.0;

/// Vertical aim/muzzle offset for enemy shots.
pub const ENEMY_AIM_OFFSET: f64 = 0.5;

pub const ENEMY_PROJECTILE_SPEED: f64 = 15.0;
pub const ENEMY_PROJECTILE_LIFETIME: f64 = 4.0;

/// Damage used when an enemy projectile carries none.
pub const ENEMY_FALLBACK_PROJECTILE_DAMAGE: f64 = 6.0;

// --- Waves ---

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Pause between a cleared standard wave and the next one (seconds).
pub const AUTO_ADVANCE_DELAY_SECS: f64 = 2.0;

// --- Economy ---

pub const STARTING_MONEY: u64 = 500;
pub const STARTING_GUN_LEVEL: u32 = 1;

/// Upgrade cost for level n is UPGRADE_BASE_COST * 2^(n - 1).
pub const UPGRADE_BASE_COST: u64 = 250;

/// Players must stand within this distance of a portal to upgrade.
pub const PORTAL_RADIUS: f64 = 10.0;

pub const BOSS_KILL_SCORE: u64 = 300;
pub const ENEMY_KILL_SCORE: u64 = 100;
pub const BOSS_KILL_MONEY: u64 = 75;
pub const ENEMY_KILL_MONEY: u64 = 25;

// --- Progress codes ---

pub const PROGRESS_CODE_PREFIX: &str = "ULS-";
pub const PROGRESS_CODE_VERSION: u32 = 1;
/// Gun levels a progress code can carry: 1..=PROGRESS_CODE_MAX_LEVEL.
pub const PROGRESS_CODE_MAX_LEVEL: u32 = 99;
