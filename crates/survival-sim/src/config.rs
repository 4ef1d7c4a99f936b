//! Engine configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use survival_core::constants::*;
use survival_core::types::Position;

use crate::colliders::Aabb;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same run.
    pub seed: u64,
    /// Upper bound on a single frame step, in seconds.
    pub max_frame_dt: f64,
    pub starting_money: u64,
    /// Player shot damage at gun level 1.
    pub gun_base_damage: f64,
    /// Upgrade stations. Upgrades are only sold within `portal_radius`.
    pub portals: Vec<Position>,
    pub portal_radius: f64,
    /// Static level geometry that stops projectiles.
    pub colliders: Vec<Aabb>,
    pub collider_margin: f64,
    /// Pause between a cleared standard wave and the next one.
    pub auto_advance_delay_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_dt: MAX_FRAME_DT,
            starting_money: STARTING_MONEY,
            gun_base_damage: GUN_BASE_DAMAGE,
            portals: default_portals(),
            portal_radius: PORTAL_RADIUS,
            colliders: Vec::new(),
            collider_margin: COLLIDER_MARGIN,
            auto_advance_delay_secs: AUTO_ADVANCE_DELAY_SECS,
        }
    }
}

/// District markers: downtown, suburbs, industrial, beach, forest, mountain.
pub fn default_portals() -> Vec<Position> {
    vec![
        Position::new(0.0, 0.0, 0.0),
        Position::new(50.0, 0.0, 50.0),
        Position::new(-50.0, 0.0, 50.0),
        Position::new(100.0, 0.0, 0.0),
        Position::new(120.0, 0.0, 20.0),
        Position::new(110.0, 0.0, -20.0),
    ]
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_frame_dt > 0.0 && self.max_frame_dt.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        if !(self.gun_base_damage > 0.0 && self.gun_base_damage.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "gun_base_damage must be positive, got {}",
                self.gun_base_damage
            )));
        }
        if !(self.portal_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "portal_radius must be non-negative, got {}",
                self.portal_radius
            )));
        }
        if !(self.collider_margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "collider_margin must be non-negative, got {}",
                self.collider_margin
            )));
        }
        if !(self.auto_advance_delay_secs >= 0.0 && self.auto_advance_delay_secs.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "auto_advance_delay_secs must be non-negative, got {}",
                self.auto_advance_delay_secs
            )));
        }
        Ok(())
    }
}
