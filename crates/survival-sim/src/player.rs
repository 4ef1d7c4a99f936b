//! Player vitals, movement and modifiers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use survival_core::constants::*;
use survival_core::enums::PowerupKind;
use survival_core::types::Position;

/// Transient physics tweaks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Player projectiles ignore gravity while set.
    pub no_bullet_drop: bool,
    /// Seconds of speed boost left.
    pub speed_boost_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Eye position; projectiles aimed at the player target this point.
    pub position: Position,
    pub health: f64,
    pub hunger: f64,
    pub energy: f64,
    /// Normalised walking direction on the ground plane (x, z).
    pub move_intent: (f64, f64),
    pub modifiers: Modifiers,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            health: PLAYER_STAT_MAX,
            hunger: PLAYER_STAT_MAX,
            energy: PLAYER_STAT_MAX,
            move_intent: (0.0, 0.0),
            modifiers: Modifiers::default(),
        }
    }
}

impl PlayerState {
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn is_starving(&self) -> bool {
        self.hunger < HUNGER_PENALTY_THRESHOLD
    }

    pub fn move_speed(&self) -> f64 {
        let mut speed = PLAYER_BASE_MOVE_SPEED;
        if self.modifiers.speed_boost_secs > 0.0 {
            speed *= SPEED_BOOST_MULTIPLIER;
        }
        if self.is_starving() {
            speed *= HUNGER_SPEED_MULTIPLIER;
        }
        speed
    }

    pub fn set_move_intent(&mut self, x: f64, z: f64) {
        let dir = DVec3::new(x, 0.0, z).normalize_or_zero();
        self.move_intent = (dir.x, dir.z);
    }

    /// Passive decay: hunger and energy drain, starvation eats health.
    pub fn update_vitals(&mut self, dt: f64) {
        self.hunger = (self.hunger - HUNGER_DECAY_PER_SEC * dt).max(0.0);
        self.energy = (self.energy - ENERGY_DECAY_PER_SEC * dt).max(0.0);

        if self.is_starving() {
            self.health = (self.health - STARVATION_DRAIN_PER_SEC * dt).max(0.0);
        }
    }

    /// Walk along the current intent and count down the speed boost.
    pub fn update_movement(&mut self, dt: f64) {
        let speed = self.move_speed();
        let (dx, dz) = self.move_intent;
        self.position.x += dx * speed * dt;
        self.position.z += dz * speed * dt;
        self.position.y = PLAYER_EYE_HEIGHT;

        if self.modifiers.speed_boost_secs > 0.0 {
            self.modifiers.speed_boost_secs = (self.modifiers.speed_boost_secs - dt).max(0.0);
        }
    }

    /// Apply incoming damage. Returns the amount actually dealt, or `None`
    /// when the player was already down.
    pub fn take_damage(&mut self, amount: f64) -> Option<f64> {
        if self.is_dead() {
            return None;
        }
        let dealt = if self.is_starving() {
            amount * HUNGER_DAMAGE_MULTIPLIER
        } else {
            amount
        };
        self.health = (self.health - dealt).max(0.0);
        Some(dealt)
    }

    pub fn apply_powerup(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Health => {
                self.health = (self.health + POWERUP_HEALTH_AMOUNT).min(PLAYER_STAT_MAX);
            }
            PowerupKind::Energy => {
                self.energy = (self.energy + POWERUP_ENERGY_AMOUNT).min(PLAYER_STAT_MAX);
                self.modifiers.speed_boost_secs =
                    self.modifiers.speed_boost_secs.max(POWERUP_SPEED_BOOST_SECS);
            }
            PowerupKind::Ration => {
                self.hunger = (self.hunger + POWERUP_HUNGER_AMOUNT).min(PLAYER_STAT_MAX);
            }
        }
    }
}
