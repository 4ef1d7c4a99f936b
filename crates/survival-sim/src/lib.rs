//! Headless simulation engine for survival mode.
//!
//! Owns the hecs ECS world, runs systems once per frame, and produces
//! `GameStateSnapshot`s for the frontend.

pub mod colliders;
pub mod config;
pub mod economy;
pub mod engine;
pub mod player;
pub mod progress_code;
pub mod scheduler;
pub mod spawn;
pub mod systems;
pub mod waves;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use survival_core as core;

#[cfg(test)]
mod tests;
