//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine state they need passed explicitly.

pub mod damage;
pub mod enemy_ai;
pub mod projectiles;
pub mod snapshot;
