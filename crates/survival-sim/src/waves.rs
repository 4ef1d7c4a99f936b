//! Wave manager: the survival-mode life cycle.
//!
//! Idle → InProgress → (cleared) → Intermission → InProgress(next) ...
//! A cleared boss wave drops back to Idle; the player restarts manually.
//! The manager only tracks state. The engine spawns, pays and schedules.

use serde::{Deserialize, Serialize};

use survival_core::constants::BOSS_WAVE_INTERVAL;
use survival_core::enums::WavePhase;

use crate::spawn::standard_enemy_count;

/// A wave that just began and needs populating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveStart {
    pub wave_number: u32,
    pub is_boss_wave: bool,
    pub requested_count: u32,
}

/// Result of reporting a kill to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// No wave in progress (deactivated, intermission, boss already paid).
    Ignored,
    /// Wave still has enemies.
    Remaining(u32),
    /// Standard wave cleared; the next wave should be scheduled.
    Cleared { wave_number: u32 },
    /// Boss wave cleared; survival mode is now idle.
    BossCleared { wave_number: u32 },
}

pub fn is_boss_wave(wave_number: u32) -> bool {
    wave_number > 0 && wave_number % BOSS_WAVE_INTERVAL == 0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveManager {
    phase: WavePhase,
    wave_number: u32,
}

impl WaveManager {
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn is_active(&self) -> bool {
        self.phase != WavePhase::Idle
    }

    pub fn is_boss_wave(&self) -> bool {
        is_boss_wave(self.wave_number)
    }

    /// Turn survival mode on and begin wave 1. `None` if already active.
    pub fn activate(&mut self) -> Option<WaveStart> {
        if self.is_active() {
            return None;
        }
        self.wave_number = 0;
        Some(self.start_next_wave())
    }

    /// Advance to the next wave and mark it in progress.
    pub fn start_next_wave(&mut self) -> WaveStart {
        self.wave_number += 1;
        self.phase = WavePhase::InProgress;
        WaveStart {
            wave_number: self.wave_number,
            is_boss_wave: self.is_boss_wave(),
            requested_count: standard_enemy_count(self.wave_number),
        }
    }

    /// React to a kill given the registry count observed right after it.
    pub fn on_enemy_killed(&mut self, remaining: u32) -> KillOutcome {
        if self.phase != WavePhase::InProgress {
            return KillOutcome::Ignored;
        }
        if remaining > 0 {
            return KillOutcome::Remaining(remaining);
        }

        if self.is_boss_wave() {
            self.phase = WavePhase::Idle;
            KillOutcome::BossCleared {
                wave_number: self.wave_number,
            }
        } else {
            self.phase = WavePhase::Intermission;
            KillOutcome::Cleared {
                wave_number: self.wave_number,
            }
        }
    }

    /// Stop survival mode. Returns whether it was active.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = WavePhase::Idle;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_starts_wave_one() {
        let mut waves = WaveManager::default();
        let start = waves.activate().unwrap();
        assert_eq!(
            start,
            WaveStart {
                wave_number: 1,
                is_boss_wave: false,
                requested_count: 3
            }
        );
        assert_eq!(waves.phase(), WavePhase::InProgress);
        assert!(waves.activate().is_none(), "second activate is a no-op");
        assert_eq!(waves.wave_number(), 1);
    }

    #[test]
    fn every_fifth_wave_is_boss() {
        let flags: Vec<bool> = (1..=10).map(is_boss_wave).collect();
        assert_eq!(
            flags,
            vec![false, false, false, false, true, false, false, false, false, true]
        );
        assert!(!is_boss_wave(0));
    }

    #[test]
    fn standard_clear_enters_intermission() {
        let mut waves = WaveManager::default();
        waves.activate();
        assert_eq!(waves.on_enemy_killed(2), KillOutcome::Remaining(2));
        assert_eq!(
            waves.on_enemy_killed(0),
            KillOutcome::Cleared { wave_number: 1 }
        );
        assert_eq!(waves.phase(), WavePhase::Intermission);
        // A late kill report during the intermission does nothing.
        assert_eq!(waves.on_enemy_killed(0), KillOutcome::Ignored);
    }

    #[test]
    fn boss_clear_goes_idle() {
        let mut waves = WaveManager::default();
        waves.activate();
        for _ in 1..5 {
            waves.on_enemy_killed(0);
            waves.start_next_wave();
        }
        assert_eq!(waves.wave_number(), 5);
        assert_eq!(
            waves.on_enemy_killed(0),
            KillOutcome::BossCleared { wave_number: 5 }
        );
        assert!(!waves.is_active());

        // Manual restart begins a fresh run from wave 1.
        let start = waves.activate().unwrap();
        assert_eq!(start.wave_number, 1);
    }

    #[test]
    fn kill_after_deactivate_is_ignored() {
        let mut waves = WaveManager::default();
        waves.activate();
        assert!(waves.deactivate());
        assert_eq!(waves.on_enemy_killed(0), KillOutcome::Ignored);
        assert!(!waves.deactivate());
    }
}
