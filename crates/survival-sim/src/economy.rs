//! Score, money and the gun-upgrade cost curve.

use serde::{Deserialize, Serialize};

use survival_core::constants::*;
use survival_core::enums::UpgradeRejection;
use survival_core::types::Position;

/// Price of reaching gun level `level`: 250 * 2^(level - 1).
/// Saturates instead of overflowing for absurd levels.
pub fn cost_for_level(level: u32) -> u64 {
    let exponent = level.saturating_sub(1);
    1u64.checked_shl(exponent)
        .and_then(|scale| UPGRADE_BASE_COST.checked_mul(scale))
        .unwrap_or(u64::MAX)
}

/// Price of upgrading from `current_level` to the next level.
pub fn upgrade_cost(current_level: u32) -> u64 {
    cost_for_level(current_level.saturating_add(1))
}

/// Damage multiplier for a gun level: +20% per level above 1.
pub fn damage_multiplier(gun_level: u32) -> f64 {
    1.0 + gun_level.saturating_sub(1) as f64 * GUN_DAMAGE_PER_LEVEL
}

/// Whether `actor` stands strictly within `radius` of any portal.
pub fn near_portal(actor: &Position, portals: &[Position], radius: f64) -> bool {
    portals.iter().any(|portal| actor.range_to(portal) < radius)
}

/// A completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeReceipt {
    pub level: u32,
    pub cost: u64,
}

/// Player wallet and progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Economy {
    pub money: u64,
    pub gun_level: u32,
    pub score: u64,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(STARTING_MONEY)
    }
}

impl Economy {
    pub fn new(starting_money: u64) -> Self {
        Self {
            money: starting_money,
            gun_level: STARTING_GUN_LEVEL,
            score: 0,
        }
    }

    pub fn damage_multiplier(&self) -> f64 {
        damage_multiplier(self.gun_level)
    }

    pub fn next_upgrade_cost(&self) -> u64 {
        upgrade_cost(self.gun_level)
    }

    /// Lump sum for clearing a boss wave: exactly the next upgrade's price.
    pub fn boss_run_reward(&self) -> u64 {
        self.next_upgrade_cost()
    }

    pub fn deposit(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Credit score and money for a kill. Returns (score_gain, money_gain).
    pub fn award_kill(&mut self, is_boss: bool) -> (u64, u64) {
        let (score_gain, money_gain) = if is_boss {
            (BOSS_KILL_SCORE, BOSS_KILL_MONEY)
        } else {
            (ENEMY_KILL_SCORE, ENEMY_KILL_MONEY)
        };
        self.score = self.score.saturating_add(score_gain);
        self.deposit(money_gain);
        (score_gain, money_gain)
    }

    /// Buy the next gun level. Leaves the wallet untouched on rejection.
    pub fn try_upgrade(
        &mut self,
        actor: &Position,
        portals: &[Position],
        portal_radius: f64,
    ) -> Result<UpgradeReceipt, UpgradeRejection> {
        if !near_portal(actor, portals, portal_radius) {
            return Err(UpgradeRejection::NotAtPortal);
        }

        let cost = self.next_upgrade_cost();
        if self.money < cost {
            return Err(UpgradeRejection::InsufficientFunds {
                cost,
                money: self.money,
            });
        }

        self.money -= cost;
        self.gun_level += 1;
        Ok(UpgradeReceipt {
            level: self.gun_level,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portals() -> Vec<Position> {
        vec![Position::new(0.0, 0.0, 0.0), Position::new(50.0, 0.0, 50.0)]
    }

    #[test]
    fn cost_curve_doubles_per_level() {
        assert_eq!(cost_for_level(2), 500);
        assert_eq!(cost_for_level(3), 1000);
        assert_eq!(cost_for_level(4), 2000);
        assert_eq!(upgrade_cost(1), 500);
        assert_eq!(upgrade_cost(3), 2000);
    }

    #[test]
    fn cost_saturates() {
        assert_eq!(upgrade_cost(80), u64::MAX);
        assert_eq!(upgrade_cost(u32::MAX), u64::MAX);
    }

    #[test]
    fn multiplier_grows_twenty_percent_per_level() {
        assert!((damage_multiplier(1) - 1.0).abs() < 1e-12);
        assert!((damage_multiplier(2) - 1.2).abs() < 1e-12);
        assert!((damage_multiplier(6) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn boss_reward_matches_next_upgrade() {
        let mut economy = Economy::default();
        assert_eq!(economy.boss_run_reward(), 500);
        economy.gun_level = 3;
        assert_eq!(economy.boss_run_reward(), 2000);
    }

    #[test]
    fn upgrade_at_portal_with_funds() {
        let mut economy = Economy::new(600);
        let receipt = economy
            .try_upgrade(&Position::new(3.0, 1.7, 3.0), &portals(), PORTAL_RADIUS)
            .unwrap();
        assert_eq!(receipt, UpgradeReceipt { level: 2, cost: 500 });
        assert_eq!(economy.money, 100);
        assert!((economy.damage_multiplier() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn upgrade_away_from_portal_changes_nothing() {
        let mut economy = Economy::new(1_000_000);
        let result = economy.try_upgrade(&Position::new(25.0, 1.7, 25.0), &portals(), PORTAL_RADIUS);
        assert_eq!(result, Err(UpgradeRejection::NotAtPortal));
        assert_eq!(economy.money, 1_000_000);
        assert_eq!(economy.gun_level, 1);
    }

    #[test]
    fn upgrade_without_funds_changes_nothing() {
        let mut economy = Economy::new(499);
        let result = economy.try_upgrade(&Position::new(50.0, 1.7, 48.0), &portals(), PORTAL_RADIUS);
        assert_eq!(
            result,
            Err(UpgradeRejection::InsufficientFunds {
                cost: 500,
                money: 499
            })
        );
        assert_eq!(economy.money, 499);
        assert_eq!(economy.gun_level, 1);
    }

    #[test]
    fn portal_radius_is_strict() {
        let on_edge = Position::new(10.0, 0.0, 0.0);
        assert!(!near_portal(&on_edge, &portals(), 10.0));
        assert!(near_portal(&Position::new(9.99, 0.0, 0.0), &portals(), 10.0));
    }

    #[test]
    fn kill_awards() {
        let mut economy = Economy::new(0);
        assert_eq!(economy.award_kill(false), (100, 25));
        assert_eq!(economy.award_kill(true), (300, 75));
        assert_eq!(economy.score, 400);
        assert_eq!(economy.money, 100);
    }
}
