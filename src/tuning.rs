//! Data-driven game balance
//!
//! Hosts can override the gameplay numbers from JSON; anything omitted falls
//! back to the stock constants. Shape invariants (entity radii, credit
//! values, the wrap margin) are fixed constants, not tuning.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance numbers for one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Thrust acceleration, units/s^2
    pub craft_thrust: f32,
    /// Velocity magnitude cap, units/s
    pub craft_max_speed: f32,
    /// Per-tick velocity damping at the 60 Hz reference rate
    pub craft_drag: f32,
    /// Turn rate, degrees/s
    pub craft_turn_rate: f32,
    /// Projectile muzzle speed, units/s
    pub projectile_speed: f32,
    /// Live projectile cap
    pub projectile_pool: usize,
    /// Asteroid spawn speed range, units/s
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    /// Asteroids per seeded field and fragments per split
    pub field_base_count: u32,
    pub start_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            craft_thrust: CRAFT_THRUST,
            craft_max_speed: CRAFT_MAX_SPEED,
            craft_drag: CRAFT_DRAG,
            craft_turn_rate: CRAFT_TURN_RATE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_pool: PROJECTILE_POOL,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            field_base_count: FIELD_BASE_COUNT,
            start_lives: START_LIVES,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.craft_max_speed, 200.0);
        assert_eq!(tuning.craft_drag, 0.99);
        assert_eq!(tuning.projectile_pool, 10);
        assert_eq!(tuning.field_base_count, 4);
        assert_eq!(tuning.start_lives, 3);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning =
            Tuning::from_json(r#"{"craft_turn_rate": 360.0, "start_lives": 5}"#).unwrap();
        assert_eq!(tuning.craft_turn_rate, 360.0);
        assert_eq!(tuning.start_lives, 5);
        // Everything else keeps the stock values
        assert_eq!(tuning.projectile_speed, 300.0);
        assert_eq!(tuning.asteroid_min_speed, 50.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{not json").is_err());
    }
}
