//! Collision detection between projectiles, asteroids and the craft
//!
//! Entity counts are tiny, so exact pairwise bounding-circle tests run every
//! tick with no broad phase. Iteration follows ascending entity id, which
//! keeps resolution order deterministic for a fixed state.

use glam::Vec2;

use super::state::{Asteroid, Craft, GameState};
use crate::consts::{CRAFT_RADIUS, PROJECTILE_RADIUS};

/// Bounding-circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) <= r * r
}

/// All resolved (projectile id, asteroid id) impacts this tick.
///
/// Each projectile resolves at most one collision; the first overlapping
/// asteroid in id order wins. Two projectiles may both claim the same
/// asteroid in the same tick - the resolver treats the second as hitting
/// debris.
pub fn projectile_impacts(state: &GameState) -> Vec<(u32, u32)> {
    let mut impacts = Vec::new();
    for projectile in &state.projectiles {
        let hit = state.asteroids.iter().find(|asteroid| {
            circles_overlap(
                projectile.pos,
                PROJECTILE_RADIUS,
                asteroid.pos,
                asteroid.radius(),
            )
        });
        if let Some(asteroid) = hit {
            impacts.push((projectile.id, asteroid.id));
        }
    }
    impacts
}

/// The first asteroid overlapping the craft, in id order.
/// Only meaningful while the craft is alive.
pub fn craft_impact(craft: &Craft, asteroids: &[Asteroid]) -> Option<u32> {
    if !craft.alive {
        return None;
    }
    asteroids
        .iter()
        .find(|a| circles_overlap(craft.pos, CRAFT_RADIUS, a.pos, a.radius()))
        .map(|a| a.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SizeClass;

    fn asteroid(id: u32, x: f32, y: f32, size: SizeClass) -> Asteroid {
        Asteroid {
            id,
            pos: Vec2::new(x, y),
            rotation: 0.0,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(15.0, 0.0), 6.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(17.0, 0.0), 6.0));
        // Exactly touching counts as overlap
        assert!(circles_overlap(a, 10.0, Vec2::new(16.0, 0.0), 6.0));
    }

    #[test]
    fn test_craft_impact_first_in_id_order() {
        let craft = Craft::spawned_at(Vec2::new(100.0, 100.0));
        let asteroids = vec![
            asteroid(3, 100.0, 100.0, SizeClass::Small),
            asteroid(7, 100.0, 100.0, SizeClass::Large),
        ];
        assert_eq!(craft_impact(&craft, &asteroids), Some(3));
    }

    #[test]
    fn test_craft_impact_requires_overlap() {
        let craft = Craft::spawned_at(Vec2::new(100.0, 100.0));
        let asteroids = vec![asteroid(1, 500.0, 500.0, SizeClass::Large)];
        assert_eq!(craft_impact(&craft, &asteroids), None);
    }

    #[test]
    fn test_dead_craft_never_collides() {
        let mut craft = Craft::spawned_at(Vec2::new(100.0, 100.0));
        craft.alive = false;
        let asteroids = vec![asteroid(1, 100.0, 100.0, SizeClass::Large)];
        assert_eq!(craft_impact(&craft, &asteroids), None);
    }
}
