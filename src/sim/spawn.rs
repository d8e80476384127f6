//! Asteroid population management
//!
//! Seeds the initial field, splits destroyed asteroids into fragments and
//! re-seeds when the field empties. The population is never left at zero:
//! any removal that empties the field synchronously triggers a re-seed
//! before the tick's snapshot is taken.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, SizeClass};

/// Spawn the base field: `field_base_count` large asteroids at random
/// positions inside the arena, each with a random heading and speed.
pub fn seed_field(state: &mut GameState) {
    let count = state.tuning.field_base_count;
    log::info!("seeding field with {count} large asteroids");
    for _ in 0..count {
        let pos = random_position(state);
        state.spawn_asteroid(pos, SizeClass::Large);
    }
}

/// Split a destroyed asteroid into `field_base_count` fragments of the next
/// smaller size at its last position. Small asteroids produce nothing.
pub fn spawn_fragments(state: &mut GameState, pos: Vec2, size: SizeClass) {
    let Some(fragment_size) = size.fragment_size() else {
        return;
    };
    for _ in 0..state.tuning.field_base_count {
        state.spawn_asteroid(pos, fragment_size);
    }
}

/// Re-seed the base field if the last removal emptied it.
/// Returns true when the field was cleared and re-seeded.
pub fn check_field(state: &mut GameState) -> bool {
    if state.asteroids.is_empty() {
        log::info!("field cleared at score {}", state.score);
        seed_field(state);
        true
    } else {
        false
    }
}

fn random_position(state: &mut GameState) -> Vec2 {
    let x = state.rng.random_range(0.0..state.arena.width);
    let y = state.rng.random_range(0.0..state.arena.height);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_field_positions_inside_arena() {
        let state = GameState::new(800.0, 600.0, 1234);
        assert_eq!(state.asteroids.len(), 4);
        for asteroid in &state.asteroids {
            assert_eq!(asteroid.size, SizeClass::Large);
            assert!(state.arena.contains(asteroid.pos));
        }
    }

    #[test]
    fn test_large_splits_into_four_medium_at_site() {
        let mut state = GameState::new(800.0, 600.0, 1);
        state.asteroids.clear();

        let site = Vec2::new(123.0, 456.0);
        spawn_fragments(&mut state, site, SizeClass::Large);

        assert_eq!(state.asteroids.len(), 4);
        for fragment in &state.asteroids {
            assert_eq!(fragment.size, SizeClass::Medium);
            assert_eq!(fragment.pos, site);
        }
    }

    #[test]
    fn test_medium_splits_into_four_small() {
        let mut state = GameState::new(800.0, 600.0, 1);
        state.asteroids.clear();

        spawn_fragments(&mut state, Vec2::new(50.0, 50.0), SizeClass::Medium);

        assert_eq!(state.asteroids.len(), 4);
        assert!(state.asteroids.iter().all(|a| a.size == SizeClass::Small));
    }

    #[test]
    fn test_small_produces_no_fragments() {
        let mut state = GameState::new(800.0, 600.0, 1);
        state.asteroids.clear();

        spawn_fragments(&mut state, Vec2::new(50.0, 50.0), SizeClass::Small);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_check_field_reseeds_only_when_empty() {
        let mut state = GameState::new(800.0, 600.0, 1);
        assert!(!check_field(&mut state));
        assert_eq!(state.asteroids.len(), 4);

        state.asteroids.clear();
        assert!(check_field(&mut state));
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.asteroids.iter().all(|a| a.size == SizeClass::Large));
    }

    #[test]
    fn test_fragments_have_independent_velocities() {
        let mut state = GameState::new(800.0, 600.0, 42);
        state.asteroids.clear();
        spawn_fragments(&mut state, Vec2::new(10.0, 10.0), SizeClass::Large);

        // Four independently sampled headings colliding would be a broken RNG
        let first = state.asteroids[0].vel;
        assert!(state.asteroids.iter().skip(1).any(|a| a.vel != first));
    }
}
