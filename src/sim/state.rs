//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here; all randomness flows
//! through a seeded PCG so identical seeds and input scripts replay
//! identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::CRAFT_START_ROTATION;
use crate::tuning::Tuning;
use crate::{velocity_from_angle, wrap_degrees};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; the state is frozen
    GameOver,
}

/// Asteroid size classes, ordered Large > Medium > Small
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Credits awarded on destruction - inverse to size, the small
    /// fast-moving targets pay best
    pub fn credits(self) -> u64 {
        match self {
            SizeClass::Large => 20,
            SizeClass::Medium => 50,
            SizeClass::Small => 100,
        }
    }

    /// Bounding-circle radius
    pub fn radius(self) -> f32 {
        match self {
            SizeClass::Large => 32.0,
            SizeClass::Medium => 16.0,
            SizeClass::Small => 8.0,
        }
    }

    /// Size of the fragments a destroyed asteroid splits into
    pub fn fragment_size(self) -> Option<SizeClass> {
        match self {
            SizeClass::Large => Some(SizeClass::Medium),
            SizeClass::Medium => Some(SizeClass::Small),
            SizeClass::Small => None,
        }
    }
}

/// The player's craft
#[derive(Debug, Clone)]
pub struct Craft {
    pub pos: Vec2,
    /// Heading in degrees, wrapped to [0, 360)
    pub rotation: f32,
    pub vel: Vec2,
    /// Derived each tick from thrust input and rotation
    pub accel: Vec2,
    /// Degrees per second, set from rotate input each tick
    pub angular_vel: f32,
    pub alive: bool,
}

impl Craft {
    /// A craft at the arena center, facing up, at rest
    pub fn spawned_at(center: Vec2) -> Self {
        Self {
            pos: center,
            rotation: wrap_degrees(CRAFT_START_ROTATION),
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            angular_vel: 0.0,
            alive: true,
        }
    }

    /// Reset to center after a non-fatal hit
    pub fn respawn(&mut self, center: Vec2) {
        *self = Craft::spawned_at(center);
    }
}

/// A fired projectile. Heading and speed are fixed at fire time.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub rotation: f32,
    pub vel: Vec2,
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub rotation: f32,
    pub vel: Vec2,
    pub size: SizeClass,
}

impl Asteroid {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// Complete simulation state for one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub arena: Arena,
    pub tuning: Tuning,
    pub phase: RoundPhase,
    pub lives: u8,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub craft: Craft,
    /// Sorted by id for deterministic iteration
    pub asteroids: Vec<Asteroid>,
    /// Sorted by id; never exceeds the pool capacity
    pub projectiles: Vec<Projectile>,
    next_id: u32,
}

impl GameState {
    /// Start a round: craft at center, full lives, zero score, field seeded
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_tuning(width, height, seed, Tuning::default())
    }

    /// Start a round carrying the score from a previous one. Whether score
    /// persists across rounds is host policy, not a core invariant.
    pub fn new_carrying_score(width: f32, height: f32, seed: u64, score: u64) -> Self {
        let mut state = Self::new(width, height, seed);
        state.score = score;
        state
    }

    /// Start a round with non-default balance numbers
    pub fn with_tuning(width: f32, height: f32, seed: u64, tuning: Tuning) -> Self {
        let arena = Arena::new(width, height);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            craft: Craft::spawned_at(arena.center()),
            arena,
            phase: RoundPhase::Playing,
            lives: tuning.start_lives,
            score: 0,
            time_ticks: 0,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            next_id: 1,
            tuning,
        };
        super::spawn::seed_field(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one asteroid drifting from `pos` with a random heading and a
    /// random speed in the asteroid speed range
    pub(crate) fn spawn_asteroid(&mut self, pos: Vec2, size: SizeClass) {
        let id = self.next_entity_id();
        let heading = self.rng.random_range(0.0..360.0);
        let speed = self
            .rng
            .random_range(self.tuning.asteroid_min_speed..=self.tuning.asteroid_max_speed);
        self.asteroids.push(Asteroid {
            id,
            pos,
            rotation: heading,
            vel: velocity_from_angle(heading, speed),
            size,
        });
    }

    /// Fire a projectile from the craft's position along its heading.
    /// A fire command against an exhausted pool is a silent no-op.
    pub(crate) fn fire_projectile(&mut self) -> bool {
        if self.projectiles.len() >= self.tuning.projectile_pool {
            return false;
        }
        let id = self.next_entity_id();
        let rotation = self.craft.rotation;
        self.projectiles.push(Projectile {
            id,
            pos: self.craft.pos,
            rotation,
            vel: velocity_from_angle(rotation, self.tuning.projectile_speed),
        });
        true
    }

    /// Keep collections sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.asteroids.sort_by_key(|a| a.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
