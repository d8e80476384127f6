//! Astro Blast - a toroidal arena asteroids game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and key binding are host concerns: the host samples
//! input into a `sim::TickInput`, calls `sim::tick` once per frame with the
//! elapsed delta, and draws whatever the returned `sim::Snapshot` describes.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference simulation timestep (60 Hz, the classic arcade rate).
    /// Per-tick quantities like drag are specified at this rate and
    /// converted to continuous time when integrating.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Wrap padding so sprites fully exit one edge before reappearing
    pub const WRAP_MARGIN: f32 = 16.0;

    /// Craft defaults
    pub const CRAFT_THRUST: f32 = 200.0;
    pub const CRAFT_MAX_SPEED: f32 = 200.0;
    /// Per-tick velocity damping at the reference rate
    pub const CRAFT_DRAG: f32 = 0.99;
    /// Turn rate in degrees per second
    pub const CRAFT_TURN_RATE: f32 = 300.0;
    pub const CRAFT_RADIUS: f32 = 8.0;
    /// Screen coordinates: -90 degrees faces up
    pub const CRAFT_START_ROTATION: f32 = -90.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 300.0;
    pub const PROJECTILE_RADIUS: f32 = 1.0;
    /// Live projectile cap; firing with a full pool is a no-op
    pub const PROJECTILE_POOL: usize = 10;

    /// Asteroid spawn speed range
    pub const ASTEROID_MIN_SPEED: f32 = 50.0;
    pub const ASTEROID_MAX_SPEED: f32 = 200.0;
    /// Asteroids per seeded field, and fragments per split
    pub const FIELD_BASE_COUNT: u32 = 4;

    pub const START_LIVES: u8 = 3;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Velocity vector for a heading in degrees and a speed.
///
/// Screen coordinates: y grows downward, so rotation increases clockwise
/// and -90 degrees points up. Pure and bit-reproducible for a given input.
#[inline]
pub fn velocity_from_angle(angle_degrees: f32, speed: f32) -> Vec2 {
    let rad = angle_degrees.to_radians();
    Vec2::new(rad.cos() * speed, rad.sin() * speed)
}
