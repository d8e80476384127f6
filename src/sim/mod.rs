//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity id)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::circles_overlap;
pub use snapshot::{AsteroidView, GameEvent, Pose, ProjectileView, Snapshot};
pub use state::{Asteroid, Craft, GameState, Projectile, RoundPhase, SizeClass};
pub use tick::{FireTrigger, TickInput, tick};
