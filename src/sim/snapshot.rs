//! Immutable per-tick output for the presentation layer
//!
//! The host renders from this and nothing else; sounds and animations hang
//! off the event list so the core never depends on presentation concerns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, RoundPhase, SizeClass};

/// Position plus heading in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub pose: Pose,
    pub size: SizeClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pose: Pose,
}

/// Lifecycle events raised during a tick, for presentation-side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile destroyed an asteroid worth `credits`
    AsteroidDestroyed { size: SizeClass, credits: u64 },
    /// The craft collided with an asteroid
    CraftHit { lives_left: u8 },
    /// The field emptied and was re-seeded
    RoundCleared,
}

/// Read-only view of the simulation after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// None once the round has ended
    pub craft: Option<Pose>,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: u64,
    pub lives: u8,
    pub phase: RoundPhase,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Capture the current state plus the events raised this tick
    pub fn capture(state: &GameState, events: Vec<GameEvent>) -> Self {
        Self {
            craft: state.craft.alive.then(|| Pose {
                pos: state.craft.pos,
                rotation: state.craft.rotation,
            }),
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pose: Pose {
                        pos: a.pos,
                        rotation: a.rotation,
                    },
                    size: a.size,
                })
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pose: Pose {
                        pos: p.pos,
                        rotation: p.rotation,
                    },
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            phase: state.phase,
            events,
        }
    }
}
