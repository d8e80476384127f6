//! The per-tick simulation driver
//!
//! Advances the whole simulation exactly once per call: input -> integrate ->
//! wrap -> collide -> react, then returns a snapshot. Entity creation and
//! destruction inside a tick is buffered so no phase mutates a collection it
//! is iterating.

use glam::Vec2;

use super::collision;
use super::snapshot::{GameEvent, Snapshot};
use super::spawn;
use super::state::{GameState, RoundPhase};
use crate::consts::SIM_DT;
use crate::{velocity_from_angle, wrap_degrees};

/// Input intent for a single tick, sampled once per frame by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Must be true only on the tick the fire key goes down; see
    /// [`FireTrigger`] for deriving this from sampled key-down state
    pub fire: bool,
}

/// Edge detector turning sampled key-down state into single-shot fire
/// signals: one shot per press, no per-tick auto-fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireTrigger {
    held: bool,
}

impl FireTrigger {
    /// Feed the sampled key state; true only on the released-to-held
    /// transition
    pub fn update(&mut self, held: bool) -> bool {
        let fired = held && !self.held;
        self.held = held;
        fired
    }
}

/// Advance the simulation by one frame and return the resulting snapshot.
///
/// Calling this after the round has ended is a no-op returning the frozen
/// final snapshot. A non-finite or negative delta is clamped to zero; the
/// simulation never integrates non-finite state.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Snapshot {
    if state.phase == RoundPhase::GameOver {
        return Snapshot::capture(state, Vec::new());
    }

    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("rejecting invalid delta time {dt}, clamping to zero");
        0.0
    };

    state.time_ticks += 1;
    let mut events = Vec::new();

    apply_craft_control(state, input);
    integrate(state, dt);
    wrap_entities(state);
    cull_projectiles(state);
    resolve_projectile_impacts(state, &mut events);
    resolve_craft_impact(state, &mut events);

    state.normalize_order();
    Snapshot::capture(state, events)
}

/// Turn input intent into craft acceleration, angular velocity and shots
fn apply_craft_control(state: &mut GameState, input: &TickInput) {
    if input.fire && state.craft.alive && !state.fire_projectile() {
        log::debug!("shot suppressed, projectile pool exhausted");
    }

    let thrust = state.tuning.craft_thrust;
    let turn_rate = state.tuning.craft_turn_rate;
    let craft = &mut state.craft;

    craft.accel = if input.thrust_forward {
        velocity_from_angle(craft.rotation, thrust)
    } else if input.thrust_reverse {
        velocity_from_angle(craft.rotation, -thrust)
    } else {
        Vec2::ZERO
    };

    craft.angular_vel = if input.rotate_left {
        -turn_rate
    } else if input.rotate_right {
        turn_rate
    } else {
        0.0
    };
}

fn integrate(state: &mut GameState, dt: f32) {
    let tuning = state.tuning;
    let craft = &mut state.craft;

    if craft.alive {
        craft.vel += craft.accel * dt;
        // Drag is a per-tick factor at the reference rate; raise it to
        // dt/SIM_DT so behavior is frame-rate independent.
        craft.vel *= tuning.craft_drag.powf(dt / SIM_DT);
        let speed = craft.vel.length();
        if speed > tuning.craft_max_speed {
            craft.vel = craft.vel / speed * tuning.craft_max_speed;
        }
        craft.pos += craft.vel * dt;
        craft.rotation = wrap_degrees(craft.rotation + craft.angular_vel * dt);
    }

    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel * dt;
    }
    // Asteroids drift at constant velocity, no further acceleration
    for asteroid in &mut state.asteroids {
        asteroid.pos += asteroid.vel * dt;
    }
}

fn wrap_entities(state: &mut GameState) {
    let arena = state.arena;
    if state.craft.alive {
        state.craft.pos = arena.wrap(state.craft.pos);
    }
    for asteroid in &mut state.asteroids {
        asteroid.pos = arena.wrap(asteroid.pos);
    }
}

/// Projectiles never wrap; the first tick outside the arena destroys them
fn cull_projectiles(state: &mut GameState) {
    let arena = state.arena;
    state.projectiles.retain(|p| arena.contains(p.pos));
}

fn resolve_projectile_impacts(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let impacts = collision::projectile_impacts(state);
    if impacts.is_empty() {
        return;
    }

    let mut spent_projectiles: Vec<u32> = Vec::new();
    let mut destroyed: Vec<u32> = Vec::new();
    let mut fragment_sites = Vec::new();

    for (projectile_id, asteroid_id) in impacts {
        spent_projectiles.push(projectile_id);
        if destroyed.contains(&asteroid_id) {
            // A second projectile arriving the same tick hits debris
            continue;
        }
        let Some(asteroid) = state.asteroids.iter().find(|a| a.id == asteroid_id) else {
            continue;
        };
        destroyed.push(asteroid_id);
        fragment_sites.push((asteroid.pos, asteroid.size));

        let credits = asteroid.size.credits();
        let size = asteroid.size;
        state.score += credits;
        events.push(GameEvent::AsteroidDestroyed { size, credits });
    }

    state.projectiles.retain(|p| !spent_projectiles.contains(&p.id));
    state.asteroids.retain(|a| !destroyed.contains(&a.id));

    // Fragments spawn after removal so the detection pass above never saw a
    // half-updated field.
    for (pos, size) in fragment_sites {
        spawn::spawn_fragments(state, pos, size);
    }

    if spawn::check_field(state) {
        events.push(GameEvent::RoundCleared);
    }
}

fn resolve_craft_impact(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(asteroid_id) = collision::craft_impact(&state.craft, &state.asteroids) else {
        return;
    };

    // The colliding asteroid is consumed by the impact: no credits, no
    // fragments. Removing it (and moving the craft back to center) is what
    // guarantees a single overlap decrements exactly one life.
    state.asteroids.retain(|a| a.id != asteroid_id);

    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::CraftHit {
        lives_left: state.lives,
    });
    log::info!("craft hit, lives left: {}", state.lives);

    if state.lives == 0 {
        state.craft.alive = false;
        state.phase = RoundPhase::GameOver;
        log::info!("round over, final score {}", state.score);
        return;
    }

    state.craft.respawn(state.arena.center());

    if spawn::check_field(state) {
        events.push(GameEvent::RoundCleared);
    }
}
