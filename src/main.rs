//! Astro Blast headless demo
//!
//! A tiny autopilot flies the craft so the whole simulation surface can be
//! exercised and watched through logs without a renderer. Pass a seed as the
//! first argument to replay a specific run:
//!
//! ```text
//! RUST_LOG=info astro-blast 12345
//! ```

use glam::Vec2;

use astro_blast::consts::{ARENA_HEIGHT, ARENA_WIDTH, SIM_DT};
use astro_blast::sim::{
    FireTrigger, GameEvent, GameState, RoundPhase, Snapshot, TickInput, tick,
};
use astro_blast::wrap_degrees;

/// Demo run length: five minutes at the reference rate
const MAX_TICKS: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xA57E01D);

    log::info!("starting demo round, seed {seed}");
    let mut state = GameState::new(ARENA_WIDTH, ARENA_HEIGHT, seed);
    let mut trigger = FireTrigger::default();

    let mut last = None;
    for _ in 0..MAX_TICKS {
        let input = autopilot(&state, &mut trigger);
        let snapshot = tick(&mut state, &input, SIM_DT);
        report_events(&snapshot);
        let game_over = snapshot.phase == RoundPhase::GameOver;
        last = Some(snapshot);
        if game_over {
            break;
        }
    }

    if let Some(snapshot) = last {
        match snapshot.phase {
            RoundPhase::GameOver => {
                println!("game over: final score {}", snapshot.score)
            }
            RoundPhase::Playing => println!(
                "demo time limit reached: score {}, lives {}",
                snapshot.score, snapshot.lives
            ),
        }
    }
}

/// Steer toward the nearest asteroid and fire when roughly aligned.
/// Thrust is used to close distance on far-away targets.
fn autopilot(state: &GameState, trigger: &mut FireTrigger) -> TickInput {
    let craft = &state.craft;
    let Some(target) = state.asteroids.iter().min_by(|a, b| {
        let da = a.pos.distance_squared(craft.pos);
        let db = b.pos.distance_squared(craft.pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return TickInput::default();
    };

    let to_target: Vec2 = target.pos - craft.pos;
    let desired = to_target.y.atan2(to_target.x).to_degrees();
    let error = signed_angle_delta(desired, craft.rotation);

    let aligned = error.abs() < 6.0;
    // Release the trigger every few ticks so each alignment produces a
    // stream of single shots instead of one
    let fire_held = aligned && state.time_ticks % 12 < 6;

    TickInput {
        thrust_forward: aligned && to_target.length() > 250.0,
        thrust_reverse: false,
        rotate_left: error < -2.0,
        rotate_right: error > 2.0,
        fire: trigger.update(fire_held),
    }
}

/// Shortest signed rotation from `current` to `target`, in (-180, 180]
fn signed_angle_delta(target: f32, current: f32) -> f32 {
    let delta = wrap_degrees(target - current);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

fn report_events(snapshot: &Snapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::AsteroidDestroyed { size, credits } => {
                log::info!("destroyed {size:?} asteroid for {credits} credits (score {})", snapshot.score)
            }
            GameEvent::CraftHit { lives_left } => {
                log::info!("craft hit, {lives_left} lives left")
            }
            GameEvent::RoundCleared => log::info!("field cleared, re-seeding"),
        }
    }
}
