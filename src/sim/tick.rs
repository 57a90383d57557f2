//! Per-tick simulation step
//!
//! One call advances the world one frame: ship control and the fire
//! cooldown, integration, the collision passes, and the wave refill. While
//! GameOver the step freezes and only answers the confirm control with a
//! restart.

use super::collision;
use super::physics;
use super::spawn;
use super::state::{Bullet, GameEvent, GamePhase, GameState, Ship};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Turn counterclockwise
    pub left: bool,
    /// Turn clockwise
    pub right: bool,
    /// Accelerate along the heading
    pub thrust: bool,
    /// Fire control held
    pub fire: bool,
    /// Confirm edge; restarts the game while GameOver
    pub confirm: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &InputState) {
    if state.phase == GamePhase::GameOver {
        if input.confirm {
            restart(state);
        }
        return;
    }

    apply_controls(state, input);
    physics::integrate(state);
    collision::resolve(state);

    if state.asteroids.is_empty() {
        spawn::spawn_level(state);
    }
}

/// Reset for a new run. Reachable through `tick` via the confirm control
/// while GameOver, or directly from a frontend restart button.
pub fn restart(state: &mut GameState) {
    state.ship = Ship::default();
    state.score = 0;
    state.level = 0;
    state.fire_cooldown = 0;
    state.bullets.clear();
    state.asteroids.clear();
    state.particles.clear();
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::GameRestarted);
    spawn::spawn_level(state);
}

fn apply_controls(state: &mut GameState, input: &InputState) {
    let ship = &mut state.ship;
    if input.left {
        ship.heading += ship.turn_rate;
    }
    if input.right {
        ship.heading -= ship.turn_rate;
    }
    if input.thrust {
        let thrust = ship.forward() * ship.accel;
        ship.vel += thrust;
    }

    if state.fire_cooldown > 0 {
        state.fire_cooldown -= 1;
    }
    if input.fire && state.fire_cooldown == 0 {
        fire_bullet(state);
        state.fire_cooldown = FIRE_COOLDOWN_TICKS;
    }
}

fn fire_bullet(state: &mut GameState) {
    let fwd = state.ship.forward();
    state.bullets.push(Bullet {
        pos: state.ship.pos + fwd * BULLET_SPAWN_OFFSET,
        vel: fwd * BULLET_SPEED,
    });
}
