//! Collision passes
//!
//! Bullets are tested against asteroids before the ship is, so an asteroid
//! destroyed by a shot can no longer end the game in the same tick. Both
//! passes iterate in reverse for stable in-place removal, and each bullet
//! destroys at most one asteroid per tick.

use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::SHIP_RADIUS;

/// Run both collision passes for the tick
pub fn resolve(state: &mut GameState) {
    bullets_vs_asteroids(state);
    ship_vs_asteroids(state);
}

fn bullets_vs_asteroids(state: &mut GameState) {
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        // Fresh length each bullet: children split off by a later-indexed
        // bullet are targets for the earlier ones within the same tick.
        let mut j = state.asteroids.len();
        while j > 0 {
            j -= 1;
            let rock = state.asteroids[j];
            if state.bullets[i].pos.distance(rock.pos) < rock.radius() {
                state.particles.extend(spawn::explosion_burst(rock.pos));
                let children = spawn::split(&mut state.rng, &rock);
                state.asteroids.remove(j);
                state.asteroids.extend(children);
                state.bullets.remove(i);
                state.score += rock.size.points();
                state.events.push(GameEvent::AsteroidDestroyed {
                    tier: rock.size.tier(),
                });
                break;
            }
        }
    }
}

fn ship_vs_asteroids(state: &mut GameState) {
    for rock in state.asteroids.iter().rev() {
        if state.ship.pos.distance(rock.pos) < rock.radius() + SHIP_RADIUS {
            // Any colliding asteroid ends the run
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameEnded);
            break;
        }
    }
}
