//! Per-tick integration
//!
//! Fixed per-frame steps with no delta-time scaling: one call advances every
//! entity exactly once. The ship and asteroids wrap toroidally at the
//! viewport boundary; bullets are culled past the viewport instead, and
//! particles age out.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Wrap a position toroidally at the viewport boundary.
///
/// A coordinate past ±(half view + margin) re-enters at the opposite edge
/// with exactly the boundary magnitude. In-bounds positions pass through
/// unchanged, so wrapping is idempotent.
#[inline]
pub fn wrap_position(mut pos: Vec2) -> Vec2 {
    if pos.x < -WRAP_BOUND {
        pos.x = WRAP_BOUND;
    } else if pos.x > WRAP_BOUND {
        pos.x = -WRAP_BOUND;
    }
    if pos.y < -WRAP_BOUND {
        pos.y = WRAP_BOUND;
    } else if pos.y > WRAP_BOUND {
        pos.y = -WRAP_BOUND;
    }
    pos
}

/// Advance every movable entity one tick
pub fn integrate(state: &mut GameState) {
    // Ship: friction decay, then move, then wrap
    let ship = &mut state.ship;
    ship.vel *= ship.friction;
    ship.pos += ship.vel;
    ship.pos = wrap_position(ship.pos);

    // Bullets advance and despawn past the viewport (no wrap)
    state.bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel;
        bullet.pos.x.abs() <= HALF_VIEW && bullet.pos.y.abs() <= HALF_VIEW
    });

    // Asteroids drift, tumble and wrap
    for rock in &mut state.asteroids {
        rock.pos += rock.vel;
        rock.pos = wrap_position(rock.pos);
        rock.rot += rock.spin;
    }

    // Particles fly straight and age out
    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        debug_assert!(p.life > 0);
        p.life -= 1;
        p.life > 0
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Particle};
    use proptest::prelude::*;

    #[test]
    fn test_wrap_flips_sign_at_exact_boundary() {
        let wrapped = wrap_position(Vec2::new(WRAP_BOUND + 0.5, 0.0));
        assert_eq!(wrapped, Vec2::new(-WRAP_BOUND, 0.0));

        let wrapped = wrap_position(Vec2::new(0.0, -WRAP_BOUND - 3.0));
        assert_eq!(wrapped, Vec2::new(0.0, WRAP_BOUND));
    }

    #[test]
    fn test_wrap_is_noop_in_bounds() {
        for pos in [
            Vec2::ZERO,
            Vec2::new(WRAP_BOUND, -WRAP_BOUND),
            Vec2::new(-17.3, 29.9),
        ] {
            assert_eq!(wrap_position(pos), pos);
        }
    }

    #[test]
    fn test_ship_friction_applies_before_move() {
        let mut state = GameState::new(1);
        state.ship.vel = Vec2::new(1.0, 0.0);
        integrate(&mut state);
        assert!((state.ship.vel.x - SHIP_FRICTION).abs() < 1e-6);
        assert!((state.ship.pos.x - SHIP_FRICTION).abs() < 1e-6);
    }

    #[test]
    fn test_ship_wraps_at_boundary() {
        let mut state = GameState::new(1);
        state.ship.pos = Vec2::new(WRAP_BOUND, 0.0);
        state.ship.vel = Vec2::new(1.0, 0.0);
        integrate(&mut state);
        assert_eq!(state.ship.pos.x, -WRAP_BOUND);
    }

    #[test]
    fn test_bullets_cull_past_viewport_instead_of_wrapping() {
        let mut state = GameState::new(1);
        state.bullets.push(Bullet {
            pos: Vec2::new(HALF_VIEW - 0.4, 0.0),
            vel: Vec2::new(1.0, 0.0),
        });
        state.bullets.push(Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
        });
        integrate(&mut state);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_asteroids_tumble_and_wrap() {
        let mut state = GameState::new(2);
        crate::sim::spawn::spawn_level(&mut state);
        state.asteroids[0].pos = Vec2::new(-WRAP_BOUND - 0.1, 5.0);
        state.asteroids[0].vel = Vec2::ZERO;
        let spin = state.asteroids[0].spin;
        let rot = state.asteroids[0].rot;
        integrate(&mut state);
        assert_eq!(state.asteroids[0].pos, Vec2::new(WRAP_BOUND, 5.0));
        assert_eq!(state.asteroids[0].rot, rot + spin);
    }

    #[test]
    fn test_particles_age_out() {
        let mut state = GameState::new(1);
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.2, 0.0),
            life: 2,
        });
        integrate(&mut state);
        assert_eq!(state.particles.len(), 1);
        assert_eq!(state.particles[0].life, 1);
        integrate(&mut state);
        assert!(state.particles.is_empty());
    }

    proptest! {
        #[test]
        fn prop_wrap_output_always_in_bounds_and_idempotent(
            x in -200.0f32..200.0,
            y in -200.0f32..200.0,
        ) {
            let wrapped = wrap_position(Vec2::new(x, y));
            prop_assert!(wrapped.x.abs() <= WRAP_BOUND);
            prop_assert!(wrapped.y.abs() <= WRAP_BOUND);
            prop_assert_eq!(wrap_position(wrapped), wrapped);
        }

        #[test]
        fn prop_wrap_flips_sign_to_boundary_when_out(
            x in WRAP_BOUND + 0.001..200.0f32,
        ) {
            let wrapped = wrap_position(Vec2::new(x, -x));
            prop_assert_eq!(wrapped, Vec2::new(-WRAP_BOUND, WRAP_BOUND));
        }
    }
}
