//! Asteroid spawning and splitting
//!
//! Waves spawn on a ring at the viewport edge and drift back toward the
//! origin. A shot asteroid splits into two faster children one tier down,
//! or vanishes outright if already at the smallest tier.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use super::rng::GameRng;
use super::state::{Asteroid, AsteroidSize, GameEvent, GameState, Particle};
use crate::consts::*;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Number of asteroids in the wave for a 1-based level
#[inline]
pub fn wave_count(level: u32) -> u32 {
    debug_assert!(level >= 1);
    (WAVE_BASE_COUNT + level - 1).min(WAVE_MAX_COUNT)
}

/// Advance to the next level and spawn its wave of large asteroids
pub fn spawn_level(state: &mut GameState) {
    state.level += 1;
    let count = wave_count(state.level);
    state.asteroids.reserve(count as usize);
    for _ in 0..count {
        let rock = edge_asteroid(&mut state.rng, AsteroidSize::Large);
        state.asteroids.push(rock);
    }
    state.events.push(GameEvent::LevelStarted {
        level: state.level,
        count,
    });
    log::info!("level {}: spawned {} asteroids", state.level, count);
}

/// Construct an asteroid on the spawn ring, drifting inward
pub fn edge_asteroid(rng: &mut GameRng, size: AsteroidSize) -> Asteroid {
    let angle = rng.uniform(0.0, TAU);
    let speed = rng.uniform(ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED);
    Asteroid {
        pos: polar_to_cartesian(ASTEROID_SPAWN_DISTANCE, angle),
        vel: -polar_to_cartesian(speed, angle),
        rot: random_rot(rng),
        spin: random_spin(rng),
        size,
    }
}

/// Split a destroyed asteroid into its children.
///
/// Two children one tier down, at the parent's position, each on a course
/// deflected up to ±45 degrees from the parent's at 1.2x its speed. A
/// smallest-tier asteroid yields nothing.
pub fn split(rng: &mut GameRng, parent: &Asteroid) -> Vec<Asteroid> {
    let Some(child_size) = parent.size.split() else {
        return Vec::new();
    };

    let (speed, course) = cartesian_to_polar(parent.vel);
    let child_speed = speed * SPLIT_SPEED_FACTOR;

    (0..2)
        .map(|_| {
            let deflected = course + rng.uniform(-SPLIT_MAX_DEFLECTION, SPLIT_MAX_DEFLECTION);
            Asteroid {
                pos: parent.pos,
                vel: polar_to_cartesian(child_speed, deflected),
                rot: random_rot(rng),
                spin: random_spin(rng),
                size: child_size,
            }
        })
        .collect()
}

/// Radial burst of explosion particles at a destroyed asteroid's position
pub fn explosion_burst(pos: Vec2) -> Vec<Particle> {
    (0..BURST_PARTICLES)
        .map(|i| {
            let angle = i as f32 / BURST_PARTICLES as f32 * TAU;
            Particle {
                pos,
                vel: polar_to_cartesian(PARTICLE_SPEED, angle),
                life: PARTICLE_LIFE_TICKS,
            }
        })
        .collect()
}

fn random_rot(rng: &mut GameRng) -> Vec3 {
    Vec3::new(
        rng.uniform(0.0, PI),
        rng.uniform(0.0, PI),
        rng.uniform(0.0, PI),
    )
}

fn random_spin(rng: &mut GameRng) -> Vec3 {
    Vec3::new(
        rng.uniform(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
        rng.uniform(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
        rng.uniform(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    fn angle_delta(a: f32, b: f32) -> f32 {
        (a - b + PI).rem_euclid(TAU) - PI
    }

    #[test]
    fn test_wave_count_progression() {
        assert_eq!(wave_count(1), 4);
        assert_eq!(wave_count(2), 5);
        assert_eq!(wave_count(3), 6);
        assert_eq!(wave_count(4), 7);
        assert_eq!(wave_count(5), 8);
        assert_eq!(wave_count(6), 8);
        assert_eq!(wave_count(20), 8);
    }

    #[test]
    fn test_spawn_level_advances_counter_and_fills_wave() {
        let mut state = GameState::new(3);
        spawn_level(&mut state);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 4);

        state.asteroids.clear();
        spawn_level(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.asteroids.len(), 5);

        for expect in [6, 7, 8, 8, 8] {
            state.asteroids.clear();
            spawn_level(&mut state);
            assert_eq!(state.asteroids.len(), expect);
        }
        assert_eq!(state.level, 7);
    }

    #[test]
    fn test_spawned_asteroids_sit_on_ring_drifting_inward() {
        let mut state = GameState::new(11);
        spawn_level(&mut state);
        for rock in &state.asteroids {
            assert_eq!(rock.size, AsteroidSize::Large);
            assert!((rock.pos.length() - ASTEROID_SPAWN_DISTANCE).abs() < 1e-4);
            let speed = rock.vel.length();
            assert!((ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED).contains(&speed));
            // Velocity points straight back at the origin
            assert!(rock.pos.dot(rock.vel) < 0.0);
            assert!((rock.pos.normalize() + rock.vel.normalize()).length() < 1e-4);
        }
    }

    #[test]
    fn test_spawn_level_emits_event() {
        let mut state = GameState::new(5);
        spawn_level(&mut state);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::LevelStarted { level: 1, count: 4 }]
        );
    }

    #[test]
    fn test_split_large_yields_two_medium() {
        let mut rng = GameRng::seeded(9);
        let parent = edge_asteroid(&mut rng, AsteroidSize::Large);
        let children = split(&mut rng, &parent);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.size, AsteroidSize::Medium);
            assert_eq!(child.pos, parent.pos);
        }
    }

    #[test]
    fn test_split_medium_yields_two_small() {
        let mut rng = GameRng::seeded(9);
        let parent = edge_asteroid(&mut rng, AsteroidSize::Medium);
        let children = split(&mut rng, &parent);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.size == AsteroidSize::Small));
    }

    #[test]
    fn test_split_small_yields_nothing() {
        let mut rng = GameRng::seeded(9);
        let parent = edge_asteroid(&mut rng, AsteroidSize::Small);
        assert!(split(&mut rng, &parent).is_empty());
    }

    #[test]
    fn test_split_children_speed_and_course() {
        let mut rng = GameRng::seeded(21);
        let parent = Asteroid {
            pos: Vec2::new(4.0, -2.0),
            vel: Vec2::new(0.2, 0.0),
            rot: Vec3::ZERO,
            spin: Vec3::ZERO,
            size: AsteroidSize::Large,
        };
        let children = split(&mut rng, &parent);
        for child in &children {
            assert!((child.vel.length() - 0.24).abs() < 1e-5);
            let (_, course) = cartesian_to_polar(child.vel);
            assert!(angle_delta(course, 0.0).abs() <= FRAC_PI_4 + 1e-5);
        }
    }

    #[test]
    fn test_burst_is_eight_even_spokes() {
        let burst = explosion_burst(Vec2::new(1.0, 2.0));
        assert_eq!(burst.len(), BURST_PARTICLES);
        for (i, p) in burst.iter().enumerate() {
            assert_eq!(p.life, PARTICLE_LIFE_TICKS);
            assert_eq!(p.pos, Vec2::new(1.0, 2.0));
            assert!((p.vel.length() - PARTICLE_SPEED).abs() < 1e-6);
            let expected = i as f32 / BURST_PARTICLES as f32 * TAU;
            let (_, course) = cartesian_to_polar(p.vel);
            assert!(angle_delta(course, expected).abs() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_split_children_keep_course_within_deflection(
            seed in 0u64..512,
            vx in -0.3f32..0.3,
            vy in -0.3f32..0.3,
        ) {
            prop_assume!(vx.abs() > 1e-3 || vy.abs() > 1e-3);
            let mut rng = GameRng::seeded(seed);
            let parent = Asteroid {
                pos: Vec2::ZERO,
                vel: Vec2::new(vx, vy),
                rot: Vec3::ZERO,
                spin: Vec3::ZERO,
                size: AsteroidSize::Large,
            };
            let (speed, course) = cartesian_to_polar(parent.vel);
            for child in split(&mut rng, &parent) {
                prop_assert!((child.vel.length() - speed * SPLIT_SPEED_FACTOR).abs() < 1e-4);
                let (_, child_course) = cartesian_to_polar(child.vel);
                prop_assert!(angle_delta(child_course, course).abs() <= FRAC_PI_4 + 1e-4);
            }
        }
    }
}
