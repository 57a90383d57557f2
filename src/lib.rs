//! Space Rocks - A classic asteroid-field shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, game state)
//! - `session`: Frame driver tying input, simulation and collaborators together
//! - `frontend`: Collaborator contracts (renderer, audio, input, HUD, play counter)
//! - `audio`: Synthesized sound cues (Web Audio on wasm)
//! - `analytics`: Play-count statistics persisted to LocalStorage
//! - `hud`: DOM score/level/game-over bindings (wasm)
//! - `render2d`: Canvas 2D renderer (wasm)

pub mod analytics;
pub mod audio;
pub mod frontend;
#[cfg(target_arch = "wasm32")]
pub mod hud;
#[cfg(target_arch = "wasm32")]
pub mod render2d;
pub mod session;
pub mod sim;

pub use session::GameSession;
pub use sim::{GameState, InputState};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Square viewport height in world units (camera frustum)
    pub const VIEW_SIZE: f32 = 60.0;
    /// Half viewport extent; bullets are culled past this
    pub const HALF_VIEW: f32 = VIEW_SIZE / 2.0;
    /// Extra margin past the viewport edge before positions wrap
    pub const WRAP_MARGIN: f32 = 2.0;
    /// Wrap boundary: crossing ±this reinserts at the opposite edge
    pub const WRAP_BOUND: f32 = HALF_VIEW + WRAP_MARGIN;

    /// Ship thrust acceleration per tick
    pub const SHIP_ACCEL: f32 = 0.01;
    /// Ship velocity retained per tick (friction)
    pub const SHIP_FRICTION: f32 = 0.98;
    /// Ship heading change per tick while turning (radians)
    pub const SHIP_TURN_RATE: f32 = 0.1;
    /// Ship collision radius
    pub const SHIP_RADIUS: f32 = 1.0;

    /// Bullet speed per tick
    pub const BULLET_SPEED: f32 = 1.0;
    /// Bullets spawn this far ahead of the ship nose
    pub const BULLET_SPAWN_OFFSET: f32 = 2.0;
    /// Minimum ticks between shots while fire is held (~100 ms at 60 Hz)
    pub const FIRE_COOLDOWN_TICKS: u32 = 6;

    /// Asteroids spawn on a ring this far from the origin
    pub const ASTEROID_SPAWN_DISTANCE: f32 = 30.0;
    /// Asteroid speed range at spawn (uniform)
    pub const ASTEROID_MIN_SPEED: f32 = 0.1;
    pub const ASTEROID_MAX_SPEED: f32 = 0.3;
    /// Tumble rate range per axis (uniform ±)
    pub const ASTEROID_MAX_SPIN: f32 = 0.01;

    /// Split children keep 1.2x the parent's speed
    pub const SPLIT_SPEED_FACTOR: f32 = 1.2;
    /// Split children deflect up to ±45 degrees off the parent's course
    pub const SPLIT_MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;

    /// Wave sizing: level N spawns min(WAVE_BASE_COUNT + N - 1, WAVE_MAX_COUNT)
    pub const WAVE_BASE_COUNT: u32 = 4;
    pub const WAVE_MAX_COUNT: u32 = 8;

    /// Explosion burst: particle count, speed and lifetime in ticks
    pub const BURST_PARTICLES: usize = 8;
    pub const PARTICLE_SPEED: f32 = 0.2;
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
}

/// Forward unit vector for a heading (0 faces +Y, positive turns left)
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::new(-heading.sin(), heading.cos())
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
