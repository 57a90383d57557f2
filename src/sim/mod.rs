//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rng::GameRng;
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GamePhase, GameState, Particle, Ship,
};
pub use tick::{InputState, restart, tick};
