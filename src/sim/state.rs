//! Game state and core simulation types
//!
//! Everything the simulation reads or mutates during a tick lives here.

use glam::{Vec2, Vec3};

use super::rng::GameRng;
use crate::consts::*;
use crate::heading_vec;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a restart is accepted
    GameOver,
}

/// Asteroid size class. The tier doubles as collision radius and render scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    /// Numeric tier: 3, 2 or 1
    pub fn tier(&self) -> u32 {
        match self {
            AsteroidSize::Large => 3,
            AsteroidSize::Medium => 2,
            AsteroidSize::Small => 1,
        }
    }

    /// Collision and render radius in world units
    #[inline]
    pub fn radius(&self) -> f32 {
        self.tier() as f32
    }

    /// Points awarded on destruction: floor(100 / tier)
    pub fn points(&self) -> u32 {
        100 / self.tier()
    }

    /// One size down, or None for Small (fully destroyed on hit)
    pub fn split(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians; 0 faces +Y, positive turns left
    pub heading: f32,
    /// Thrust acceleration per tick
    pub accel: f32,
    /// Fraction of velocity retained per tick (0 < f < 1)
    pub friction: f32,
    /// Heading change per tick while a turn input is held
    pub turn_rate: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            heading: 0.0,
            accel: SHIP_ACCEL,
            friction: SHIP_FRICTION,
            turn_rate: SHIP_TURN_RATE,
        }
    }
}

impl Ship {
    /// Forward unit vector for the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_vec(self.heading)
    }
}

/// A bullet. Bullets never wrap; they despawn past the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// An asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Visual tumble angles per axis (radians)
    pub rot: Vec3,
    /// Tumble rate per axis per tick
    pub spin: Vec3,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Collision radius (equals the size tier)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// An explosion particle. Visual only; never collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks; removed at 0
    pub life: u32,
}

/// Events emitted during a tick for the frontend to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A bullet destroyed an asteroid of the given tier
    AsteroidDestroyed { tier: u32 },
    /// A new wave was spawned
    LevelStarted { level: u32, count: u32 },
    /// The ship was hit; the run ended
    GameEnded,
    /// A restart was accepted
    GameRestarted,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Injected random source
    pub rng: GameRng,
    /// Current phase
    pub phase: GamePhase,
    /// Non-negative score
    pub score: u32,
    /// 0 before the first wave, then the 1-based wave number
    pub level: u32,
    /// Player ship
    pub ship: Ship,
    /// Live bullets
    pub bullets: Vec<Bullet>,
    /// Live asteroids
    pub asteroids: Vec<Asteroid>,
    /// Live explosion particles
    pub particles: Vec<Particle>,
    /// Ticks until the next shot may fire
    pub fire_cooldown: u32,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state with the given seed.
    ///
    /// Starts at level 0 with no asteroids; the first tick's refill rule
    /// spawns wave 1.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: GameRng::seeded(seed),
            phase: GamePhase::Playing,
            score: 0,
            level: 0,
            ship: Ship::default(),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            particles: Vec::new(),
            fire_cooldown: 0,
            events: Vec::new(),
        }
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
