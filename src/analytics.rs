//! Play analytics
//!
//! Persisted to LocalStorage, tracks how often each game is played.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use crate::frontend::PlayCounter;

/// Name this game records its plays under
pub const GAME_NAME: &str = "Space Rocks";

/// Stats for a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStats {
    /// Total completed play starts
    pub play_count: u32,
    /// ISO timestamp of the first recorded play
    pub first_played: String,
    /// ISO timestamp of the most recent play
    pub last_played: String,
}

/// Per-game play stats, stored as one JSON blob
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(flatten)]
    pub games: BTreeMap<String, PlayStats>,
}

impl GameStats {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "space_rocks_stats";

    /// Bump the play count for `game`, creating its entry on first play
    pub fn record(&mut self, game: &str, now: String) {
        match self.games.get_mut(game) {
            Some(stats) => {
                stats.play_count += 1;
                stats.last_played = now;
            }
            None => {
                self.games.insert(
                    game.to_string(),
                    PlayStats {
                        play_count: 1,
                        first_played: now.clone(),
                        last_played: now,
                    },
                );
            }
        }
    }

    /// Play count for `game`, zero when never played
    pub fn play_count(&self, game: &str) -> u32 {
        self.games.get(game).map(|s| s.play_count).unwrap_or(0)
    }

    /// Load stats from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(stats) = serde_json::from_str::<GameStats>(&json) {
                    return stats;
                }
            }
        }

        Self::default()
    }

    /// Save stats to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Play counter backed by the shared stats blob
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct PlayTracker;

#[cfg(target_arch = "wasm32")]
impl PlayCounter for PlayTracker {
    fn record_play(&mut self) {
        let now: String = js_sys::Date::new_0().to_iso_string().into();
        let mut stats = GameStats::load();
        stats.record(GAME_NAME, now);
        stats.save();
        log::info!("play #{} recorded", stats.play_count(GAME_NAME));
    }
}
