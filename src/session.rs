//! Game session: wires the simulation to a frontend
//!
//! A `GameSession` owns the `GameState` and the frontend collaborators. Once
//! per display refresh the host calls `tick`, which samples input, steps the
//! simulation, dispatches the resulting events to audio and HUD, and hands
//! the state to the renderer. The session keeps ticking through GameOver so
//! the confirm control can restart the run.

use crate::audio::SoundCue;
use crate::frontend::Frontend;
use crate::sim::{self, GameEvent, GamePhase, GameState};

pub struct GameSession {
    state: GameState,
    frontend: Frontend,
    shown_score: Option<u32>,
    shown_level: Option<u32>,
}

impl GameSession {
    pub fn new(seed: u64, frontend: Frontend) -> Self {
        log::info!("session started with seed {}", seed);
        let mut session = Self {
            state: GameState::new(seed),
            frontend,
            shown_score: None,
            shown_level: None,
        };
        session.frontend.analytics.record_play();
        session
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        let input = self.frontend.input.sample();
        sim::tick(&mut self.state, &input);
        self.dispatch_events();
        self.update_hud();
        self.frontend.renderer.render_frame(&self.state);
    }

    /// Abandon the current run and start over
    pub fn restart(&mut self) {
        sim::restart(&mut self.state);
        self.dispatch_events();
        self.update_hud();
    }

    /// False once the run has ended; the loop may keep ticking to poll
    /// the confirm control
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn dispatch_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::AsteroidDestroyed { .. } => {
                    self.frontend.audio.play(SoundCue::Explosion);
                }
                GameEvent::GameEnded => {
                    log::info!(
                        "game over: score {} on level {}",
                        self.state.score,
                        self.state.level
                    );
                    self.frontend.audio.play(SoundCue::GameOver);
                    self.frontend.game_over_overlay.set_visible(true);
                }
                GameEvent::GameRestarted => {
                    self.frontend.game_over_overlay.set_visible(false);
                    self.frontend.analytics.record_play();
                }
                GameEvent::LevelStarted { .. } => {}
            }
        }
    }

    /// Push score/level to the displays, only when the value changed
    fn update_hud(&mut self) {
        if self.shown_score != Some(self.state.score) {
            self.shown_score = Some(self.state.score);
            self.frontend
                .score_display
                .set_text(&self.state.score.to_string());
        }
        if self.shown_level != Some(self.state.level) {
            self.shown_level = Some(self.state.level);
            self.frontend
                .level_display
                .set_text(&self.state.level.to_string());
        }
    }
}
