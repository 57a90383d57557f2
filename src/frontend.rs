//! Frontend seams
//!
//! The session drives the simulation through these traits so the same loop
//! runs under a browser canvas, a test harness, or the headless demo. Null
//! implementations are provided for every seam.

use crate::audio::SoundCue;
use crate::sim::{GameState, InputState};

pub trait Renderer {
    fn render_frame(&mut self, state: &GameState);
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

pub trait InputSource {
    fn sample(&mut self) -> InputState;
}

pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

pub trait OverlayToggle {
    fn set_visible(&mut self, visible: bool);
}

pub trait PlayCounter {
    fn record_play(&mut self);
}

/// Everything a session needs from its host
pub struct Frontend {
    pub renderer: Box<dyn Renderer>,
    pub audio: Box<dyn AudioSink>,
    pub input: Box<dyn InputSource>,
    pub score_display: Box<dyn TextDisplay>,
    pub level_display: Box<dyn TextDisplay>,
    pub game_over_overlay: Box<dyn OverlayToggle>,
    pub analytics: Box<dyn PlayCounter>,
}

impl Frontend {
    /// Frontend with every seam stubbed out. Useful as a base for
    /// headless runs that only care about one or two collaborators.
    pub fn headless() -> Self {
        Self {
            renderer: Box::new(NullRenderer),
            audio: Box::new(SilentAudio),
            input: Box::new(FixedInput(InputState::default())),
            score_display: Box::new(NullText),
            level_display: Box::new(NullText),
            game_over_overlay: Box::new(NullOverlay),
            analytics: Box::new(NullPlayCounter),
        }
    }
}

/// Renderer that draws nothing
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_frame(&mut self, _state: &GameState) {}
}

/// Audio sink that swallows every cue
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Input source that returns the same snapshot every tick
pub struct FixedInput(pub InputState);

impl InputSource for FixedInput {
    fn sample(&mut self) -> InputState {
        self.0
    }
}

/// Text display that drops updates
pub struct NullText;

impl TextDisplay for NullText {
    fn set_text(&mut self, _text: &str) {}
}

/// Overlay that stays hidden
pub struct NullOverlay;

impl OverlayToggle for NullOverlay {
    fn set_visible(&mut self, _visible: bool) {}
}

/// Play counter that records nowhere
pub struct NullPlayCounter;

impl PlayCounter for NullPlayCounter {
    fn record_play(&mut self) {}
}
