//! Space Rocks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use space_rocks::GameSession;
    use space_rocks::analytics::PlayTracker;
    use space_rocks::audio::WebAudio;
    use space_rocks::frontend::{
        Frontend, InputSource, NullOverlay, NullText, OverlayToggle, TextDisplay,
    };
    use space_rocks::hud::{DomOverlay, DomText};
    use space_rocks::render2d::CanvasRenderer;
    use space_rocks::sim::InputState;

    /// Keyboard state shared with the event closures
    struct SharedKeys(Rc<RefCell<InputState>>);

    impl InputSource for SharedKeys {
        fn sample(&mut self) -> InputState {
            let mut keys = self.0.borrow_mut();
            let snapshot = *keys;
            // Confirm is an edge, consumed by the read
            keys.confirm = false;
            snapshot
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Space Rocks starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let keys = Rc::new(RefCell::new(InputState::default()));
        setup_keyboard(keys.clone());

        let renderer = CanvasRenderer::new(canvas).expect("no 2d context");

        let frontend = Frontend {
            renderer: Box::new(renderer),
            audio: Box::new(WebAudio::new()),
            input: Box::new(SharedKeys(keys)),
            score_display: text_display(&document, "score"),
            level_display: text_display(&document, "level"),
            game_over_overlay: overlay(&document, "game-over"),
            analytics: Box::new(PlayTracker),
        };

        let seed = js_sys::Date::now() as u64;
        let session = Rc::new(RefCell::new(GameSession::new(seed, frontend)));

        // Start game loop
        request_animation_frame(session);

        log::info!("Space Rocks running!");
    }

    fn text_display(document: &Document, id: &str) -> Box<dyn TextDisplay> {
        match DomText::new(document, id) {
            Some(display) => Box::new(display),
            None => {
                log::warn!("missing #{} element, text display disabled", id);
                Box::new(NullText)
            }
        }
    }

    fn overlay(document: &Document, id: &str) -> Box<dyn OverlayToggle> {
        match DomOverlay::new(document, id) {
            Some(el) => Box::new(el),
            None => {
                log::warn!("missing #{} element, overlay disabled", id);
                Box::new(NullOverlay)
            }
        }
    }

    fn setup_keyboard(keys: Rc<RefCell<InputState>>) {
        let window = web_sys::window().expect("no window");

        // Space both fires and confirms; the sim picks by phase
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut keys = keys.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => keys.left = true,
                    "ArrowRight" => keys.right = true,
                    "ArrowUp" => keys.thrust = true,
                    " " => {
                        keys.fire = true;
                        keys.confirm = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut keys = keys.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => keys.left = false,
                    "ArrowRight" => keys.right = false,
                    "ArrowUp" => keys.thrust = false,
                    " " => keys.fire = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(session: Rc<RefCell<GameSession>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(session);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(session: Rc<RefCell<GameSession>>) {
        session.borrow_mut().tick();
        request_animation_frame(session);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Rocks (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use space_rocks::GameSession;
    use space_rocks::frontend::{Frontend, InputSource};
    use space_rocks::sim::InputState;

    // Sprays bullets while slowly spinning
    struct DemoPilot {
        frame: u32,
    }

    impl InputSource for DemoPilot {
        fn sample(&mut self) -> InputState {
            self.frame += 1;
            InputState {
                left: self.frame % 4 == 0,
                thrust: self.frame % 16 == 0,
                fire: true,
                ..InputState::default()
            }
        }
    }

    let mut frontend = Frontend::headless();
    frontend.input = Box::new(DemoPilot { frame: 0 });

    let mut session = GameSession::new(42, frontend);
    let mut frames = 0u32;
    while session.is_running() && frames < 7200 {
        session.tick();
        frames += 1;
    }

    let state = session.state();
    println!(
        "✓ Demo over after {} frames: score {}, level {}, {} asteroids left",
        frames,
        state.score,
        state.level,
        state.asteroids.len()
    );
}
