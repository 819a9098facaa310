//! Javi Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use javi_run::HighScores;
    use javi_run::platform::{FixedStep, InputLatch};
    use javi_run::renderer::CanvasRenderer;
    use javi_run::sim::{GameEvent, GameState, tick};
    use javi_run::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        clock: FixedStep,
        input: InputLatch,
        best: HighScores,
        document: Document,
        shown_score: Option<u64>,
    }

    impl Game {
        /// Run the ticks this frame is due, then draw
        fn frame(&mut self, time: f64) {
            let ticks = self.clock.advance_to(time);
            for _ in 0..ticks {
                let input = self.input.take();
                if input.restart.is_some() {
                    self.hide_overlay();
                }
                tick(&mut self.state, &input);

                for event in self.state.drain_events() {
                    self.best.record(&event);
                    match event {
                        GameEvent::GameOver { score, .. } => self.show_game_over(score),
                    }
                }
            }

            self.renderer.render(&self.state);
            self.update_hud();
        }

        /// Update the live score element
        fn update_hud(&mut self) {
            if self.shown_score == Some(self.state.score) {
                return;
            }
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            self.shown_score = Some(self.state.score);
        }

        fn show_game_over(&self, score: u64) {
            if let Some(el) = self.document.get_element_by_id("panel-title") {
                el.set_text_content(Some("Game Over"));
            }
            if let Some(el) = self.document.get_element_by_id("panel-score") {
                let text = match self.best.top_score() {
                    Some(best) if best > score => format!("Score: {} (best {})", score, best),
                    _ => format!("Score: {}", score),
                };
                el.set_text_content(Some(&text));
            }
            if let Some(el) = self.document.get_element_by_id("overlay") {
                let _ = el.class_list().remove_1("hidden");
            }
        }

        fn hide_overlay(&self) {
            if let Some(el) = self.document.get_element_by_id("overlay") {
                let _ = el.class_list().add_1("hidden");
            }
        }
    }

    /// Optional inline balance overrides: <script id="tuning" type="application/json">
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                Tuning::default()
            }
        }
    }

    fn new_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Javi Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Simulation runs in canvas pixels
        let mut tuning = load_tuning(&document);
        tuning.viewport_width = canvas.width() as f32;
        tuning.viewport_height = canvas.height() as f32;
        let tuning = tuning.sanitized();

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to init canvas renderer");

        let seed = new_seed();
        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_tuning(seed, tuning),
            renderer,
            clock: FixedStep::new(),
            input: InputLatch::new(),
            best: HighScores::new(),
            document: document.clone(),
            shown_score: None,
        }));
        game.borrow().hide_overlay();
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&document, game.clone());

        request_animation_frame(game);

        log::info!("Javi Run running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.code().as_str(), "Space" | "ArrowUp") {
                    event.prevent_default();
                    game.borrow_mut().input.press_jump();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.press_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (non-passive so the page doesn't scroll)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.press_jump();
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("btn-restart") else {
            log::warn!("No restart button found");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = new_seed();
            let mut game = game.borrow_mut();
            game.input.request_restart(seed);
            game.clock.reset();
            log::info!("Restart requested with seed: {}", seed);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Env var pointing at a JSON file of tuning overrides
#[cfg(not(target_arch = "wasm32"))]
const TUNING_ENV: &str = "JAVI_RUN_TUNING";

/// Headless rounds run natively
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_ROUNDS: u64 = 5;

/// Give up on a round after three minutes of game time
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_TICKS: u64 = 60 * 60 * 3;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use javi_run::HighScores;
    use javi_run::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Javi Run (native) starting...");
    log::info!("Native mode runs headless autopilot rounds - serve the wasm build to play");

    let base_seed = std::env::args()
        .nth(1)
        .and_then(|arg| match arg.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("Ignoring seed argument {:?}: {}", arg, e);
                None
            }
        })
        .unwrap_or(1);

    let tuning = native_tuning();
    let mut best = HighScores::new();
    let mut state = GameState::with_tuning(base_seed, tuning);

    for round in 0..HEADLESS_ROUNDS {
        state.reset(base_seed.wrapping_add(round));
        while state.is_running() && state.time_ticks < HEADLESS_MAX_TICKS {
            let input = TickInput {
                jump: autopilot_wants_jump(&state),
                restart: None,
            };
            tick(&mut state, &input);
        }
        for event in state.drain_events() {
            best.record(&event);
        }
        println!(
            "Round {}: score {} in {} ticks ({})",
            round + 1,
            state.score,
            state.time_ticks,
            if state.is_running() { "survived" } else { "crashed" }
        );
    }

    match best.top_score() {
        Some(top) => println!("Best score: {}", top),
        None => println!("No scoring rounds"),
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("Final state:\n{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

/// Tuning from the env var, falling back to defaults
#[cfg(not(target_arch = "wasm32"))]
fn native_tuning() -> javi_run::Tuning {
    use javi_run::Tuning;

    let Ok(path) = std::env::var(TUNING_ENV) else {
        return Tuning::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning in {}: {}", path, e);
            Tuning::default()
        }
    }
}

/// Jump when the nearest obstacle ahead is about to reach the player
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_jump(state: &javi_run::sim::GameState) -> bool {
    use javi_run::sim::obstacles::advance_step;

    if !state.player.grounded {
        return false;
    }
    let player_right = state.player.pos.x + state.player.size.x;
    let step = advance_step(&state.tuning, state.speed, state.time_ticks);
    state
        .obstacles
        .iter()
        .map(|o| o.pos.x - player_right)
        .filter(|gap| *gap >= 0.0)
        .fold(None, |nearest: Option<f32>, gap| {
            Some(nearest.map_or(gap, |n| n.min(gap)))
        })
        // Take off about ten ticks before contact
        .is_some_and(|gap| gap <= step * 10.0)
}
