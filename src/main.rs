//! Flappy Gap entry point
//!
//! Browser: wires input events and `requestAnimationFrame` to the game.
//! Native: runs a headless autopilot session and reports the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_gap::Tuning;
    use flappy_gap::audio::{AudioManager, SoundEffect};
    use flappy_gap::platform::FrameClock;
    use flappy_gap::renderer::{CanvasRenderer, build_scene};
    use flappy_gap::sim::{Game, GamePhase, autopilot};

    /// Game instance holding all host-side state
    struct App {
        game: Game,
        clock: FrameClock,
        renderer: CanvasRenderer,
        audio: AudioManager,
        /// Idle/demo mode - autopilot plays the game
        idle_mode: bool,
        last_phase: GamePhase,
    }

    impl App {
        /// Run one animation frame: tick, react to events, draw
        fn frame(&mut self, time: f64) {
            let dt = self.clock.frame(time);

            if self.idle_mode && autopilot::wants_jump(&self.game.snapshot(), self.game.tuning()) {
                self.game.trigger_action();
            }
            self.game.tick(dt);

            for event in self.game.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }

            let phase = self.game.phase();
            if phase != self.last_phase {
                if phase == GamePhase::Ended {
                    log::info!("Game over - score {}", self.game.score());
                }
                self.last_phase = phase;
            }

            let shapes = build_scene(&self.game.snapshot(), self.game.tuning());
            self.renderer.paint(&shapes);
        }

        fn action(&mut self) {
            self.game.trigger_action();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Flappy Gap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store at device resolution, playfield units scaled onto it
        let tuning = Tuning::default();
        let dpr = window.device_pixel_ratio();
        canvas.set_width((tuning.playfield_width as f64 * dpr) as u32);
        canvas.set_height((tuning.playfield_height as f64 * dpr) as u32);

        let renderer = CanvasRenderer::new(&canvas, tuning.playfield_width)?;
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            clock: FrameClock::for_tuning(&tuning),
            game: Game::new(tuning, seed),
            renderer,
            audio: AudioManager::new(),
            idle_mode: false,
            last_phase: GamePhase::NotStarted,
        }));

        setup_input_handlers(&window, &canvas, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Flappy Gap running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" | "Enter" => {
                        event.prevent_default();
                        a.action();
                    }
                    "i" | "I" => {
                        a.idle_mode = !a.idle_mode;
                        log::info!("Idle mode: {}", a.idle_mode);
                    }
                    "m" | "M" => {
                        let muted = !a.audio.is_muted();
                        a.audio.set_muted(muted);
                        log::info!("Muted: {}", muted);
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Page visibility
        {
            let app = app.clone();
            let document = window.document().ok_or("no document")?;
            let doc = document.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if !doc.hidden() {
                    app.borrow_mut().clock.reset();
                    log::debug!("Page visible again, frame clock reset");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().action();
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (suppresses the emulated mousedown)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().action();
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        web_sys::console::error_1(&err);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Longest headless session (frames at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_FRAMES: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_gap::Tuning;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Gap (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Usage: flappy-gap [tuning.json] [seed]
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::from_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let score = run_headless(tuning, seed);
    println!("\nAutopilot finished with score {} (seed {})", score, seed);
}

/// Play one autopilot run at a steady 60 Hz, returning the final score
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(tuning: flappy_gap::Tuning, seed: u64) -> u32 {
    use flappy_gap::consts::REFERENCE_FRAME_MS;
    use flappy_gap::platform::FrameClock;
    use flappy_gap::sim::{Game, GameEvent, GamePhase, autopilot};

    let mut game = Game::new(tuning, seed);
    let mut clock = FrameClock::for_tuning(game.tuning());

    for frame in 0..HEADLESS_MAX_FRAMES {
        let dt = clock.frame(frame as f64 * REFERENCE_FRAME_MS as f64);
        if autopilot::wants_jump(&game.snapshot(), game.tuning()) {
            game.trigger_action();
        }
        game.tick(dt);

        for event in game.drain_events() {
            match event {
                GameEvent::Scored { score } => log::info!("Passed obstacle #{}", score),
                other => log::debug!("{:?}", other),
            }
        }

        if game.phase() == GamePhase::Ended {
            log::info!(
                "Crashed after {} frames ({:.1}s)",
                clock.frame_index,
                clock.frame_index as f32 * REFERENCE_FRAME_MS / 1000.0
            );
            return game.score();
        }
    }

    log::info!("Survived {} frames", HEADLESS_MAX_FRAMES);
    game.score()
}
