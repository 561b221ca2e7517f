//! Gap Flyer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use gap_flyer::platform::{FixedStep, KeyMap};
    use gap_flyer::renderer::RenderState;
    use gap_flyer::sim::{GameEvent, GameState, InputEvent, TickInput, tick};
    use gap_flyer::ui::{Anchor, HudLine, Tone, hud_lines};
    use gap_flyer::{RenderError, Settings, Tuning};

    /// Game instance for the browser
    struct Game {
        state: GameState,
        settings: Settings,
        keys: KeyMap,
        render_state: Option<RenderState>,
        step: FixedStep,
        last_time: f64,
        /// Events received since the last tick
        pending: Vec<InputEvent>,
        /// Last HUD drawn, to skip DOM updates when nothing changed
        hud: Vec<HudLine>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed, tuning),
                keys: KeyMap::from_settings(&settings),
                step: FixedStep::new(settings.frame_rate),
                settings,
                render_state: None,
                last_time: 0.0,
                pending: Vec::new(),
                hud: Vec::new(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            for _ in 0..self.step.advance(dt) {
                // Queued events go to the first tick of the frame only
                let input = TickInput {
                    events: std::mem::take(&mut self.pending),
                };
                for event in tick(&mut self.state, &input) {
                    log_event(&event);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            let lines = hud_lines(&self.state, &self.settings);
            if lines == self.hud {
                return;
            }

            if let Some(hud) = document.get_element_by_id("hud") {
                hud.set_inner_html("");
                for line in &lines {
                    if let Ok(el) = document.create_element("div") {
                        el.set_text_content(Some(&line.text));
                        let _ = el.set_attribute("style", &line_style(line, &self.state.tuning));
                        let _ = hud.append_child(&el);
                    }
                }
            }
            self.hud = lines;
        }
    }

    /// Absolute CSS placement of a HUD line over the canvas
    fn line_style(line: &HudLine, tuning: &Tuning) -> String {
        let color = match line.tone {
            Tone::Normal => "black",
            Tone::Alert => "red",
        };
        let size = line.size / tuning.window_height * 100.0;
        let place = match line.anchor {
            Anchor::Centered { y } => format!(
                "left:0;right:0;text-align:center;top:{}%",
                y / tuning.window_height * 100.0
            ),
            Anchor::TopLeft { x, y } => format!(
                "left:{}%;top:{}%",
                x / tuning.window_width * 100.0,
                y / tuning.window_height * 100.0
            ),
        };
        format!("position:absolute;{place};color:{color};font-size:{size}vh")
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::Crashed { cause } => log::info!("Run over: {:?}", cause),
            GameEvent::NewBest { best } => log::info!("New best score: {}", best),
            GameEvent::GoalRaised { goal } => log::info!("Goal raised to {}", goal),
            other => log::debug!("{:?}", other),
        }
    }

    async fn init_renderer(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Gap Flyer starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let settings = Settings::load();
        document.set_title(&settings.title);

        let tuning = Tuning::load_stored();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings, tuning)));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        // Missing canvas or GPU only costs the visuals; the HUD still runs
        let canvas = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        match canvas {
            Some(canvas) => {
                let dpr = window.device_pixel_ratio();
                let width = (canvas.client_width() as f64 * dpr) as u32;
                let height = (canvas.client_height() as f64 * dpr) as u32;
                canvas.set_width(width);
                canvas.set_height(height);

                match init_renderer(canvas, width, height).await {
                    Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                    Err(e) => log::error!("Renderer unavailable, continuing without: {}", e),
                }
            }
            None => log::error!("No #canvas element, continuing without rendering"),
        }

        setup_input_handlers(&window, game.clone());

        request_animation_frame(game);

        log::info!("Gap Flyer running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Held keys auto-repeat, so holding jump keeps jumping
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let key_event = g.keys.key_event(&event.key());
            g.pending.push(key_event);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.step.step()
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use std::path::Path;

    use gap_flyer::platform::FrameLimiter;
    use gap_flyer::sim::{Autopilot, GameEvent, GamePhase, GameState, tick};
    use gap_flyer::ui::{HudLine, hud_lines};
    use gap_flyer::{Settings, Tuning};

    /// Runs played before the demo exits
    const DEMO_RUNS: u32 = 3;
    /// A run still going after this many frames is cut short
    const DEMO_MAX_FRAMES: u64 = 60 * 20;

    pub fn run() {
        let settings = Settings::load();
        let tuning = match std::env::var("GAP_FLYER_TUNING") {
            Ok(path) => Tuning::load_or_default(Path::new(&path)),
            Err(_) => Tuning::default(),
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut state = GameState::new(seed, tuning);
        log::info!("Game initialized with seed: {}", state.seed);

        let pilot = Autopilot::new(true);
        let mut limiter = FrameLimiter::new(settings.frame_rate);
        let mut runs = 0;
        let mut run_frames: u64 = 0;
        let mut hud: Vec<HudLine> = Vec::new();

        while runs < DEMO_RUNS {
            let input = pilot.input(&state);
            if state.phase == GamePhase::Playing && run_frames >= DEMO_MAX_FRAMES {
                log::info!("Run {} reached the frame cap", runs + 1);
                state.reset();
                runs += 1;
                run_frames = 0;
                continue;
            }

            for event in tick(&mut state, &input) {
                match event {
                    GameEvent::Crashed { cause } => {
                        runs += 1;
                        log::info!(
                            "Run {} over ({:?}) after {} frames, score {}",
                            runs,
                            cause,
                            run_frames,
                            state.scoreboard.score
                        );
                    }
                    GameEvent::Restarted => run_frames = 0,
                    GameEvent::QuitRequested => return,
                    other => log::debug!("{:?}", other),
                }
            }
            if state.phase == GamePhase::Playing {
                run_frames += 1;
            }

            // Native has no text rendering; the HUD goes to the log when it changes
            let lines = hud_lines(&state, &settings);
            if lines != hud {
                for line in &lines {
                    log::debug!("HUD: {}", line.text);
                }
                hud = lines;
            }

            limiter.wait();
        }

        log::info!(
            "Demo finished: best {}, goal {}",
            state.scoreboard.best,
            state.scoreboard.goal
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gap Flyer (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");
    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
