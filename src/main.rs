//! Fairway entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use fairway::audio::{AudioManager, SoundEffect};
    use fairway::city::{CityInput, CityOutcome, CityState, city_tick};
    use fairway::consts::*;
    use fairway::renderer::{RenderState, city_scene, colors, golf_scene};
    use fairway::sim::{
        GameEvent, GamePhase, GameState, Shot, TickInput, course_par, default_course, tick,
    };
    use fairway::{BestRounds, Settings, Tuning, field_bounds};
    use glam::Vec2;

    /// City mode world extent (the toy keeps its original layout)
    const CITY_WORLD: Vec2 = Vec2::new(1200.0, 800.0);

    /// Which toy the shell is running
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Golf,
        City,
    }

    /// Game instance holding all state
    struct Game {
        mode: Mode,
        state: GameState,
        tuning: Tuning,
        city: CityState,
        render_state: Option<RenderState>,
        accumulator: f32,
        city_accumulator: f32,
        last_time: f64,
        input: TickInput,
        city_input: CityInput,
        /// In-progress drag gesture (press point in world coords)
        drag_start: Option<Vec2>,
        cursor: Vec2,
        canvas_size: (f32, f32),
        audio: AudioManager,
        settings: Settings,
        best_rounds: BestRounds,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase for auto-save
        last_phase: GamePhase,
    }

    impl Game {
        fn new(mode: Mode, tuning: Tuning, seed: u64) -> Self {
            Self {
                mode,
                state: GameState::new(default_course()),
                tuning,
                city: CityState::new(seed),
                render_state: None,
                accumulator: 0.0,
                city_accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                city_input: CityInput::default(),
                drag_start: None,
                cursor: Vec2::ZERO,
                canvas_size: (1.0, 1.0),
                audio: AudioManager::new(),
                settings: Settings::load(),
                best_rounds: BestRounds::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Aiming,
            }
        }

        fn world(&self) -> Vec2 {
            match self.mode {
                Mode::Golf => field_bounds(),
                Mode::City => CITY_WORLD,
            }
        }

        fn set_canvas_size(&mut self, w: f32, h: f32) {
            self.canvas_size = (w.max(1.0), h.max(1.0));
        }

        /// Convert canvas client coordinates to world coordinates,
        /// undoing the renderer's letterboxing
        fn canvas_to_world(&self, x: f32, y: f32) -> Vec2 {
            let (w, h) = self.canvas_size;
            let world = self.world();
            let screen_aspect = w / h;
            let world_aspect = world.x / world.y;

            let (sx, sy) = if screen_aspect > world_aspect {
                (world_aspect / screen_aspect, 1.0)
            } else {
                (1.0, screen_aspect / world_aspect)
            };

            let ndc_x = (x / w * 2.0 - 1.0) / sx;
            let ndc_y = (1.0 - y / h * 2.0) / sy;
            Vec2::new(
                (ndc_x + 1.0) / 2.0 * world.x,
                (1.0 - ndc_y) / 2.0 * world.y,
            )
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);

            match self.mode {
                Mode::Golf => {
                    self.accumulator += dt;
                    let mut substeps = 0;
                    while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        let input = self.input.clone();
                        tick(&mut self.state, &input, &self.tuning, SIM_DT);
                        self.accumulator -= SIM_DT;
                        substeps += 1;

                        // Clear one-shot inputs after processing
                        self.input.shot = None;
                        self.input.pause = false;
                        self.input.skip_hole = false;
                    }
                    self.play_events();
                    self.handle_phase_change();
                }
                Mode::City => {
                    self.city_accumulator += dt;
                    while self.city_accumulator >= CITY_DT {
                        let input = self.city_input;
                        city_tick(&mut self.city, &input, CITY_DT);
                        self.city_accumulator -= CITY_DT;
                        self.city_input = CityInput::default();
                    }
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Turn sim events into sounds
        fn play_events(&mut self) {
            for event in self.state.drain_events() {
                let effect = match event {
                    GameEvent::Stroke => SoundEffect::Stroke,
                    GameEvent::WallBounce => SoundEffect::WallBounce,
                    GameEvent::GroundBounce => SoundEffect::GroundBounce,
                    GameEvent::ObstacleHit => SoundEffect::ObstacleKnock,
                    GameEvent::Splash => SoundEffect::Splash,
                    GameEvent::CupSink => SoundEffect::CupSink,
                    GameEvent::CourseFinished => SoundEffect::CourseClear,
                    GameEvent::ClockExpired => SoundEffect::GameOver,
                };
                self.audio.play(effect);
            }
        }

        /// Save, record, or clear on phase transitions
        fn handle_phase_change(&mut self) {
            let current_phase = self.state.phase;
            if current_phase == self.last_phase {
                return;
            }

            match current_phase {
                // Save when a hole is down or the game pauses
                GamePhase::HoleComplete | GamePhase::Paused => self.save_round(),
                GamePhase::Finished => {
                    let par = course_par(&self.state.course);
                    let rank = self.best_rounds.add_round(
                        self.state.total_strokes,
                        par,
                        js_sys::Date::now(),
                    );
                    if let Some(rank) = rank {
                        self.best_rounds.save();
                        log::info!(
                            "Round of {} strokes ranked #{rank}",
                            self.state.total_strokes
                        );
                        if rank == 1 {
                            self.audio.play(SoundEffect::HighScore);
                        }
                    }
                    clear_saved_round();
                }
                GamePhase::GameOver => clear_saved_round(),
                _ => {}
            }
            self.last_phase = current_phase;
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = match self.mode {
                Mode::Golf => {
                    let drag = self.drag_start.map(|press| (press, self.cursor));
                    golf_scene(&self.state, drag, &self.settings)
                }
                Mode::City => city_scene(&self.city),
            };

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let set_value = |selector: &str, value: String| {
                if let Some(el) = document.query_selector(selector).ok().flatten() {
                    el.set_text_content(Some(&value));
                }
            };
            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };

            match self.mode {
                Mode::Golf => {
                    let hole_count = self.state.course.holes.len();
                    set_value(
                        "#hud-hole .hud-value",
                        format!("{}/{}", self.state.hole_index + 1, hole_count),
                    );
                    set_value("#hud-par .hud-value", self.state.hole().par.to_string());
                    set_value("#hud-strokes .hud-value", self.state.strokes.to_string());
                    set_value("#hud-total .hud-value", self.state.total_strokes.to_string());
                    set_value("#hud-clock .hud-value", self.state.clock_secs().to_string());
                    if self.settings.show_fps {
                        set_value("#hud-fps .hud-value", self.fps.to_string());
                    }

                    show("aim-prompt", self.state.phase == GamePhase::Aiming);
                    show("pause-menu", self.state.phase == GamePhase::Paused);
                    show("game-over", self.state.phase == GamePhase::GameOver);
                    show("course-complete", self.state.phase == GamePhase::Finished);

                    if self.state.phase == GamePhase::Finished {
                        set_value("#final-strokes", self.state.total_strokes.to_string());
                        if let Some(best) = self.best_rounds.best() {
                            set_value("#best-strokes", best.to_string());
                        }
                    }
                }
                Mode::City => {
                    set_value("#hud-social .hud-value", self.city.social_index.to_string());
                    set_value(
                        "#hud-pollution .hud-value",
                        (self.city.pollution as i64).to_string(),
                    );
                    set_value(
                        "#hud-tax .hud-value",
                        format!("${}", self.city.tax_income as i64),
                    );
                    set_value(
                        "#hud-time .hud-value",
                        (self.city.time_left.max(0.0) as i64).to_string(),
                    );
                    for (i, zone) in self.city.zones.iter().enumerate() {
                        set_value(
                            &format!("#zone-{i} .hud-value"),
                            format!("{} | Demand: {} | Capacity: {}", zone.name, zone.demand, zone.capacity),
                        );
                    }

                    show("city-won", self.city.outcome == Some(CityOutcome::Won));
                    show("city-lost", self.city.outcome == Some(CityOutcome::Lost));
                }
            }
        }

        /// Save round state to LocalStorage
        fn save_round(&self) {
            if let Ok(json) = serde_json::to_string(&self.state) {
                if let Some(storage) = web_sys::window()
                    .and_then(|w| w.local_storage().ok())
                    .flatten()
                {
                    let _ = storage.set_item("fairway_save", &json);
                    log::info!("Round saved (hole {})", self.state.hole_index + 1);
                }
            }
        }

        /// Reset golf state for a fresh round
        fn restart(&mut self) {
            self.state = GameState::new(default_course());
            self.accumulator = 0.0;
            self.input = TickInput::default();
            self.drag_start = None;
            self.last_phase = GamePhase::Aiming;
        }

        /// Load golf state from saved data
        fn load_state(&mut self, state: GameState) {
            self.last_phase = state.phase;
            self.state = state;
            self.accumulator = 0.0;
            self.input = TickInput::default();
        }
    }

    /// Load saved round from LocalStorage
    fn load_saved_round() -> Option<GameState> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item("fairway_save").ok()??;
        serde_json::from_str(&json).ok()
    }

    /// Clear saved round from LocalStorage
    fn clear_saved_round() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item("fairway_save");
            log::info!("Saved round cleared");
        }
    }

    /// Pull one query parameter out of `window.location.search`
    fn query_param(key: &str) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        let search = search.strip_prefix('?')?;
        for pair in search.split('&') {
            if let Some((k, v)) = pair.split_once('=') {
                if k == key {
                    return Some(v.to_string());
                }
            }
        }
        None
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Fairway starting...");

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
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Mode and variant from the query string
        let mode = match query_param("game").as_deref() {
            Some("city") => Mode::City,
            _ => Mode::Golf,
        };
        let tuning = query_param("variant")
            .as_deref()
            .and_then(Tuning::preset)
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(mode, tuning, seed)));
        game.borrow_mut()
            .set_canvas_size(client_w as f32, client_h as f32);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (world, clear) = match mode {
            Mode::Golf => (field_bounds(), colors::FAIRWAY),
            Mode::City => (CITY_WORLD, colors::CITY_BG),
        };
        let render_state = RenderState::new(surface, &adapter, width, height, world, clear).await;
        game.borrow_mut().render_state = Some(render_state);

        // Check for a saved round (golf only)
        let saved_round = if mode == Mode::Golf {
            load_saved_round()
        } else {
            None
        };
        let has_save = saved_round.is_some();

        if let Some(ref save) = saved_round {
            if let Some(el) = document.get_element_by_id("continue-prompt") {
                let _ = el.set_attribute("class", "");
            }
            if let Some(el) = document.get_element_by_id("continue-hole") {
                el.set_text_content(Some(&(save.hole_index + 1).to_string()));
            }
            if let Some(el) = document.get_element_by_id("continue-strokes") {
                el.set_text_content(Some(&save.total_strokes.to_string()));
            }
            log::info!("Found saved round at hole {}", save.hole_index + 1);
        }

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Set up restart / pause / continue buttons
        setup_buttons(game.clone());

        // Set up continue prompt buttons
        setup_continue_prompt(game.clone(), saved_round);

        // Set up auto-pause on visibility change
        setup_auto_pause(game.clone());

        // Show HUD (unless we're showing continue prompt)
        let hud_id = match mode {
            Mode::Golf => "hud",
            Mode::City => "city-hud",
        };
        if let Some(hud) = document.get_element_by_id(hud_id) {
            if !has_save {
                let _ = hud.set_attribute("class", "");
            }
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Fairway running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - start a drag
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.set_canvas_size(w, h);
                let pos = g.canvas_to_world(event.offset_x() as f32, event.offset_y() as f32);
                g.cursor = pos;
                if g.mode == Mode::Golf && g.state.phase == GamePhase::Aiming {
                    g.drag_start = Some(pos);
                }
                // Browsers require a gesture before audio can start
                g.audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - track the cursor for the aim guide
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.set_canvas_size(w, h);
                g.cursor = g.canvas_to_world(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - complete the drag into a shot
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.set_canvas_size(w, h);
                let release = g.canvas_to_world(event.offset_x() as f32, event.offset_y() as f32);
                if let Some(press) = g.drag_start.take() {
                    g.input.shot = Some(Shot { press, release });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move / end mirror the mouse path
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let w = canvas_clone.client_width() as f32;
                    let h = canvas_clone.client_height() as f32;
                    g.set_canvas_size(w, h);
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let pos = g.canvas_to_world(x, y);
                    g.cursor = pos;
                    if g.mode == Mode::Golf && g.state.phase == GamePhase::Aiming {
                        g.drag_start = Some(pos);
                    }
                    g.audio.resume();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    g.cursor = g.canvas_to_world(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                // touchend has no coordinates; the last tracked cursor is
                // the release point
                let release = g.cursor;
                if let Some(press) = g.drag_start.take() {
                    g.input.shot = Some(Shot { press, release });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match g.mode {
                    Mode::Golf => match event.key().as_str() {
                        "Escape" | "p" | "P" => g.input.pause = true,
                        "+" | "=" => g.input.skip_hole = true, // Debug: next hole
                        "r" | "R" => {
                            if matches!(
                                g.state.phase,
                                GamePhase::GameOver | GamePhase::Finished
                            ) {
                                g.restart();
                                clear_saved_round();
                            }
                        }
                        _ => {}
                    },
                    Mode::City => {
                        let over = g.city.outcome.is_some();
                        match event.key().as_str() {
                            "r" | "R" => {
                                if over {
                                    g.city = g.city.restart();
                                } else {
                                    g.city_input.invest_residential = true;
                                }
                            }
                            "c" | "C" => g.city_input.invest_commercial = true,
                            "i" | "I" => g.city_input.invest_industrial = true,
                            "t" | "T" => g.city_input.raise_capacity = true,
                            "p" | "P" => g.city_input.clean_pollution = true,
                            _ => {}
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
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
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Restart buttons (game over and course complete overlays)
        for id in ["restart-btn", "play-again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.restart();
                    clear_saved_round();
                    log::info!("Round restarted");
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Resume button on the pause menu
        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pause = true; // Toggle back to play
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Save & Quit button
        if let Some(btn) = document.get_element_by_id("save-quit-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let g = game.borrow();
                g.save_round();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_continue_prompt(game: Rc<RefCell<Game>>, saved_round: Option<GameState>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let hide_prompt_show_hud = || {
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("continue-prompt") {
                let _ = el.set_attribute("class", "hidden");
            }
            if let Some(el) = document.get_element_by_id("hud") {
                let _ = el.set_attribute("class", "");
            }
        };

        // Continue button
        if let Some(btn) = document.get_element_by_id("continue-btn") {
            let game = game.clone();
            let saved = saved_round.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(ref state) = saved {
                    game.borrow_mut().load_state(state.clone());
                    log::info!("Loaded saved round at hole {}", state.hole_index + 1);
                }
                hide_prompt_show_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // New Game button
        if let Some(btn) = document.get_element_by_id("new-game-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                clear_saved_round();
                game.borrow_mut().restart();
                hide_prompt_show_hud();
                log::info!("Started a fresh round");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.mode == Mode::Golf
                        && matches!(g.state.phase, GamePhase::Aiming | GamePhase::Rolling)
                    {
                        g.input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
                if g.mode == Mode::Golf
                    && matches!(g.state.phase, GamePhase::Aiming | GamePhase::Rolling)
                {
                    g.input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fairway (native) starting...");
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    // Run tests
    println!("\nRunning physics smoke test...");
    smoke_test_physics();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_physics() {
    use fairway::consts::SIM_DT;
    use fairway::sim::{Ball, Cup, cup_captures, step};
    use fairway::{Tuning, field_bounds};
    use glam::Vec2;

    let tuning = Tuning::links();

    // A ball pressed into the left wall must come back out
    let mut ball = Ball::at(Vec2::new(5.0, 300.0));
    ball.height = 10.0;
    ball.vel = Vec2::new(-50.0, 0.0);
    for _ in 0..8 {
        step(&mut ball, &tuning, field_bounds(), SIM_DT);
    }
    assert!(ball.vel.x > 0.0, "wall should reflect the ball");
    assert!(ball.pos.x >= ball.radius);

    // A resting ball on the cup is captured
    let cup = Cup::at(400.0, 300.0);
    assert!(cup_captures(&Ball::at(cup.pos), &cup));

    println!("✓ Physics smoke test passed!");
}
