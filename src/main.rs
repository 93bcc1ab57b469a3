//! Ponyo Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop: the
//! browser build draws on a canvas, the native build plays in the terminal.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use ponyo_jump::sim::{GameEvent, GameState};

/// Drain and log the events raised since the last frame
fn log_events(state: &mut GameState) {
    for event in state.drain_events() {
        match event {
            GameEvent::Bounce => log::trace!("Bounce at y={:.1}", state.player.pos.y),
            GameEvent::PlatformRecycled => log::trace!("Platform recycled"),
            GameEvent::GameOver => log::info!("Final score: {}", state.score),
            GameEvent::Restarted => log::info!("New run started"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent, TouchList};

    use ponyo_jump::Tuning;
    use ponyo_jump::platform::{FrameClock, key_from_code};
    use ponyo_jump::renderer::{CanvasSurface, Hud, SpriteImages, draw_frame};
    use ponyo_jump::sim::{Controls, GameState, InputEvent, tick};

    /// Element ids in the host page
    const CANVAS_ID: &str = "board";
    const SCORE_ID: &str = "score-display";
    const GAME_OVER_ID: &str = "game-over-msg";
    /// Class that hides an element
    const HIDDEN_CLASS: &str = "d-none";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        controls: Controls,
        clock: FrameClock,
        surface: CanvasSurface,
        /// HUD as last written to the DOM
        hud: Option<Hud>,
    }

    impl Game {
        fn handle_input(&mut self, event: InputEvent) {
            self.controls.handle(&mut self.state, event);
            super::log_events(&mut self.state);
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            for _ in 0..self.clock.advance(time) {
                tick(&mut self.state);
            }
            super::log_events(&mut self.state);
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&self.state, &mut self.surface);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = Hud::from_state(&self.state);
            if self.hud.as_ref() == Some(&hud) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id(SCORE_ID) {
                el.set_text_content(Some(&hud.score_text));
            }

            if let Some(el) = document.get_element_by_id(GAME_OVER_ID) {
                let classes = el.class_list();
                let _ = if hud.game_over_visible {
                    classes.remove_1(HIDDEN_CLASS)
                } else {
                    classes.add_1(HIDDEN_CLASS)
                };
            }

            self.hud = Some(hud);
        }
    }

    /// Read optional tuning overrides from the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid data-tuning ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ponyo Jump starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = load_tuning(&canvas);
        let images = SpriteImages::load().expect("Failed to create sprite images");
        let surface =
            CanvasSurface::new(&canvas, &tuning, images).expect("Failed to get 2d context");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_tuning(seed, tuning),
            controls: Controls::new(),
            clock: FrameClock::new(),
            surface,
            hud: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ponyo Jump running!");
    }

    /// Horizontal position of the first point in a touch list
    fn first_page_x(touches: &TouchList) -> f32 {
        touches.get(0).map(|t| t.page_x() as f32).unwrap_or(0.0)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let document = web_sys::window().unwrap().document().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_code(&event.code()) {
                    game.borrow_mut().handle_input(InputEvent::KeyDown(key));
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (remember where the swipe began)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let touches = event.touches();
                game.borrow_mut().handle_input(InputEvent::TouchStart {
                    touches: touches.length() as usize,
                    x: first_page_x(&touches),
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end (swipe direction picks the heading)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let changed = event.changed_touches();
                game.borrow_mut().handle_input(InputEvent::TouchEnd {
                    changed: changed.length() as usize,
                    x: first_page_x(&changed),
                });
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
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
            g.update(time);
            g.render();
            g.update_hud();
        }

        // Re-arm even after game over so the restart key keeps working
        request_animation_frame(game);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal_game {
    use std::io::{self, Stdout, stdout};
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use crossterm::{
        cursor,
        event::{self, Event, KeyCode, KeyEventKind},
        execute, terminal,
    };

    use ponyo_jump::platform::FrameClock;
    use ponyo_jump::renderer::{CellBuffer, Hud, draw_frame};
    use ponyo_jump::sim::{Controls, GameState, InputEvent, Key, tick};

    /// Roughly one display refresh at 60 Hz
    const FRAME_DUR: Duration = Duration::from_micros(16_667);

    fn key_from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
            KeyCode::Char(' ') => Some(Key::Confirm),
            _ => None,
        }
    }

    pub fn run() -> io::Result<()> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut state = GameState::new(seed);
        log::info!("Game initialized with seed: {}", seed);

        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )?;

        let result = game_loop(&mut out, &mut state);

        // Restore the terminal even when the loop failed
        execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn game_loop(out: &mut Stdout, state: &mut GameState) -> io::Result<()> {
        let mut controls = Controls::new();
        let mut clock = FrameClock::new();
        let mut cells = CellBuffer::for_board(&state.tuning);
        let started = Instant::now();

        loop {
            let frame_start = Instant::now();

            // Input
            while event::poll(Duration::ZERO)? {
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    code => {
                        if let Some(key) = key_from_code(code) {
                            controls.handle(state, InputEvent::KeyDown(key));
                        }
                    }
                }
            }

            // Update
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            for _ in 0..clock.advance(now_ms) {
                tick(state);
            }
            super::log_events(state);

            // Render
            draw_frame(state, &mut cells);
            cells.present(out, &Hud::from_state(state))?;

            // Frame pacing
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DUR {
                std::thread::sleep(FRAME_DUR - elapsed);
            }
        }
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
    log::info!("Ponyo Jump (terminal) starting...");

    if let Err(e) = terminal_game::run() {
        log::error!("Terminal error: {}", e);
        eprintln!("ponyo-jump: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
