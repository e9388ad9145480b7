//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

    use rally_pong::renderer::CanvasRenderer;
    use rally_pong::sim::Side;
    use rally_pong::{FrameHandle, FrameHost, Game, MatchConfig, MatchNotifier};

    type WebGame = Game<AnimationFrameHost, CanvasRenderer, AlertNotifier>;

    /// `requestAnimationFrame` / `cancelAnimationFrame`
    struct AnimationFrameHost {
        game: Weak<RefCell<WebGame>>,
    }

    impl FrameHost for AnimationFrameHost {
        fn request_frame(&mut self) -> FrameHandle {
            let game = self.game.clone();
            let id = Rc::new(Cell::new(0));
            let id_in_callback = id.clone();
            let closure = Closure::once(move |_time: f64| {
                if let Some(game) = game.upgrade() {
                    game.borrow_mut()
                        .on_frame(FrameHandle(id_in_callback.get()));
                }
            });

            let requested = web_sys::window()
                .ok_or_else(|| JsValue::from_str("no window"))
                .and_then(|w| w.request_animation_frame(closure.as_ref().unchecked_ref()));
            closure.forget();

            match requested {
                Ok(handle) => {
                    id.set(handle);
                    FrameHandle(handle)
                }
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    // Never matches a real request, so the frame is dropped
                    FrameHandle(-1)
                }
            }
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle.0);
            }
        }
    }

    /// Announces the winner with a browser alert
    struct AlertNotifier;

    impl MatchNotifier for AlertNotifier {
        fn match_over(&mut self, winner: Side) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("{} wins the game!", winner));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Rally Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| JsValue::from_str("no #pong canvas"))?
            .dyn_into()?;

        let config = MatchConfig::load(canvas.width() as f32, canvas.height() as f32);
        let renderer = CanvasRenderer::new(&canvas)?;
        let seed = js_sys::Date::now() as u64;

        let game: Rc<RefCell<WebGame>> = Rc::new_cyclic(|weak| {
            RefCell::new(Game::new(
                config,
                seed,
                AnimationFrameHost { game: weak.clone() },
                renderer,
                AlertNotifier,
            ))
        });

        setup_pointer_input(&canvas, game.clone());
        setup_start_button(&document, game.clone())?;
        setup_color_buttons(&document, &canvas, game.clone());

        // The game owns only a weak handle to itself; keep it alive for the page
        std::mem::forget(game);

        log::info!("Rally Pong ready!");
        Ok(())
    }

    fn setup_pointer_input(canvas: &HtmlCanvasElement, game: Rc<RefCell<WebGame>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().set_player_y(y);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(
        document: &web_sys::Document,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("startBtn") else {
            log::warn!("No #startBtn, game cannot be started");
            return Ok(());
        };
        let btn: HtmlElement = btn.dyn_into()?;

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.toggle();
            btn_clone.set_text_content(Some(g.toggle_label()));
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_color_buttons(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<WebGame>>,
    ) {
        if let Some(btn) = document.get_element_by_id("colorBtn") {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.randomize_player_color();
                let color = g.state().player.color.to_css();
                let _ = canvas.style().set_property("border-color", &color);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("ballColorBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().randomize_ball_color();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use rally_pong::renderer::SceneRecorder;
    use rally_pong::sim::Side;
    use rally_pong::{Game, ManualFrameHost, MatchConfig, MatchNotifier};

    /// Logs the winner
    struct LogNotifier;

    impl MatchNotifier for LogNotifier {
        fn match_over(&mut self, winner: Side) {
            log::info!("{} wins the game!", winner);
        }
    }

    env_logger::init();
    log::info!("Rally Pong (native, headless) starting...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = MatchConfig::load(config_path.as_deref());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(
        config,
        seed,
        ManualFrameHost::new(),
        SceneRecorder::default(),
        LogNotifier,
    );
    game.start();

    /// Give up on endless rallies
    const MAX_FRAMES: u64 = 200_000;

    // Player paddle follows the ball, lagging a few frames behind
    let mut lagged = VecDeque::with_capacity(8);
    loop {
        let due = game.host_mut().take_due();
        if due.is_empty() {
            break;
        }
        if game.state().time_ticks >= MAX_FRAMES {
            log::warn!("No winner after {} frames, stopping", MAX_FRAMES);
            game.stop();
            break;
        }
        for handle in due {
            lagged.push_back(game.state().ball.center_y());
            if lagged.len() > 6 {
                let target = lagged.pop_front().unwrap_or_default();
                game.set_player_y(target);
            }
            game.on_frame(handle);
        }
    }

    match serde_json::to_string_pretty(&game.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize summary: {}", e),
    }
}
