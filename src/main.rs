//! DVD Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use dvd_bounce::platform::FrameClock;
    use dvd_bounce::platform::web::CanvasSurface;
    use dvd_bounce::sim::{MotionState, create_state, update_state};

    /// Everything the frame loop owns
    struct App {
        surface: CanvasSurface,
        state: MotionState,
        clock: FrameClock,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            self.surface.fit_to_client();
            let dt = self.clock.tick(time);
            update_state(&mut self.surface, &mut self.state, dt);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("DVD Bounce starting...");

        let surface = CanvasSurface::from_element_id("canvas")?;
        surface.fit_to_client();

        let app = Rc::new(RefCell::new(App {
            surface,
            state: create_state(),
            clock: FrameClock::new(),
        }));

        request_animation_frame(app)?;

        log::info!("DVD Bounce running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);

        if let Err(e) = request_animation_frame(app) {
            log::error!("Frame loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

/// Headless frames simulated by the native host (10 seconds at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dvd_bounce::consts::{BACKGROUND, FOREGROUND};
    use dvd_bounce::platform::FrameClock;
    use dvd_bounce::{PixelSurface, create_state, update_state};

    env_logger::init();
    log::info!("DVD Bounce (native) starting...");
    log::info!("Native mode renders headless - serve the wasm build for the canvas version");
    log::info!("Run with RUST_LOG=trace to see each wall reflection");

    let mut surface = PixelSurface::new(800, 600);
    let mut state = create_state();
    let mut clock = FrameClock::new();

    for frame in 0..NATIVE_FRAMES {
        let time_ms = frame as f64 * 1000.0 / 60.0;
        let dt = clock.tick(time_ms);
        update_state(&mut surface, &mut state, dt);
    }

    log::info!(
        "{} frames at {} fps: {} square pixels, {} background pixels",
        NATIVE_FRAMES,
        clock.fps(),
        surface.count(FOREGROUND),
        surface.count(BACKGROUND)
    );
    match serde_json::to_string(&state) {
        Ok(json) => log::info!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
