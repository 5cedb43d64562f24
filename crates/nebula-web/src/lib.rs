//! Browser entry points for the nebula backdrop.
//!
//! ```js
//! import init, { nebula_start } from "./pkg/nebula_web.js";
//! await init();
//! nebula_start();
//! ```
//!
//! After `nebula_start` the crate drives itself: it owns the animation frame
//! loop and its own resize and pointer listeners.

use std::cell::RefCell;

use nebula_engine::BackdropConfig;
use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod dom;
pub mod frame;
pub mod glow;
pub mod runner;

pub use runner::BackdropRunner;

thread_local! {
    static RUNNER: RefCell<Option<BackdropRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. `None` before `nebula_start`.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut BackdropRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Fresh seed per page load.
fn seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (js_sys::Date::now() as u64).rotate_left(32) ^ noise
}

/// Start the backdrop with the default configuration.
#[wasm_bindgen]
pub fn nebula_start() -> Result<(), JsValue> {
    init_logging();
    start(BackdropConfig::default())
}

/// Start the backdrop with a JSON config override. Invalid config falls back
/// to the defaults with a console warning.
#[wasm_bindgen]
pub fn nebula_start_with_config(json: &str) -> Result<(), JsValue> {
    init_logging();
    let config = BackdropConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("nebula: {err}; using defaults");
        BackdropConfig::default()
    });
    start(config)
}

fn start(config: BackdropConfig) -> Result<(), JsValue> {
    if with_runner(|_| ()).is_some() {
        log::warn!("nebula: already started");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let runner = BackdropRunner::new(config, dom::viewport(&window), document.clone(), seed());
    let planets = runner.planet_count();
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    frame::listen_window(&window)?;
    let (hover_targets, cards) = glow::attach(&window, &document)?;
    frame::start_loop(&window)?;

    log::info!(
        "nebula: initialized ({planets} planets, {hover_targets} glow targets, {cards} cards)"
    );
    Ok(())
}

// ---- Data accessors ----

/// Pointer to this frame's star instances (`StarInstance::FLOATS` floats each).
#[wasm_bindgen]
pub fn nebula_star_instances_ptr() -> *const f32 {
    with_runner(|r| r.star_instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn nebula_star_count() -> u32 {
    with_runner(|r| r.star_count()).unwrap_or(0)
}
