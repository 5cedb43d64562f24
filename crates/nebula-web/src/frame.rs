//! Host scheduling: the `requestAnimationFrame` loop and window listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::dom;
use crate::with_runner;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Tick the runner once per display refresh, forever. The callback re-arms
/// itself; the page teardown drops it.
pub fn start_loop(window: &Window) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let rearm = Rc::clone(&slot);
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        with_runner(|r| r.frame(timestamp));
        if let Some(callback) = rearm.borrow().as_ref() {
            if let Err(err) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::warn!("frame loop stopped: {err:?}");
            }
        }
    }));

    let first = slot.borrow();
    if let Some(callback) = first.as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Window resize regenerates the stars; pointer moves drive planet parallax.
pub fn listen_window(window: &Window) -> Result<(), JsValue> {
    let win = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let viewport = dom::viewport(&win);
        with_runner(|r| r.resize(viewport));
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        with_runner(|r| r.pointer_move(event.client_x() as f32, event.client_y() as f32));
    });
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    Ok(())
}
