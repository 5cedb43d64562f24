//! Reactive glow listeners for nav links, buttons and cards.

use glam::Vec2;
use nebula_engine::systems::glow::{card_sweep, hover_properties};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom::element_rect;

pub const HOVER_TARGETS: &str = ".site-nav a, .btn";
pub const CARD_TARGETS: &str = ".card";

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_properties(el: &HtmlElement, props: &[(&'static str, String)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

fn pointer(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// Per-element `--x`/`--y` on hover, and page-wide `--mx`/`--ang` on cards.
/// Returns the number of hover targets and cards found.
pub fn attach(window: &Window, document: &Document) -> Result<(usize, usize), JsValue> {
    let hover_targets = query_all(document, HOVER_TARGETS);
    for el in &hover_targets {
        let target = el.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = element_rect(&target.get_bounding_client_rect());
            set_properties(&target, &hover_properties(pointer(&event), &rect));
        });
        el.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    let cards = query_all(document, CARD_TARGETS);
    let card_count = cards.len();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let x = event.client_x() as f32;
        for card in &cards {
            let rect = element_rect(&card.get_bounding_client_rect());
            set_properties(card, &card_sweep(x, &rect).properties());
        }
    });
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    Ok((hover_targets.len(), card_count))
}
