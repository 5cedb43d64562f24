//! DOM plumbing: viewport reads and the planet element sink.

use glam::Vec2;
use nebula_engine::{ElementRect, Planet, PlanetSurface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomRect, HtmlElement, Window};

pub const PLANET_CLASS: &str = "planet dyn";
pub const RING_CLASS: &str = "with-ring";
const PLANET_FILTER: &str = "drop-shadow(0 0 18px rgba(0,255,179,0.35))";

pub fn viewport(window: &Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn element_rect(rect: &DomRect) -> ElementRect {
    ElementRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn px(v: f32) -> String {
    format!("{v}px")
}

/// Absolutely positioned `<div>`s appended to `<body>`, one per planet.
pub struct DomPlanets {
    document: Document,
    elements: Vec<Option<HtmlElement>>,
}

impl DomPlanets {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            elements: Vec::new(),
        }
    }

    fn element(&self, index: usize) -> Option<&HtmlElement> {
        self.elements.get(index).and_then(Option::as_ref)
    }

    fn create(&self, planet: &Planet) -> Result<HtmlElement, JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        el.set_class_name(PLANET_CLASS);
        if planet.ringed {
            el.class_list().add_1(RING_CLASS)?;
        }
        let style = el.style();
        style.set_property("width", &px(planet.size))?;
        style.set_property("height", &px(planet.size))?;
        style.set_property("background", &planet.palette.css_background())?;
        style.set_property("filter", PLANET_FILTER)?;
        style.set_property("z-index", "-1")?;
        el.set_attribute("data-depth", &planet.depth_attr())?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&el)?;
        Ok(el)
    }
}

impl PlanetSurface for DomPlanets {
    fn mount(&mut self, index: usize, planet: &Planet) {
        if self.elements.len() <= index {
            self.elements.resize(index + 1, None);
        }
        match self.create(planet) {
            Ok(el) => self.elements[index] = Some(el),
            Err(err) => log::debug!("planet {index}: not mounted: {err:?}"),
        }
    }

    fn place(&mut self, index: usize, pos: Vec2) {
        if let Some(el) = self.element(index) {
            let style = el.style();
            let _ = style.set_property("left", &px(pos.x));
            let _ = style.set_property("top", &px(pos.y));
        }
    }

    fn shift(&mut self, index: usize, offset: Vec2) {
        if let Some(el) = self.element(index) {
            let transform = format!("translate({}, {})", px(offset.x), px(offset.y));
            let _ = el.style().set_property("transform", &transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formats_like_css() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(-3.5), "-3.5px");
    }
}
