use badge_core::{Viewport, ViewportBox};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current inner window size in CSS pixels.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

/// Take the canvas out of flow so `set_box` positions it against the window.
pub fn pin_fixed(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("margin", "0");
}

pub fn set_box(canvas: &web::HtmlCanvasElement, layout: ViewportBox) {
    let style = canvas.style();
    _ = style.set_property("left", &format!("{:.2}px", layout.left));
    _ = style.set_property("top", &format!("{:.2}px", layout.top));
    _ = style.set_property("width", &format!("{:.2}px", layout.size));
    _ = style.set_property("height", &format!("{:.2}px", layout.size));
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}
