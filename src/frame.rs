use crate::dom;
use crate::host::HostStage;
use badge_core::{BadgeError, BoundingVolume, HoverEvent, PresentationController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Everything the frame callback and the DOM listeners share.
pub struct Widget {
    pub controller: PresentationController,
    pub stage: HostStage,
    pub window: web::Window,
}

impl Widget {
    pub fn attach(&mut self, volume: BoundingVolume) {
        let viewport = dom::viewport(&self.window);
        self.controller.attach(volume, viewport, &mut self.stage);
    }

    pub fn fail(&mut self, error: BadgeError) {
        self.controller.fail_load(error);
    }

    pub fn frame(&mut self, now_ms: f64) {
        let viewport = dom::viewport(&self.window);
        self.controller.tick(now_ms, viewport, &mut self.stage);
    }

    pub fn resize(&mut self) {
        let viewport = dom::viewport(&self.window);
        self.controller.resize(viewport, &mut self.stage);
    }

    pub fn hover(&mut self, event: HoverEvent) {
        self.controller.pointer(event);
    }
}

/// Drive `widget` from `requestAnimationFrame` until the page goes away.
pub fn start_loop(widget: Rc<RefCell<Widget>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        match widget.try_borrow_mut() {
            Ok(mut w) => w.frame(now_ms),
            Err(_) => log::debug!("frame skipped: widget busy"),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
