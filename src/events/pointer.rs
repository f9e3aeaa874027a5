use crate::dom;
use crate::frame::Widget;
use badge_core::HoverEvent;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pause idle spin while the pointer is over the canvas.
pub fn wire_hover(canvas: &web::HtmlCanvasElement, widget: Rc<RefCell<Widget>>) {
    for (name, event) in [
        ("pointerenter", HoverEvent::Enter),
        ("pointerleave", HoverEvent::Leave),
    ] {
        let widget = widget.clone();
        dom::add_listener(canvas, name, move |_| match widget.try_borrow_mut() {
            Ok(mut w) => w.hover(event),
            Err(_) => log::debug!("[hover] dropped {:?}: widget busy", event),
        });
    }
}
