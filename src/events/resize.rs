use crate::dom;
use crate::frame::Widget;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-lay out the badge when the window changes size. The steady tick also
/// catches a missed event, so a busy widget just skips this one.
pub fn wire_resize(window: &web::Window, widget: Rc<RefCell<Widget>>) {
    dom::add_listener(window, "resize", move |_| {
        if let Ok(mut w) = widget.try_borrow_mut() {
            w.resize();
        }
    });
}
