mod pointer;
mod resize;

pub use pointer::wire_hover;
pub use resize::wire_resize;
