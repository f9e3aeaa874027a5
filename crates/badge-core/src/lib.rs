//! Platform-free core of the badge widget: timeline, layout, framing,
//! lighting and idle motion, driven through [`PresentationController`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod framing;
pub mod idle;
pub mod interaction;
pub mod layout;
pub mod lighting;
pub mod phase;
pub mod stage;

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use easing::*;
pub use error::*;
pub use framing::*;
pub use idle::*;
pub use interaction::*;
pub use layout::*;
pub use lighting::*;
pub use phase::*;
pub use stage::*;
