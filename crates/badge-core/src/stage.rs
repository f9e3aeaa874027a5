use crate::framing::CameraPose;
use crate::idle::AssetTransform;
use crate::layout::ViewportBox;
use crate::lighting::LightState;

/// Everything the controller writes to the outside world each tick.
///
/// The implementor owns the canvas, renderer, camera, lights and asset
/// pivot; the controller only borrows it for the duration of a call.
pub trait Stage {
    /// Position and size the canvas element (CSS pixels).
    fn set_canvas_box(&mut self, layout: ViewportBox);
    /// Square renderer output size in pixels.
    fn set_output_size(&mut self, px: u32);
    fn apply_camera(&mut self, pose: &CameraPose);
    fn apply_lights(&mut self, lights: &LightState);
    fn apply_asset_transform(&mut self, transform: &AssetTransform);
    fn render(&mut self);
}
