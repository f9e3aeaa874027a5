use crate::constants::HOST_GLOBAL;
use crate::dom;
use badge_core::{AssetTransform, CameraPose, LightState, Stage, ViewportBox};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Renderer and loader bindings installed by the page as `window.badgeHost`.
#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type BadgeHost;

    /// Resolves with `{ min: [x, y, z], max: [x, y, z] }` once the asset is
    /// in the scene and re-centered on its pivot.
    #[wasm_bindgen(method, js_name = loadAsset)]
    pub fn load_asset(this: &BadgeHost, url: &str, on_progress: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &BadgeHost, ratio: f64);

    #[wasm_bindgen(method, js_name = setOutputSize)]
    pub fn set_output_size(this: &BadgeHost, px: u32);

    #[wasm_bindgen(method, js_name = setCamera)]
    pub fn set_camera(
        this: &BadgeHost,
        position: &[f32],
        target: &[f32],
        up: &[f32],
        near: f32,
        far: f32,
        fov_deg: f32,
        aspect: f32,
    );

    #[wasm_bindgen(method, js_name = setLights)]
    pub fn set_lights(
        this: &BadgeHost,
        key_intensity: f32,
        key_position: &[f32],
        rim_intensity: f32,
        rim_position: &[f32],
        ambient: f32,
        exposure: f32,
    );

    #[wasm_bindgen(method, js_name = setAssetTransform)]
    pub fn set_asset_transform(this: &BadgeHost, yaw: f32, pitch: f32, roll: f32, bob: f32);

    #[wasm_bindgen(method)]
    pub fn render(this: &BadgeHost);
}

pub fn find(window: &web::Window) -> anyhow::Result<BadgeHost> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(HOST_GLOBAL))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        anyhow::bail!("window.{} is not defined", HOST_GLOBAL);
    }
    Ok(value.unchecked_into::<BadgeHost>())
}

/// The page side of the controller: canvas element plus host renderer.
pub struct HostStage {
    host: BadgeHost,
    canvas: web::HtmlCanvasElement,
    output_px: u32,
}

impl HostStage {
    pub fn new(host: BadgeHost, canvas: web::HtmlCanvasElement) -> Self {
        dom::pin_fixed(&canvas);
        Self {
            host,
            canvas,
            output_px: 0,
        }
    }
}

impl Stage for HostStage {
    fn set_canvas_box(&mut self, layout: ViewportBox) {
        dom::set_box(&self.canvas, layout);
    }

    fn set_output_size(&mut self, px: u32) {
        // Resizing the drawing buffer clears it; skip when nothing changed.
        if px != self.output_px {
            self.output_px = px;
            self.host.set_output_size(px);
        }
    }

    fn apply_camera(&mut self, pose: &CameraPose) {
        self.host.set_camera(
            &pose.position.to_array(),
            &pose.target.to_array(),
            &pose.up.to_array(),
            pose.near,
            pose.far,
            pose.fov_y_radians.to_degrees(),
            pose.aspect,
        );
    }

    fn apply_lights(&mut self, lights: &LightState) {
        self.host.set_lights(
            lights.key_intensity,
            &lights.key_position.to_array(),
            lights.rim_intensity,
            &lights.rim_position.to_array(),
            lights.ambient_intensity,
            lights.exposure,
        );
    }

    fn apply_asset_transform(&mut self, t: &AssetTransform) {
        self.host.set_asset_transform(t.yaw, t.pitch, t.roll, t.bob);
    }

    fn render(&mut self) {
        self.host.render();
    }
}
