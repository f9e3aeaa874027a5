use crate::host::BadgeHost;
use badge_core::{BadgeError, BoundingVolume};
use glam::Vec3;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Ask the host to load `url` and wait for the asset's bounds.
///
/// Any rejection or malformed payload becomes a single `LoadFailure`.
pub async fn load_volume(host: &BadgeHost, url: &str) -> Result<BoundingVolume, BadgeError> {
    log::info!("[load] {}", url);
    let on_progress = Closure::wrap(Box::new(move |loaded: f64, total: f64| {
        if total > 0.0 {
            log::debug!("[load] {:.0}%", (loaded / total * 100.0).min(100.0));
        }
    }) as Box<dyn FnMut(f64, f64)>);

    let settled = JsFuture::from(host.load_asset(url, on_progress.as_ref())).await;
    // The loader stops reporting progress once its promise settles.
    drop(on_progress);

    let bounds = settled.map_err(|e| BadgeError::LoadFailure(describe(&e)))?;
    let min = read_vec3(&bounds, "min")?;
    let max = read_vec3(&bounds, "max")?;
    let volume = BoundingVolume::new(min, max)
        .map_err(|e| BadgeError::LoadFailure(format!("{url}: {e}")))?;
    Ok(volume.recentered())
}

fn read_vec3(bounds: &JsValue, key: &str) -> Result<Vec3, BadgeError> {
    let field = js_sys::Reflect::get(bounds, &JsValue::from_str(key))
        .map_err(|e| BadgeError::LoadFailure(describe(&e)))?;
    let array = field
        .dyn_into::<js_sys::Array>()
        .map_err(|_| BadgeError::LoadFailure(format!("bounds.{key} is not an array")))?;
    let mut out = [0.0_f32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = array
            .get(i as u32)
            .as_f64()
            .ok_or_else(|| BadgeError::LoadFailure(format!("bounds.{key}[{i}] is not a number")))?
            as f32;
    }
    Ok(Vec3::from_array(out))
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
