// `data-*` overrides read off the canvas element.
//
// Pure string handling so it can be exercised host-side; the DOM lookup is
// passed in as a closure.

use crate::constants::*;
use badge_core::{BadgeConfig, CameraConfig, SpinDirection, WobbleConfig};

#[derive(Clone, Debug)]
pub struct Overrides {
    pub model_url: String,
    pub config: BadgeConfig,
    /// One line per attribute that was present but unusable.
    pub warnings: Vec<String>,
}

/// Layer attribute overrides on top of `base`. Bad values are skipped with a
/// warning; if the result does not validate, `base` is used unchanged.
pub fn apply_overrides(base: BadgeConfig, lookup: impl Fn(&str) -> Option<String>) -> Overrides {
    let mut warnings = Vec::new();
    let mut config = base.clone();

    let model_url = match lookup(ATTR_MODEL).map(|s| s.trim().to_owned()) {
        Some(url) if !url.is_empty() => url,
        Some(_) => {
            warnings.push(format!("{ATTR_MODEL} is empty, using {DEFAULT_MODEL_URL}"));
            DEFAULT_MODEL_URL.to_owned()
        }
        None => DEFAULT_MODEL_URL.to_owned(),
    };

    if let Some(view) = lookup(ATTR_VIEW) {
        match view.trim().to_ascii_lowercase().as_str() {
            "flat" => config.camera = CameraConfig::default(),
            "oblique" => config.camera = BadgeConfig::showcase().camera,
            other => warnings.push(format!("{ATTR_VIEW}=\"{other}\": expected flat or oblique")),
        }
    }

    if let Some(spin) = lookup(ATTR_SPIN) {
        match spin.parse::<SpinDirection>() {
            Ok(direction) => config.motion.spin_direction = direction,
            Err(e) => warnings.push(format!("{ATTR_SPIN}=\"{spin}\": {e}")),
        }
    }

    if let Some(period) = lookup(ATTR_SPIN_PERIOD) {
        match period.trim().parse::<f64>() {
            Ok(p) if p > 0.0 && p <= MAX_SPIN_PERIOD_SEC => config.motion.spin_period_sec = p,
            _ => warnings.push(format!(
                "{ATTR_SPIN_PERIOD}=\"{period}\": expected seconds in (0, {MAX_SPIN_PERIOD_SEC}]"
            )),
        }
    }

    if let Some(wobble) = lookup(ATTR_WOBBLE) {
        match wobble.trim().to_ascii_lowercase().as_str() {
            "on" | "true" => config.motion.wobble = Some(WobbleConfig::default()),
            "off" | "false" => config.motion.wobble = None,
            other => warnings.push(format!("{ATTR_WOBBLE}=\"{other}\": expected on or off")),
        }
    }

    if let Err(e) = config.validate() {
        warnings.push(format!("overrides rejected: {e}"));
        config = base;
    }

    Overrides {
        model_url,
        config,
        warnings,
    }
}
