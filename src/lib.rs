#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::frame::Widget;
use crate::host::HostStage;
use badge_core::{layout, BadgeConfig, PresentationController, Stage};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod attrs;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod loader;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("badge-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let overrides = attrs::apply_overrides(BadgeConfig::default(), |name| canvas.get_attribute(name));
    for warning in &overrides.warnings {
        log::warn!("[config] {}", warning);
    }
    let config = overrides.config;

    let host = host::find(&window)?;
    let ratio = layout::pixel_ratio(
        window.device_pixel_ratio(),
        &dom::user_agent(&window),
        &config.display,
    );
    host.set_pixel_ratio(ratio);

    // Show the hero box while the asset streams in.
    let mut stage = HostStage::new(host.clone(), canvas.clone());
    let hero = layout::hero_box(dom::viewport(&window), &config.layout);
    stage.set_canvas_box(hero);
    stage.set_output_size(hero.output_px());

    let controller = PresentationController::new(config)?;
    let widget = Rc::new(RefCell::new(Widget {
        controller,
        stage,
        window: window.clone(),
    }));
    events::wire_hover(&canvas, widget.clone());
    events::wire_resize(&window, widget.clone());

    let started = Instant::now();
    match loader::load_volume(&host, &overrides.model_url).await {
        Ok(volume) => {
            widget.borrow_mut().attach(volume);
            log::info!("[load] ready in {:?}", started.elapsed());
            frame::start_loop(widget);
        }
        Err(e) => widget.borrow_mut().fail(e),
    }
    Ok(())
}
