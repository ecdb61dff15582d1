#![cfg(target_arch = "wasm32")]
//! Browser front-end: a slowly turning field of glass hearts.
//!
//! All scene state lives in one [`AppContext`] shared by the frame loop and
//! the DOM listeners. Nothing is built until the environment image resolves
//! (or falls back).

use hearts_core::{AppContext, DemoConfig, EnvironmentMap, SceneError, HDRI_URL};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod env_map;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hearts-web starting");

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
    let canvas = dom::canvas_by_id(&document, "app-canvas")?;
    dom::sync_canvas_backing_size(&canvas, &dom::current_viewport(&window));

    let app = Rc::new(RefCell::new(AppContext::new(DemoConfig::default())));

    // Music does not wait for the scene.
    if let Err(e) = audio::start_background_audio(app.clone()) {
        log::warn!("[audio] unavailable: {:?}", e);
    }

    let environment = match env_map::load_environment(&document, HDRI_URL).await {
        Ok(env) => env,
        Err(e) => {
            log::warn!("[env] load failed, using fallback sky: {:?}", e);
            EnvironmentMap::fallback()
        }
    };
    on_environment_ready(window, canvas, app, environment).await
}

async fn on_environment_ready(
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    app: Rc<RefCell<AppContext>>,
    environment: EnvironmentMap,
) -> anyhow::Result<()> {
    if app.borrow().is_ready() {
        log::warn!("duplicate initialization ignored");
        return Ok(());
    }
    let setup = frame::init_surface(&canvas).await?;
    // The window may have changed while the image was in flight.
    let viewport = dom::current_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let gpu = {
        let mut ctx = app.borrow_mut();
        let mut rng = StdRng::from_entropy();
        let scene = match ctx.initialize(environment, viewport, &mut rng) {
            Ok(scene) => scene,
            Err(SceneError::AlreadyInitialized) => {
                log::warn!("duplicate initialization ignored");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        render::GpuState::new(setup, scene)
    };

    events::wire_orbit_input(&canvas, app.clone());
    events::wire_window_resize(&canvas, app.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
