#![cfg(target_arch = "wasm32")]
use garden_core::{Animator, BloomScene, GardenConfig, GardenScene, Scene, SceneKind, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;

use canvas::CanvasSurface;
use constants::{CANVAS_ID, LOG_LEVEL};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("garden-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("animation already running");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document, CANVAS_ID)?;
    let (width, height) = dom::size_canvas_to_window(&window, &canvas);
    let ctx = dom::context_2d(&canvas)?;
    let surface = CanvasSurface::new(ctx, width, height);

    // Unseeded: every page load grows a different garden
    let mut rng = rand::thread_rng();
    match dom::scene_kind(&canvas) {
        SceneKind::Bloom => launch(BloomScene::new(width, height, &mut rng), surface),
        SceneKind::Garden => launch(
            GardenScene::generate(width, height, &GardenConfig::default(), &mut rng),
            surface,
        ),
    }
    Ok(())
}

fn launch<Sc: Scene + 'static>(scene: Sc, surface: CanvasSurface) {
    log::info!(
        "[scene] {} {}x{} entities={}",
        scene.name(),
        surface.width(),
        surface.height(),
        scene.entity_count()
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator: Animator::with_default_step(scene),
        surface,
    }));
    frame::start_loop(frame_ctx);
}
