use crate::constants::{CONTEXT_KIND, SCENE_ATTRIBUTE};
use garden_core::{GardenError, SceneKind};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Match the canvas backing store to the window. Read once at startup; the
/// animations do not follow later resizes.
pub fn size_canvas_to_window(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0).floor()
    };
    let w = read(window.inner_width());
    let h = read(window.inner_height());
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, GardenError> {
    canvas
        .get_context(CONTEXT_KIND)
        .map_err(|e| GardenError::SurfaceUnavailable(format!("{:?}", e)))?
        .ok_or_else(|| GardenError::SurfaceUnavailable("canvas has no 2d context".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| GardenError::SurfaceUnavailable("context is not a 2d context".into()))
}

pub fn scene_kind(canvas: &web::HtmlCanvasElement) -> SceneKind {
    match canvas.get_attribute(SCENE_ATTRIBUTE) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{}; falling back to {}", e, SceneKind::default());
            SceneKind::default()
        }),
        None => SceneKind::default(),
    }
}
