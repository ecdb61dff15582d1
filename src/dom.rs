use hearts_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS size of the window plus the device pixel ratio.
pub fn current_viewport(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
