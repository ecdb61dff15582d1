use hearts_core::EnvironmentMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode the equirectangular sky into tightly packed RGBA8.
///
/// The image goes through an off-screen 2D canvas; CORS must be `anonymous`
/// or the pixel read-back is refused as tainted.
pub async fn load_environment(
    document: &web::Document,
    url: &str,
) -> anyhow::Result<EnvironmentMap> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("image decode failed: {:?}", e))?;

    let width = img.natural_width();
    let height = img.natural_height();
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let env = EnvironmentMap::from_rgba(width, height, data.data().0)?;
    log::info!("[env] loaded {}x{} from {}", width, height, url);
    Ok(env)
}
