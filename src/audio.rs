use hearts_core::{AppContext, AUDIO_FILE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start the background track. If autoplay is refused, one click anywhere on
/// the page retries once.
pub fn start_background_audio(ctx: Rc<RefCell<AppContext>>) -> anyhow::Result<()> {
    let element =
        web::HtmlAudioElement::new_with_src(AUDIO_FILE).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !ctx.borrow_mut().audio.begin() {
        return Ok(());
    }
    spawn_local(async move {
        match play(&element).await {
            Ok(()) => ctx.borrow_mut().audio.on_started(),
            Err(e) => {
                log::debug!("[audio] play() rejected: {:?}", e);
                let wait = ctx.borrow_mut().audio.on_rejected();
                if wait {
                    log::warn!("Autoplay blocked. Waiting for user interaction.");
                    wire_gesture_retry(ctx, element);
                }
            }
        }
    });
    Ok(())
}

async fn play(element: &web::HtmlAudioElement) -> Result<(), wasm_bindgen::JsValue> {
    let promise = element.play()?;
    JsFuture::from(promise).await.map(|_| ())
}

fn wire_gesture_retry(ctx: Rc<RefCell<AppContext>>, element: web::HtmlAudioElement) {
    let Some(body) = crate::dom::window_document().and_then(|d| d.body()) else {
        log::warn!("[audio] no document body; music stays off");
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        if !ctx.borrow_mut().audio.on_gesture() {
            return;
        }
        let ctx = ctx.clone();
        let element = element.clone();
        spawn_local(async move {
            match play(&element).await {
                Ok(()) => ctx.borrow_mut().audio.on_started(),
                Err(e) => {
                    ctx.borrow_mut().audio.on_rejected();
                    log::warn!("[audio] retry after click failed: {:?}", e);
                }
            }
        });
    }) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    _ = body.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
