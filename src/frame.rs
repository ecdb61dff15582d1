use crate::render;
use hearts_core::AppContext;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<AppContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut app = self.app.borrow_mut();
        if !app.tick(dt) {
            return;
        }
        let Some(scene) = app.scene() else {
            return;
        };
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_surface(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<render::SurfaceSetup<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::SurfaceSetup::request(leaked_canvas).await
}

/// Drive `frame` from requestAnimationFrame for the lifetime of the page.
/// The next frame is requested before the current one does any work.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_frame(&tick_clone);
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
