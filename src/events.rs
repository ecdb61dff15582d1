use crate::dom;
use hearts_core::AppContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct DragState {
    pointer: Option<i32>,
    last: (f32, f32),
}

/// Pointer drag orbits the camera, the wheel dollies it. Pan is not wired.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, ctx: Rc<RefCell<AppContext>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let canvas_cap = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if d.pointer.is_some() || ev.button() != 0 {
                return;
            }
            d.pointer = Some(ev.pointer_id());
            d.last = (ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas_cap.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let drag = drag.clone();
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if d.pointer != Some(ev.pointer_id()) {
                return;
            }
            let pos = (ev.client_x() as f32, ev.client_y() as f32);
            let (dx, dy) = (pos.0 - d.last.0, pos.1 - d.last.1);
            d.last = pos;
            if let Some(scene) = ctx.borrow_mut().scene_mut() {
                let height = scene.viewport.height as f32;
                scene.controls.handle_drag(dx, dy, height);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for kind in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas_cap = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if d.pointer == Some(ev.pointer_id()) {
                d.pointer = None;
                _ = canvas_cap.release_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            if let Some(scene) = ctx.borrow_mut().scene_mut() {
                scene.controls.handle_wheel(ev.delta_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        closure.forget();
    }
}

/// Window resize: camera aspect and projection plus the canvas backing store.
/// The GPU surface follows the canvas size on the next frame.
pub fn wire_window_resize(canvas: &web::HtmlCanvasElement, ctx: Rc<RefCell<AppContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::current_viewport(&win);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        if ctx
            .borrow_mut()
            .resize(viewport.width, viewport.height, viewport.pixel_ratio)
        {
            log::debug!(
                "[resize] {}x{} @{}",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio
            );
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
