use crate::dom;
use crate::frame::App;
use crate::input::{self, PointerState};
use glam::Vec2;
use stardust_core::InputEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<App>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        (canvas.width(), canvas.height()),
    )
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    // pointerdown starts an orbit drag
    {
        let pointer = w.pointer.clone();
        let canvas = w.canvas.clone();
        listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas);
            pointer.borrow_mut().press(pos.x, pos.y);
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        });
    }

    // pointermove: drag delta to the orbit rig, position to the demo
    {
        let pointer = w.pointer.clone();
        let app = w.app.clone();
        let canvas = w.canvas.clone();
        listen(&window, "pointermove", move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas);
            let drag = pointer.borrow_mut().move_to(pos.x, pos.y);
            let mut app = app.borrow_mut();
            if let (Some(d), Some(rig)) = (drag, app.orbit.as_mut()) {
                rig.rotate_by_pixels(d.x, d.y, canvas.height() as f32);
            }
            let (x, y) =
                input::cursor_centered(pos.x, pos.y, canvas.width() as f32, canvas.height() as f32);
            app.send(InputEvent::Cursor { x, y });
        });
    }

    {
        let pointer = w.pointer.clone();
        listen(&window, "pointerup", move |_ev: web::PointerEvent| {
            pointer.borrow_mut().release();
        });
    }

    // wheel zooms orbiting demos; otherwise the page scrolls
    {
        let app = w.app.clone();
        listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
            if let Some(rig) = app.borrow_mut().orbit.as_mut() {
                rig.zoom(input::wheel_steps(ev.delta_y(), ev.delta_mode()));
                ev.prevent_default();
            }
        });
    }

    {
        let app = w.app.clone();
        listen(&window, "scroll", move |_ev: web::Event| {
            app.borrow_mut().send(InputEvent::Scroll {
                offset: dom::scroll_offset(),
                viewport_height: dom::viewport_height(),
            });
        });
    }
}
