use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store matched to its CSS size on window resize.
/// `on_resize` runs after the canvas has been resized.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, mut on_resize: impl FnMut() + 'static) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
        on_resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// `data-demo` on the canvas, if present.
pub fn canvas_demo_attr(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.dataset().get("demo")
}

/// Make the page tall enough to scroll through `sections` viewports.
pub fn set_page_sections(document: &web::Document, sections: usize) {
    if let Some(body) = document.body() {
        let style = format!("margin:0;height:{}vh", sections * 100);
        _ = body.set_attribute("style", &style);
    }
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32
}

pub fn scroll_offset() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
