#![cfg(target_arch = "wasm32")]
use stardust_core::{
    apply_overrides, build_demo, entropy_seed, seeded, AnimationParams, DemoKind,
    GenerationParams, InputEvent, SCROLL_SECTION_COUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Demo, seed and parameter overrides read from the page.
struct LaunchOptions {
    kind: DemoKind,
    seed: u64,
    generation: GenerationParams,
    animation: AnimationParams,
}

fn read_launch_options(canvas: &web::HtmlCanvasElement) -> LaunchOptions {
    let pairs = input::query_pairs(&dom::location_search());
    let lookup = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let data_demo = dom::canvas_demo_attr(canvas);
    let kind = input::pick_demo(lookup("demo"), data_demo.as_deref());
    let seed = match lookup("seed").map(str::parse::<u64>) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            log::warn!("ignoring unparsable seed");
            entropy_seed()
        }
        None => entropy_seed(),
    };

    let mut generation = GenerationParams::default();
    let mut animation = AnimationParams::default();
    let overrides = pairs
        .iter()
        .filter(|(k, _)| input::is_override(k))
        .map(|(k, v)| (k.as_str(), v.as_str()));
    for e in apply_overrides(&mut generation, &mut animation, overrides) {
        log::warn!("query override rejected: {}", e);
    }
    LaunchOptions {
        kind,
        seed,
        generation,
        animation,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stardust-web starting");

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

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let options = read_launch_options(&canvas);
    log::info!("demo `{}` seed {}", options.kind, options.seed);
    let mut rng = seeded(options.seed);
    let demo = build_demo(
        options.kind,
        options.generation,
        options.animation,
        &mut rng,
    );
    if options.kind == DemoKind::Scroll {
        dom::set_page_sections(&document, SCROLL_SECTION_COUNT);
    }
    overlay::set_text(&document, demo.hint());

    let app = Rc::new(RefCell::new(frame::App::new(demo, rng)));

    // Canvas backing size follows CSS size * devicePixelRatio
    {
        let app = app.clone();
        dom::wire_canvas_resize(&canvas, move || {
            let height = dom::viewport_height();
            let width = web::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0) as f32;
            app.borrow_mut().send(InputEvent::Resize { width, height });
        });
    }
    app.borrow_mut().send(InputEvent::Scroll {
        offset: dom::scroll_offset(),
        viewport_height: dom::viewport_height(),
    });

    events::wire_global_keydown(app.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
        instances: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
