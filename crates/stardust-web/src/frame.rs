use crate::render::{self, FrameScene};
use rand::rngs::StdRng;
use stardust_core::{
    fill_instances, Camera, Demo, FrameClock, FrameTime, InputEvent, OrbitRig, PointInstance,
    PointUniforms,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the event closures and the frame loop share.
pub struct App {
    pub demo: Box<dyn Demo>,
    pub rng: StdRng,
    pub clock: FrameClock,
    /// Present only for demos that let the pointer orbit the camera.
    pub orbit: Option<OrbitRig>,
}

impl App {
    pub fn new(demo: Box<dyn Demo>, rng: StdRng) -> Self {
        let orbit = demo
            .orbit_enabled()
            .then(|| OrbitRig::from_pose(&demo.camera_pose()));
        Self {
            demo,
            rng,
            clock: FrameClock::new(),
            orbit,
        }
    }

    pub fn send(&mut self, event: InputEvent) {
        self.demo.handle_input(&event, &mut self.rng);
    }

    fn step(&mut self) -> FrameTime {
        let time = self.clock.tick();
        self.demo.update(time, &mut self.rng);
        if let Some(rig) = self.orbit.as_mut() {
            rig.update();
        }
        time
    }

    fn camera(&self, aspect: f32) -> Camera {
        let pose = self.demo.camera_pose();
        match &self.orbit {
            Some(rig) => Camera::new(rig.eye(), rig.target, pose.fov_degrees, aspect),
            None => Camera::from_pose(&pose, aspect),
        }
    }
}

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<App>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub instances: Vec<PointInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let mut app = self.app.borrow_mut();
        let time = app.step();
        fill_instances(&*app.demo, &mut self.instances);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let (w, h) = gpu.size();
        let camera = app.camera(w as f32 / h.max(1) as f32);
        let scene = FrameScene {
            uniforms: PointUniforms::new(camera.view_proj(), w as f32, h as f32),
            instances: &self.instances,
            blend: app.demo.blend_mode(),
            clear: app.demo.clear_color(),
        };
        drop(app);

        match gpu.render(time.delta, &scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
