use rand::rngs::StdRng;
use stardust_core::{
    apply_overrides, build_demo, entropy_seed, fill_instances, key_action, seeded,
    AnimationParams, BlendMode, Camera, Demo, DemoKind, FrameClock, GenerationParams, InputEvent,
    KeyAction, OrbitRig, PointInstance, PointUniforms, POINTS_WGSL, QUAD_CORNERS,
    SCROLL_SECTION_COUNT,
};
use wgpu::util::DeviceExt;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, ModifiersState, NamedKey},
    window::WindowBuilder,
};

mod args;

use args::{normalized_cursor, parse_args, VirtualScroll};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const INITIAL_CAPACITY: usize = 1024;

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x4,
];

const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    glow_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    capacity: usize,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

fn depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<PointInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored as plain hex values, so skip the sRGB encode
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("surface {:?} {}x{}", format, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let glow_pipeline = points_pipeline(&device, &pipeline_layout, &shader, format, false);
        let solid_pipeline = points_pipeline(&device, &pipeline_layout, &shader, format, true);

        Ok(Self {
            window,
            surface,
            depth_view: depth_view(&device, width, height),
            instance_vb: instance_buffer(&device, INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            device,
            queue,
            config,
            glow_pipeline,
            solid_pipeline,
            uniform_buffer,
            quad_vb,
            bind_group,
            width,
            height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = depth_view(&self.device, self.width, self.height);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn render(
        &mut self,
        uniforms: &PointUniforms,
        instances: &[PointInstance],
        demo: &dyn Demo,
    ) -> Result<(), wgpu::SurfaceError> {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_vb.destroy();
            self.instance_vb = instance_buffer(&self.device, self.capacity);
        }
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let clear = demo.clear_color();
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if !instances.is_empty() {
                let pipeline = match demo.blend_mode() {
                    BlendMode::Additive => &self.glow_pipeline,
                    BlendMode::Opaque => &self.solid_pipeline,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
                rpass.draw(0..QUAD_CORNERS.len() as u32, 0..instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn points_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    opaque: bool,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 2]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ];
    let frag_entry = if opaque { "fs_solid" } else { "fs_glow" };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(frag_entry),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: opaque,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(frag_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: if opaque { None } else { Some(ADDITIVE) },
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Demo state plus the input bookkeeping the event loop needs.
struct Session {
    demo: Box<dyn Demo>,
    rng: StdRng,
    clock: FrameClock,
    orbit: Option<OrbitRig>,
    cursor: (f32, f32),
    dragging: bool,
    modifiers: ModifiersState,
    scroll: VirtualScroll,
    instances: Vec<PointInstance>,
}

impl Session {
    fn new(demo: Box<dyn Demo>, rng: StdRng) -> Self {
        let orbit = demo
            .orbit_enabled()
            .then(|| OrbitRig::from_pose(&demo.camera_pose()));
        Self {
            demo,
            rng,
            clock: FrameClock::new(),
            orbit,
            cursor: (0.0, 0.0),
            dragging: false,
            modifiers: ModifiersState::empty(),
            scroll: VirtualScroll::default(),
            instances: Vec::new(),
        }
    }

    fn send(&mut self, event: InputEvent) {
        self.demo.handle_input(&event, &mut self.rng);
    }

    fn on_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Pause => {
                let paused = self.clock.toggle_pause();
                log::info!("{}", if paused { "paused" } else { "resumed" });
            }
            KeyAction::ToggleHint => log::info!("{}", self.demo.hint()),
            other => self.send(InputEvent::Key(other)),
        }
    }

    fn on_cursor(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.dragging {
            if let Some(rig) = self.orbit.as_mut() {
                rig.rotate_by_pixels(x - self.cursor.0, y - self.cursor.1, height);
            }
        }
        self.cursor = (x, y);
        let (cx, cy) = normalized_cursor(x, y, width, height);
        self.send(InputEvent::Cursor { x: cx, y: cy });
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta, viewport_height: f32) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(p) => p.y as f32 / args::LINE_PX,
        };
        if self.demo.kind() == DemoKind::Scroll {
            let offset = self
                .scroll
                .scroll_lines(lines, viewport_height, SCROLL_SECTION_COUNT);
            self.send(InputEvent::Scroll {
                offset,
                viewport_height,
            });
        } else if let Some(rig) = self.orbit.as_mut() {
            rig.zoom(lines);
        }
    }

    fn camera(&self, aspect: f32) -> Camera {
        let pose = self.demo.camera_pose();
        match &self.orbit {
            Some(rig) => Camera::new(rig.eye(), rig.target, pose.fov_degrees, aspect),
            None => Camera::from_pose(&pose, aspect),
        }
    }

    /// Advance one frame and draw it.
    fn frame(&mut self, gpu: &mut GpuState<'_>) -> Result<(), wgpu::SurfaceError> {
        let time = self.clock.tick();
        self.demo.update(time, &mut self.rng);
        if let Some(rig) = self.orbit.as_mut() {
            rig.update();
        }
        fill_instances(&*self.demo, &mut self.instances);
        let uniforms = PointUniforms::new(
            self.camera(gpu.aspect()).view_proj(),
            gpu.width as f32,
            gpu.height as f32,
        );
        gpu.render(&uniforms, &self.instances, &*self.demo)
    }
}

fn key_label(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Named(NamedKey::Space) => Some("Space"),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = parse_args(std::env::args().skip(1));
    let mut generation = GenerationParams::default();
    let mut animation = AnimationParams::default();
    let pairs = cli.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    for e in apply_overrides(&mut generation, &mut animation, pairs) {
        log::warn!("argument rejected: {}", e);
    }
    let seed = cli.seed.unwrap_or_else(entropy_seed);
    log::info!("demo `{}` seed {}", cli.kind, seed);
    let mut rng = seeded(seed);
    let demo = build_demo(cli.kind, generation, animation, &mut rng);
    log::info!("{}", demo.hint());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("stardust: {}", cli.kind))
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut session = Session::new(demo, rng);
    let (w, h) = (state.width as f32, state.height as f32);
    session.send(InputEvent::Resize {
        width: w,
        height: h,
    });
    session.send(InputEvent::Scroll {
        offset: 0.0,
        viewport_height: h,
    });

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                let height = state.height as f32;
                session.send(InputEvent::Resize {
                    width: state.width as f32,
                    height,
                });
                let offset = session.scroll.scroll_px(0.0, height, SCROLL_SECTION_COUNT);
                session.send(InputEvent::Scroll {
                    offset,
                    viewport_height: height,
                });
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::ModifiersChanged(m) => session.modifiers = m.state(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let m = session.modifiers;
                if m.control_key() || m.super_key() || m.alt_key() {
                    return;
                }
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                    return;
                }
                if let Some(action) = key_label(&event.logical_key).and_then(key_action) {
                    session.on_key(action);
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => session.dragging = button_state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => session.on_cursor(
                position.x as f32,
                position.y as f32,
                state.width as f32,
                state.height as f32,
            ),
            WindowEvent::MouseWheel { delta, .. } => session.on_wheel(delta, state.height as f32),
            _ => {}
        },
        Event::AboutToWait => match session.frame(&mut state) {
            Ok(()) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
