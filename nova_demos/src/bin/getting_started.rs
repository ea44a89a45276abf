//! Getting-started demo: a spinning textured quad under an orthographic
//! projection. Two textures blend over time; Escape closes the window.

use nova_render::glam::{Mat4, Vec3};
use nova_render::{nova_error, Error, Result, UniformStore};
use nova_render_opengl::glow::{self, HasContext};
use nova_render_opengl::{GlContext, Mesh, Shader, Texture, Vertex, WindowConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

const SOURCE: &str = "nova::demos::GettingStarted";

/// The quad with UVs over the full texture.
const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new([-0.5, 0.5, 0.0], [0.0, 1.0], [0.0, 0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0], [0.0, 0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.0], [1.0, 0.0], [0.0, 0.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.0], [1.0, 1.0], [0.0, 0.0, 1.0]),
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

fn asset(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("res/getting_started")
        .join(relative)
}

/// Everything created once the window exists.
struct Scene {
    context: GlContext,
    shader: Shader,
    quad: Mesh,
    container: Texture,
    face: Texture,
    started: Instant,
}

impl Scene {
    fn create(event_loop: &ActiveEventLoop) -> Result<Self> {
        let config = WindowConfig {
            title: "Getting Started".to_string(),
            ..WindowConfig::default()
        };
        let context = GlContext::create(event_loop, &config)?;
        let gl = context.gl().clone();

        let shader = Shader::from_files(gl.clone(), asset("vert.glsl"), asset("frag.glsl"))?;
        let quad = Mesh::new(gl.clone(), &QUAD_VERTICES, &QUAD_INDICES)?;
        let container = Texture::from_file(gl.clone(), asset("container.png"))?;
        let face = Texture::from_file(gl, asset("awesomeface.png"))?;

        Ok(Self {
            context,
            shader,
            quad,
            container,
            face,
            started: Instant::now(),
        })
    }

    fn render(&self) {
        let gl = self.context.gl();
        unsafe {
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        let time = self.started.elapsed().as_secs_f32();

        self.shader.bind();
        self.container.bind(1);
        self.shader.set_i32("uTexture1", 1);
        self.face.bind(2);
        self.shader.set_i32("uTexture2", 2);
        self.shader.set_f32("uTime", time);

        // Spin with time, scaled up x100 into the 800x600 ortho space.
        let model = Mat4::from_rotation_z(time) * Mat4::from_scale(Vec3::splat(100.0));
        let proj = Mat4::orthographic_rh_gl(-400.0, 400.0, -300.0, 300.0, -1.0, 1.0);
        self.shader.set_mat4("uProj", &proj);
        self.shader.set_mat4("uModel", &model);

        self.quad.draw();

        if let Err(err) = self.context.swap_buffers() {
            nova_error!(SOURCE, "swap failed: {}", err);
        }
    }
}

#[derive(Default)]
struct GettingStarted {
    scene: Option<Scene>,
}

impl ApplicationHandler for GettingStarted {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_none() {
            match Scene::create(event_loop) {
                Ok(scene) => self.scene = Some(scene),
                Err(err) => {
                    nova_error!(SOURCE, "startup failed: {}", err);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => scene.context.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => scene.render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(scene) = &self.scene {
            scene.context.request_redraw();
        }
    }
}

fn run() -> Result<()> {
    let event_loop =
        EventLoop::new().map_err(|err| Error::WindowCreation(err.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = GettingStarted::default();
    event_loop
        .run_app(&mut app)
        .map_err(|err| Error::BackendError(err.to_string()))
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            nova_error!(SOURCE, "{}", err);
            ExitCode::FAILURE
        }
    }
}
