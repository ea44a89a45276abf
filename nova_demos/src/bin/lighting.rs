//! Lighting demo: ten textured containers lit by a directional light,
//! three point lights, and a camera-attached flashlight. Fly with
//! WASD/arrows, Space/LeftCtrl, and drag the left mouse button to look.

use nova_render::glam::{Mat4, Vec3};
use nova_render::lighting::{DirectionalLight, Light, PointLight, SpotLight};
use nova_render::{nova_error, Camera, CameraController, Error, Movement, Result, UniformStore};
use nova_render_opengl::glow::{self, HasContext};
use nova_render_opengl::{GlContext, Mesh, Shader, Texture, Vertex, WindowConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, WindowId};

const SOURCE: &str = "nova::demos::Lighting";

/// Cube with per-face normals and UVs, 4 vertices per face.
const CUBE_VERTICES: [Vertex; 24] = [
    // FRONT
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0], [0.0, 0.0, -1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0], [0.0, 0.0, -1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
    // BACK
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 0.0], [0.0, 0.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 1.0], [0.0, 0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
    // TOP
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0], [0.0, 1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 0.0], [0.0, 1.0, 0.0]),
    // BOTTOM
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 1.0], [0.0, -1.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0], [0.0, -1.0, 0.0]),
    // LEFT
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    // RIGHT
    Vertex::new([0.5, 0.5, 0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0], [1.0, 0.0, 0.0]),
];

const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // front
    4, 5, 6, 6, 7, 4, // back
    8, 9, 10, 10, 11, 8, // top
    12, 13, 14, 14, 15, 12, // bottom
    16, 17, 18, 18, 19, 16, // left
    20, 21, 22, 22, 23, 20, // right
];

const CONTAINER_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const POINT_LIGHT_COUNT: usize = 3;

fn asset(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("res/lighting")
        .join(relative)
}

fn point_lights() -> [PointLight; POINT_LIGHT_COUNT] {
    let base = PointLight {
        ambient: Vec3::splat(0.1),
        diffuse: Vec3::splat(0.5),
        specular: Vec3::ONE,
        ..PointLight::default()
    };
    [
        PointLight {
            position: Vec3::new(0.35, 0.4, -1.0) * 3.0,
            linear: 0.35,
            quadratic: 0.44,
            ..base
        },
        PointLight {
            position: Vec3::new(-1.0, 0.3, 0.25) * 6.0,
            linear: 0.22,
            quadratic: 0.2,
            ..base
        },
        PointLight {
            position: Vec3::new(-1.4, 1.0, -3.3) * 4.0,
            linear: 0.045,
            quadratic: 0.0075,
            ..base
        },
    ]
}

/// Everything created once the window exists.
struct Scene {
    context: GlContext,
    container_shader: Shader,
    light_shader: Shader,
    cube: Mesh,
    diffuse_map: Texture,
    specular_map: Texture,
    camera: Camera,
    controller: CameraController,
    directional: DirectionalLight,
    points: [PointLight; POINT_LIGHT_COUNT],
    flashlight: SpotLight,
    started: Instant,
    last_frame: Instant,
}

impl Scene {
    fn create(event_loop: &ActiveEventLoop) -> Result<Self> {
        let config = WindowConfig {
            title: "Lighting".to_string(),
            ..WindowConfig::default()
        };
        let context = GlContext::create(event_loop, &config)?;
        let gl = context.gl().clone();

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(0.1, 0.1, 0.1, 1.0);
        }

        let container_shader = Shader::from_files(
            gl.clone(),
            asset("vert.glsl"),
            asset("multi_light_phong_frag.glsl"),
        )?;
        let light_shader =
            Shader::from_files(gl.clone(), asset("vert.glsl"), asset("light_frag.glsl"))?;
        let cube = Mesh::new(gl.clone(), &CUBE_VERTICES, &CUBE_INDICES)?;
        let diffuse_map = Texture::from_file(gl.clone(), asset("container.png"))?;
        let specular_map = Texture::from_file(gl, asset("container_specular.png"))?;

        let directional = DirectionalLight {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
            direction: Vec3::splat(-1.0),
        };
        let flashlight = SpotLight {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            inner_cutoff: 15.0_f32.to_radians().cos(),
            outer_cutoff: 20.0_f32.to_radians().cos(),
            linear: 0.7,
            quadratic: 1.8,
            ..SpotLight::default()
        };

        let now = Instant::now();
        Ok(Self {
            context,
            container_shader,
            light_shader,
            cube,
            diffuse_map,
            specular_map,
            camera: Camera::new(Vec3::new(-1.0, 0.79, 1.2), -3.2, 309.0, 45.0),
            controller: CameraController::new(),
            directional,
            points: point_lights(),
            flashlight,
            started: now,
            last_frame: now,
        })
    }

    fn keyboard(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let movement = match code {
            KeyCode::Escape => {
                if event.state == ElementState::Pressed {
                    event_loop.exit();
                }
                return;
            }
            KeyCode::KeyW | KeyCode::ArrowUp => Movement::FORWARD,
            KeyCode::KeyS | KeyCode::ArrowDown => Movement::BACKWARD,
            KeyCode::KeyA | KeyCode::ArrowLeft => Movement::LEFT,
            KeyCode::KeyD | KeyCode::ArrowRight => Movement::RIGHT,
            KeyCode::Space => Movement::UP,
            KeyCode::ControlLeft => Movement::DOWN,
            _ => return,
        };
        match event.state {
            ElementState::Pressed => self.controller.press(movement),
            ElementState::Released => self.controller.release(movement),
        }
    }

    fn mouse_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.controller.begin_drag();
                let window = self.context.window();
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
                window.set_cursor_visible(false);
            }
            ElementState::Released => {
                self.controller.end_drag();
                let window = self.context.window();
                let _ = window.set_cursor_grab(CursorGrabMode::None);
                window.set_cursor_visible(true);
            }
        }
    }

    fn render(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        let time = self.started.elapsed().as_secs_f32();

        self.controller.apply(&mut self.camera, dt);
        // The flashlight rides on the viewpoint.
        self.flashlight.position = self.camera.position();
        self.flashlight.direction = self.camera.front();

        let gl = self.context.gl();
        unsafe {
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let proj = Mat4::perspective_rh_gl(45.0_f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        let view = self.camera.view_matrix();

        // Containers
        self.container_shader.bind();
        self.diffuse_map.bind(0);
        self.specular_map.bind(1);
        self.container_shader.set_i32("uMaterial.diffuse", 0);
        self.container_shader.set_i32("uMaterial.specular", 1);
        self.container_shader.set_f32("uMaterial.shininess", 32.0);
        self.container_shader.set_mat4("uProj", &proj);
        self.container_shader.set_mat4("uView", &view);
        self.container_shader
            .set_vec3("uCamPos", self.camera.position());
        self.container_shader
            .set_light("uDirectionalLight", &Light::Directional(self.directional));
        self.container_shader
            .set_lights("uPointLights", &self.points.map(Light::Point));
        self.container_shader
            .set_i32("uPointLightCount", POINT_LIGHT_COUNT as i32);
        self.container_shader
            .set_light("uFlashLight", &Light::Spot(self.flashlight));

        for (index, position) in CONTAINER_POSITIONS.iter().enumerate() {
            let spin = if (index + 1) % 3 == 0 { time } else { 0.0 };
            let angle = (index as f32 * 20.0).to_radians() + spin;
            let model = Mat4::from_translation(*position)
                * Mat4::from_axis_angle(Vec3::new(1.0, 0.3, 0.5).normalize(), angle);
            self.container_shader.set_mat4("uModel", &model);
            self.cube.draw();
        }

        // Point-light markers
        self.light_shader.bind();
        self.light_shader.set_mat4("uProj", &proj);
        self.light_shader.set_mat4("uView", &view);
        for light in &self.points {
            let model =
                Mat4::from_translation(light.position) * Mat4::from_scale(Vec3::splat(0.2));
            self.light_shader.set_mat4("uModel", &model);
            self.light_shader.set_vec3("color", light.specular);
            self.cube.draw();
        }

        if let Err(err) = self.context.swap_buffers() {
            nova_error!(SOURCE, "swap failed: {}", err);
        }
    }
}

#[derive(Default)]
struct Lighting {
    scene: Option<Scene>,
}

impl ApplicationHandler for Lighting {
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
            WindowEvent::KeyboardInput { event, .. } => scene.keyboard(event_loop, &event),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => scene.mouse_button(state),
            WindowEvent::CursorMoved { position, .. } => {
                scene.controller.cursor_moved(position.x, position.y);
            }
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
    let mut app = Lighting::default();
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
