//! Shader program wrapper.
//!
//! Compiles and links a vertex/fragment pair and uploads uniforms by name.
//! Uniform locations are resolved once per name and cached; a name the
//! driver does not expose (missing, or optimized out) caches as absent and
//! every write to it is silently skipped. Absent uniforms are not errors.

use glow::HasContext;
use nova_render::lighting::{self, Light};
use nova_render::{nova_error, nova_warn, Error, Result, UniformStore};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::{fs, thread};

const SOURCE: &str = "nova::opengl::Shader";

/// A linked GL program plus its uniform location cache.
pub struct Shader {
    gl: Rc<glow::Context>,
    program: glow::Program,
    locations: RefCell<FxHashMap<String, Option<glow::UniformLocation>>>,
}

impl Shader {
    /// Compile and link a program from in-memory GLSL sources.
    pub fn from_source(
        gl: Rc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self> {
        unsafe {
            let program = gl.create_program().map_err(Error::BackendError)?;

            let vertex = match compile_stage(&gl, glow::VERTEX_SHADER, "vertex", vertex_source) {
                Ok(shader) => shader,
                Err(err) => {
                    gl.delete_program(program);
                    return Err(err);
                }
            };
            let fragment =
                match compile_stage(&gl, glow::FRAGMENT_SHADER, "fragment", fragment_source) {
                    Ok(shader) => shader,
                    Err(err) => {
                        gl.delete_shader(vertex);
                        gl.delete_program(program);
                        return Err(err);
                    }
                };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            // Stage objects are no longer needed once the program links.
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                nova_error!(SOURCE, "program link failed: {}", info_log);
                return Err(Error::ShaderLink(info_log));
            }

            Ok(Self {
                gl,
                program,
                locations: RefCell::new(FxHashMap::default()),
            })
        }
    }

    /// Read the two source files concurrently, then compile and link.
    ///
    /// A file that cannot be read logs a warning and contributes empty
    /// source, which then surfaces as a compile error with the driver's
    /// diagnostic.
    pub fn from_files(
        gl: Rc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let (vertex_source, fragment_source) =
            load_sources(vertex_path.as_ref(), fragment_path.as_ref());
        Self::from_source(gl, &vertex_source, &fragment_source)
    }

    /// Make this program the active one.
    pub fn bind(&self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }

    /// Upload an integer uniform (sampler units, counts).
    pub fn set_i32(&self, name: &str, value: i32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl.uniform_1_i32(Some(&location), value);
            }
        }
    }

    /// Upload one light under `name` (see [`lighting::set_light`]).
    pub fn set_light(&self, name: &str, light: &Light) {
        lighting::set_light(self, name, light);
    }

    /// Upload a light array under `name[0]` .. (see [`lighting::set_lights`]).
    pub fn set_lights(&self, name: &str, lights: &[Light]) {
        lighting::set_lights(self, name, lights);
    }

    /// Resolve a uniform location through the cache. `None` (absent or
    /// optimized out) is cached too so the driver is asked only once.
    fn location(&self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(cached) = self.locations.borrow().get(name) {
            return cached.clone();
        }
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        self.locations
            .borrow_mut()
            .insert(name.to_string(), location.clone());
        location
    }
}

impl UniformStore for Shader {
    fn set_f32(&self, name: &str, value: f32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl.uniform_1_f32(Some(&location), value);
            }
        }
    }

    fn set_vec3(&self, name: &str, value: glam::Vec3) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl
                    .uniform_3_f32(Some(&location), value.x, value.y, value.z);
            }
        }
    }

    fn set_mat4(&self, name: &str, value: &glam::Mat4) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.gl.uniform_matrix_4_f32_slice(
                    Some(&location),
                    false,
                    &value.to_cols_array(),
                );
            }
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}

/// Read the vertex and fragment sources on two short-lived worker threads
/// joined before use.
///
/// There is no retry: a failed read logs a warning and yields empty
/// content, matching the demos' log-and-proceed policy.
pub fn load_sources(vertex_path: &Path, fragment_path: &Path) -> (String, String) {
    thread::scope(|scope| {
        let vertex = scope.spawn(|| read_source(vertex_path));
        let fragment = scope.spawn(|| read_source(fragment_path));
        (
            vertex.join().unwrap_or_default(),
            fragment.join().unwrap_or_default(),
        )
    })
}

fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            nova_warn!(SOURCE, "cannot open {}: {}", path.display(), err);
            String::new()
        }
    }
}

fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    stage_name: &str,
    source: &str,
) -> Result<glow::Shader> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(Error::BackendError)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            nova_error!(SOURCE, "{} shader compilation failed: {}", stage_name, info_log);
            return Err(Error::ShaderCompile(info_log));
        }
        Ok(shader)
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
