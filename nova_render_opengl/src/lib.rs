/*!
# Nova Render — OpenGL backend

OpenGL 3.3 core implementation of the Nova rendering collaborators:
window + context bootstrap, shader programs with named uniform upload,
textures, and static meshes. Built on `glow` for the GL calls and
`winit`/`glutin` for the window and context.

The [`Shader`] type implements `nova_render::UniformStore`, so the core
crate's light mapping can hand its dotted-path writes straight to a
program. Uniform names the driver does not expose are silently skipped.
*/

mod context;
mod mesh;
mod shader;
mod texture;

pub use context::{GlContext, WindowConfig};
pub use mesh::{Mesh, Vertex};
pub use shader::{load_sources, Shader};
pub use texture::Texture;

// Re-export the GL binding so demos can issue raw calls (clear, state)
pub use glow;
