/*!
# Nova Render

Core types for the Nova rendering demos.

This crate is platform-agnostic: it knows nothing about OpenGL. It holds
the camera orientation model, the Phong light value types, the uniform
path mapping, and the capability trait a graphics backend implements to
receive named uniform writes. Backend implementations live in sibling
crates (currently `nova_render_opengl`).

## Architecture

- **Camera**: pitch/yaw orientation model deriving an orthonormal basis
  and a view matrix
- **CameraController**: explicit input state (movement flags, drag
  tracking) applied to a Camera once per frame
- **Light** and the `set_light`/`set_lights` mapping: Phong light variants
  walked field-by-field into dotted/bracketed uniform paths
- **UniformStore**: named uniform upload capability; backends resolve the
  names and silently skip the ones the program does not expose
*/

// Internal modules
mod error;
pub mod camera;
pub mod lighting;
pub mod log;

// Main nova namespace module
pub mod nova {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{Camera, CameraController, Movement};

    // Lighting sub-module with the light types and the uniform mapping
    pub mod lighting {
        pub use crate::lighting::*;
    }

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: nova_* macros are exported at the crate root by #[macro_export]
    }
}

// Flat re-exports for the common types
pub use camera::{Camera, CameraController, Movement};
pub use error::{Error, Result};
pub use lighting::{
    set_light, set_lights, DirectionalLight, Light, PointLight, SpotLight, UniformStore,
};

// Re-export math library at crate root
pub use glam;
