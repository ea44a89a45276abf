//! Lighting module
//!
//! Phong light variants and the dotted-path uniform mapping that uploads
//! them through a backend's [`UniformStore`].

mod light;
mod uniform;

pub use light::{DirectionalLight, Light, PointLight, SpotLight};
pub use uniform::{
    set_directional, set_light, set_lights, set_point, set_spot, UniformStore,
};
