//! Mapping from light values to named uniform writes.
//!
//! A shader program exposes a Phong light as a GLSL struct; its fields are
//! addressed by dotted paths (`"uSun.ambient"`) and struct arrays by
//! bracketed paths (`"uPointLights[2].quadratic"`). The functions here walk
//! a light's fields in a fixed order and hand one write per field to a
//! [`UniformStore`]. No graphics calls happen at this level.

use super::light::{DirectionalLight, Light, PointLight, SpotLight};
use glam::{Mat4, Vec3};

/// Named uniform upload capability, implemented by graphics backends.
///
/// A name the program does not expose (missing, or optimized out by the
/// driver) is not an error: implementations silently skip the write.
pub trait UniformStore {
    /// Upload a scalar uniform.
    fn set_f32(&self, name: &str, value: f32);

    /// Upload a 3-component vector uniform.
    fn set_vec3(&self, name: &str, value: Vec3);

    /// Upload a 4x4 matrix uniform.
    fn set_mat4(&self, name: &str, value: &Mat4);
}

/// Write every field of `light` under `name` using the dotted-path
/// convention (`name.ambient`, `name.diffuse`, ...).
pub fn set_light<S: UniformStore + ?Sized>(store: &S, name: &str, light: &Light) {
    match light {
        Light::Directional(light) => set_directional(store, name, light),
        Light::Point(light) => set_point(store, name, light),
        Light::Spot(light) => set_spot(store, name, light),
    }
}

/// Write a sequence of lights under `name[0]` .. `name[len - 1]`.
///
/// An empty slice writes nothing. The GLSL-side array capacity is not
/// checked here; callers sub-slice to the count they declared in the
/// shader.
pub fn set_lights<S: UniformStore + ?Sized>(store: &S, name: &str, lights: &[Light]) {
    for (index, light) in lights.iter().enumerate() {
        set_light(store, &format!("{}[{}]", name, index), light);
    }
}

/// Write a directional light's fields: the common colors plus `direction`.
pub fn set_directional<S: UniformStore + ?Sized>(
    store: &S,
    name: &str,
    light: &DirectionalLight,
) {
    set_colors(store, name, light.ambient, light.diffuse, light.specular);
    store.set_vec3(&field(name, "direction"), light.direction);
}

/// Write a point light's fields: the common colors plus `position` and the
/// attenuation coefficients.
pub fn set_point<S: UniformStore + ?Sized>(store: &S, name: &str, light: &PointLight) {
    set_colors(store, name, light.ambient, light.diffuse, light.specular);
    store.set_vec3(&field(name, "position"), light.position);
    store.set_f32(&field(name, "constant"), light.constant);
    store.set_f32(&field(name, "linear"), light.linear);
    store.set_f32(&field(name, "quadratic"), light.quadratic);
}

/// Write a spot light's fields: the common colors plus `position`,
/// `direction`, the cone cutoffs, and the attenuation coefficients.
pub fn set_spot<S: UniformStore + ?Sized>(store: &S, name: &str, light: &SpotLight) {
    set_colors(store, name, light.ambient, light.diffuse, light.specular);
    store.set_vec3(&field(name, "position"), light.position);
    store.set_vec3(&field(name, "direction"), light.direction);
    store.set_f32(&field(name, "innerCutoff"), light.inner_cutoff);
    store.set_f32(&field(name, "outerCutoff"), light.outer_cutoff);
    store.set_f32(&field(name, "constant"), light.constant);
    store.set_f32(&field(name, "linear"), light.linear);
    store.set_f32(&field(name, "quadratic"), light.quadratic);
}

/// The color terms shared by every variant.
fn set_colors<S: UniformStore + ?Sized>(
    store: &S,
    name: &str,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
) {
    store.set_vec3(&field(name, "ambient"), ambient);
    store.set_vec3(&field(name, "diffuse"), diffuse);
    store.set_vec3(&field(name, "specular"), specular);
}

fn field(base: &str, member: &str) -> String {
    format!("{}.{}", base, member)
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
