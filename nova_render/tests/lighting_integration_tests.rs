//! Integration tests for the lighting uniform mapping
//!
//! Exercises the public API the way a backend and a demo would: lights
//! built by the application, uploaded through a UniformStore capability.
//! No GPU required.
//!
//! Run with: cargo test --test lighting_integration_tests

use glam::{Mat4, Vec3};
use nova_render::nova::lighting::{
    set_light, set_lights, DirectionalLight, Light, PointLight, SpotLight, UniformStore,
};
use nova_render::nova::Camera;
use std::cell::RefCell;

// ============================================================================
// TEST STORE IMPLEMENTATION
// ============================================================================

/// Store that records only the paths, in order.
#[derive(Default)]
struct PathStore {
    paths: RefCell<Vec<String>>,
}

impl UniformStore for PathStore {
    fn set_f32(&self, name: &str, _value: f32) {
        self.paths.borrow_mut().push(name.to_string());
    }

    fn set_vec3(&self, name: &str, _value: Vec3) {
        self.paths.borrow_mut().push(name.to_string());
    }

    fn set_mat4(&self, name: &str, _value: &Mat4) {
        self.paths.borrow_mut().push(name.to_string());
    }
}

// ============================================================================
// SCENE-SHAPED USAGE
// ============================================================================

#[test]
fn test_full_scene_upload_shape() {
    // The lighting demo's light rig: one sun, three lamps, one flashlight.
    let store = PathStore::default();

    let sun = DirectionalLight {
        ambient: Vec3::splat(0.1),
        diffuse: Vec3::splat(0.5),
        specular: Vec3::ONE,
        direction: Vec3::splat(-1.0),
    };
    let lamps: Vec<Light> = (0..3).map(|_| Light::Point(PointLight::default())).collect();
    let camera = Camera::new(Vec3::new(-1.0, 0.79, 1.2), -3.2, 309.0, 45.0);
    let flashlight = SpotLight {
        position: camera.position(),
        direction: camera.front(),
        ..SpotLight::default()
    };

    set_light(&store, "uDirectionalLight", &Light::Directional(sun));
    set_lights(&store, "uPointLights", &lamps);
    set_light(&store, "uFlashLight", &Light::Spot(flashlight));

    let paths = store.paths.borrow();
    // 4 directional + 3 * 7 point + 10 spot
    assert_eq!(paths.len(), 35);
    assert_eq!(paths[0], "uDirectionalLight.ambient");
    assert_eq!(paths[4], "uPointLights[0].ambient");
    assert_eq!(paths[24], "uPointLights[2].quadratic");
    assert_eq!(paths[25], "uFlashLight.ambient");
    assert_eq!(paths[34], "uFlashLight.quadratic");
}

#[test]
fn test_flashlight_follows_camera() {
    // Attaching the spot to the camera means copying position/front each
    // frame; verify the values track a camera move.
    let mut camera = Camera::default();
    camera.set_position(Vec3::new(2.0, 0.0, 0.0));
    camera.set_yaw(0.0);

    let flashlight = SpotLight {
        position: camera.position(),
        direction: camera.front(),
        ..SpotLight::default()
    };

    assert_eq!(flashlight.position, Vec3::new(2.0, 0.0, 0.0));
    assert!((flashlight.direction - Vec3::X).length() < 1e-5);
}
