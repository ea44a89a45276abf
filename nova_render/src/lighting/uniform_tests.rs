use super::*;
use crate::lighting::{DirectionalLight, Light, PointLight, SpotLight};
use glam::{Mat4, Vec3};
use std::cell::RefCell;

// ============================================================================
// RECORDING STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Written {
    Scalar(f32),
    Vector(Vec3),
    Matrix(Mat4),
}

/// In-memory store capturing every write in emission order.
#[derive(Default)]
struct RecordingStore {
    writes: RefCell<Vec<(String, Written)>>,
}

impl RecordingStore {
    fn paths(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn value(&self, path: &str) -> Option<Written> {
        self.writes
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, v)| v.clone())
    }

    fn len(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl UniformStore for RecordingStore {
    fn set_f32(&self, name: &str, value: f32) {
        self.writes
            .borrow_mut()
            .push((name.to_string(), Written::Scalar(value)));
    }

    fn set_vec3(&self, name: &str, value: Vec3) {
        self.writes
            .borrow_mut()
            .push((name.to_string(), Written::Vector(value)));
    }

    fn set_mat4(&self, name: &str, value: &Mat4) {
        self.writes
            .borrow_mut()
            .push((name.to_string(), Written::Matrix(*value)));
    }
}

fn sun() -> DirectionalLight {
    DirectionalLight {
        ambient: Vec3::splat(0.1),
        diffuse: Vec3::splat(0.5),
        specular: Vec3::ONE,
        direction: Vec3::splat(-1.0),
    }
}

// ============================================================================
// DIRECTIONAL
// ============================================================================

#[test]
fn test_directional_path_set() {
    let store = RecordingStore::default();
    set_light(&store, "sun", &Light::Directional(sun()));

    assert_eq!(
        store.paths(),
        vec!["sun.ambient", "sun.diffuse", "sun.specular", "sun.direction"]
    );
}

#[test]
fn test_directional_values() {
    let store = RecordingStore::default();
    set_light(&store, "sun", &Light::Directional(sun()));

    assert_eq!(
        store.value("sun.ambient"),
        Some(Written::Vector(Vec3::splat(0.1)))
    );
    assert_eq!(
        store.value("sun.diffuse"),
        Some(Written::Vector(Vec3::splat(0.5)))
    );
    assert_eq!(store.value("sun.specular"), Some(Written::Vector(Vec3::ONE)));
    assert_eq!(
        store.value("sun.direction"),
        Some(Written::Vector(Vec3::splat(-1.0)))
    );
}

// ============================================================================
// POINT
// ============================================================================

#[test]
fn test_point_path_set() {
    let store = RecordingStore::default();
    let light = PointLight {
        position: Vec3::new(1.0, 2.0, 3.0),
        linear: 0.35,
        quadratic: 0.44,
        ..PointLight::default()
    };
    set_point(&store, "lamp", &light);

    assert_eq!(
        store.paths(),
        vec![
            "lamp.ambient",
            "lamp.diffuse",
            "lamp.specular",
            "lamp.position",
            "lamp.constant",
            "lamp.linear",
            "lamp.quadratic",
        ]
    );
    assert_eq!(store.value("lamp.constant"), Some(Written::Scalar(1.0)));
    assert_eq!(store.value("lamp.linear"), Some(Written::Scalar(0.35)));
    assert_eq!(store.value("lamp.quadratic"), Some(Written::Scalar(0.44)));
}

// ============================================================================
// SPOT
// ============================================================================

#[test]
fn test_spot_path_set() {
    let store = RecordingStore::default();
    let light = SpotLight {
        position: Vec3::X,
        direction: Vec3::NEG_Z,
        inner_cutoff: 0.97,
        outer_cutoff: 0.94,
        linear: 0.7,
        quadratic: 1.8,
        ..SpotLight::default()
    };
    set_spot(&store, "torch", &light);

    assert_eq!(
        store.paths(),
        vec![
            "torch.ambient",
            "torch.diffuse",
            "torch.specular",
            "torch.position",
            "torch.direction",
            "torch.innerCutoff",
            "torch.outerCutoff",
            "torch.constant",
            "torch.linear",
            "torch.quadratic",
        ]
    );
    assert_eq!(store.value("torch.innerCutoff"), Some(Written::Scalar(0.97)));
    assert_eq!(store.value("torch.outerCutoff"), Some(Written::Scalar(0.94)));
}

#[test]
fn test_enum_dispatch_matches_variant_functions() {
    let direct = RecordingStore::default();
    let dispatched = RecordingStore::default();
    let light = SpotLight::default();

    set_spot(&direct, "s", &light);
    set_light(&dispatched, "s", &Light::Spot(light));

    assert_eq!(direct.paths(), dispatched.paths());
}

// ============================================================================
// BATCH
// ============================================================================

#[test]
fn test_batch_three_point_lights() {
    let store = RecordingStore::default();
    let lights: Vec<Light> = (0..3)
        .map(|i| {
            Light::Point(PointLight {
                position: Vec3::splat(i as f32),
                ..PointLight::default()
            })
        })
        .collect();

    set_lights(&store, "pts", &lights);

    // 3 lights x 7 fields
    assert_eq!(store.len(), 21);
    assert_eq!(store.paths()[0], "pts[0].ambient");
    assert_eq!(store.paths()[20], "pts[2].quadratic");
    assert_eq!(
        store.value("pts[1].position"),
        Some(Written::Vector(Vec3::ONE))
    );
    assert_eq!(store.value("pts[2].constant"), Some(Written::Scalar(1.0)));
}

#[test]
fn test_batch_empty_sequence_writes_nothing() {
    let store = RecordingStore::default();
    set_lights(&store, "pts", &[]);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_batch_subslice_limits_writes() {
    let store = RecordingStore::default();
    let lights: Vec<Light> = (0..3).map(|_| Light::Point(PointLight::default())).collect();

    // Upload only the first two of three available lights.
    set_lights(&store, "pts", &lights[..2]);

    assert_eq!(store.len(), 14);
    assert!(store.value("pts[2].ambient").is_none());
}

#[test]
fn test_batch_mixed_variants_each_use_own_fields() {
    let store = RecordingStore::default();
    let lights = [
        Light::Directional(sun()),
        Light::Point(PointLight::default()),
    ];

    set_lights(&store, "mixed", &lights);

    assert_eq!(store.len(), 4 + 7);
    assert_eq!(
        store.value("mixed[0].direction"),
        Some(Written::Vector(Vec3::splat(-1.0)))
    );
    assert!(store.value("mixed[0].constant").is_none());
    assert!(store.value("mixed[1].direction").is_none());
}
