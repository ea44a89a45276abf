//! Camera module
//!
//! First-person orientation model (pitch/yaw to orthonormal basis) and the
//! explicit input-state controller that drives it.

mod camera;
mod controller;

pub use camera::Camera;
pub use controller::{CameraController, Movement};
