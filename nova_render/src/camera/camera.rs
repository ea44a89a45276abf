//! First-person camera with a spherical orientation model.
//!
//! The camera stores a world-space position plus pitch/yaw angles in
//! degrees and derives an orthonormal front/right/up basis from them.
//! Every angle setter recomputes the basis synchronously, so a getter
//! called after a setter always observes the new state.

use glam::{Mat4, Vec3};

/// Fly camera. Owns its orientation state; the caller owns movement and
/// projection.
///
/// Pitch is clamped to ±89°. At ±90° `front` would be parallel to
/// [`Camera::WORLD_UP`] and the right vector would degenerate to a
/// zero-length cross product, so the clamp is load-bearing, not cosmetic.
///
/// Yaw is unbounded by default. With [`Camera::set_wrap_yaw`] enabled it is
/// normalized into [0°, 360°) after every write.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    pitch: f32,
    yaw: f32,
    fov: f32,
    wrap_yaw: bool,
}

impl Camera {
    /// The world's up direction.
    pub const WORLD_UP: Vec3 = Vec3::Y;

    /// Pitch clamp boundary in degrees.
    const PITCH_LIMIT: f32 = 89.0;

    /// Create a new camera with the given parameters.
    ///
    /// All inputs are accepted; an out-of-range pitch is silently clamped
    /// into [-89°, 89°]. Yaw wrapping starts disabled.
    pub fn new(position: Vec3, pitch: f32, yaw: f32, fov: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            pitch: pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT),
            yaw,
            fov,
            wrap_yaw: false,
        };
        camera.update();
        camera
    }

    // ===== GETTERS =====

    /// View matrix looking from `position` toward `position + front`.
    ///
    /// Pure function of the current state; no side effects.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, Self::WORLD_UP)
    }

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit vector pointing where the camera looks.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector pointing to the camera's right.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing up from the camera.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Pitch in degrees, always within [-89°, 89°].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in degrees. Within [0°, 360°) when wrapping is enabled.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical field of view in degrees. No clamp is enforced here.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Whether yaw values are normalized into [0°, 360°).
    pub fn wrap_yaw(&self) -> bool {
        self.wrap_yaw
    }

    // ===== SETTERS =====

    /// Set the world-space position. Does not affect the basis vectors.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the pitch in degrees, clamping into [-89°, 89°] and recomputing
    /// the basis vectors.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.update();
    }

    /// Set the yaw in degrees and recompute the basis vectors.
    ///
    /// With wrapping enabled the value is reduced with a euclidean
    /// remainder, so negative inputs land in [0°, 360°) as well
    /// (e.g. -30° becomes 330°).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        if self.wrap_yaw {
            self.yaw = self.yaw.rem_euclid(360.0);
        }
        self.update();
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Enable or disable yaw normalization. Enabling re-normalizes the
    /// currently stored yaw.
    pub fn set_wrap_yaw(&mut self, wrap: bool) {
        self.wrap_yaw = wrap;
        if wrap {
            self.yaw = self.yaw.rem_euclid(360.0);
            self.update();
        }
    }

    // ===== INTERNAL =====

    /// Recompute front/right/up from the current pitch and yaw.
    fn update(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(Self::WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    /// Camera three units back from the origin, looking down -Z.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), 0.0, -90.0, 90.0)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
