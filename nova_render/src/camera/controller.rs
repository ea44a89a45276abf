//! Fly-camera input controller.
//!
//! All input tracking lives in explicit state owned by the application and
//! threaded through each frame: movement keys as a bitflags set, the
//! mouse-look gesture as a drag flag plus the last cursor sample. There is
//! no global window pointer and no static "just pressed" flag; pressing
//! again after a release simply starts a fresh reference sample.

use super::camera::Camera;
use bitflags::bitflags;
use glam::Vec2;

/// Default movement speed in world units per second.
const DEFAULT_SPEED: f32 = 2.5;

bitflags! {
    /// Movement keys currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Movement: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
    }
}

/// Accumulates input events between frames and applies them to a
/// [`Camera`] once per frame with the frame's delta time.
#[derive(Debug, Clone)]
pub struct CameraController {
    speed: f32,
    movement: Movement,
    dragging: bool,
    /// Last cursor sample while dragging. `None` right after the drag
    /// starts, so the first motion only establishes the reference and the
    /// view does not jump.
    last_cursor: Option<(f64, f64)>,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl CameraController {
    /// Controller with the default speed.
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_SPEED)
    }

    /// Controller with a custom movement speed (world units per second).
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            movement: Movement::empty(),
            dragging: false,
            last_cursor: None,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    /// Movement speed in world units per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Movement keys currently held.
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Whether a mouse-look drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record a movement key press.
    pub fn press(&mut self, movement: Movement) {
        self.movement.insert(movement);
    }

    /// Record a movement key release.
    pub fn release(&mut self, movement: Movement) {
        self.movement.remove(movement);
    }

    /// Start a mouse-look drag. The next cursor sample becomes the
    /// reference; it produces no rotation by itself.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.last_cursor = None;
    }

    /// End the mouse-look drag and drop the reference sample.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Feed a cursor position. Ignored unless a drag is in progress.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        if let Some((last_x, last_y)) = self.last_cursor {
            // Mouse right turns right, mouse up looks up.
            self.pending_yaw += (x - last_x) as f32;
            self.pending_pitch += (last_y - y) as f32;
        }
        self.last_cursor = Some((x, y));
    }

    /// Apply the accumulated input to `camera`, scaled by the frame's
    /// delta time in seconds. Consumes the pending rotation.
    pub fn apply(&mut self, camera: &mut Camera, dt: f32) {
        let mut planar = Vec2::ZERO;
        if self.movement.contains(Movement::FORWARD) {
            planar.y += 1.0;
        }
        if self.movement.contains(Movement::BACKWARD) {
            planar.y -= 1.0;
        }
        if self.movement.contains(Movement::RIGHT) {
            planar.x += 1.0;
        }
        if self.movement.contains(Movement::LEFT) {
            planar.x -= 1.0;
        }
        let mut lift = 0.0;
        if self.movement.contains(Movement::UP) {
            lift += 1.0;
        }
        if self.movement.contains(Movement::DOWN) {
            lift -= 1.0;
        }

        let mut position = camera.position();
        if planar != Vec2::ZERO {
            // Normalize so diagonal movement is not faster.
            let planar = planar.normalize();
            position += camera.front() * planar.y * self.speed * dt;
            position += camera.right() * planar.x * self.speed * dt;
        }
        position += Camera::WORLD_UP * lift * self.speed * dt;
        camera.set_position(position);

        if self.pending_yaw != 0.0 || self.pending_pitch != 0.0 {
            camera.set_yaw(camera.yaw() + self.pending_yaw * self.speed * dt);
            camera.set_pitch(camera.pitch() + self.pending_pitch * self.speed * dt);
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
