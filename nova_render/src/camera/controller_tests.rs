use super::*;
use glam::Vec3;

const EPSILON: f32 = 1e-5;

fn camera_at_origin() -> Camera {
    // pitch 0, yaw -90 => front (0, 0, -1), right (1, 0, 0)
    Camera::new(Vec3::ZERO, 0.0, -90.0, 90.0)
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_no_input_no_motion() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.apply(&mut camera, 0.016);
    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
}

#[test]
fn test_forward_moves_along_front() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::FORWARD);
    controller.apply(&mut camera, 1.0);
    let expected = camera.front() * controller.speed();
    assert!((camera.position() - expected).length() < EPSILON);
}

#[test]
fn test_backward_is_inverse_of_forward() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::BACKWARD);
    controller.apply(&mut camera, 1.0);
    let expected = -camera.front() * controller.speed();
    assert!((camera.position() - expected).length() < EPSILON);
}

#[test]
fn test_diagonal_movement_normalized() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::FORWARD | Movement::RIGHT);
    controller.apply(&mut camera, 1.0);
    // Two keys held still travel at `speed`, not speed * sqrt(2).
    assert!((camera.position().length() - controller.speed()).abs() < EPSILON);
}

#[test]
fn test_opposite_keys_cancel() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::LEFT | Movement::RIGHT);
    controller.apply(&mut camera, 1.0);
    assert!(camera.position().length() < EPSILON);
}

#[test]
fn test_vertical_movement_uses_world_up() {
    let mut camera = camera_at_origin();
    camera.set_pitch(45.0);
    let mut controller = CameraController::new();
    controller.press(Movement::UP);
    controller.apply(&mut camera, 1.0);
    // Lift follows the world axis even when the camera pitches.
    let expected = Camera::WORLD_UP * controller.speed();
    assert!((camera.position() - expected).length() < EPSILON);
}

#[test]
fn test_release_stops_motion() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::FORWARD);
    controller.apply(&mut camera, 1.0);
    let after_press = camera.position();
    controller.release(Movement::FORWARD);
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.position(), after_press);
}

#[test]
fn test_motion_scales_with_delta_time() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.press(Movement::FORWARD);
    controller.apply(&mut camera, 0.5);
    assert!((camera.position().length() - controller.speed() * 0.5).abs() < EPSILON);
}

// ============================================================================
// Mouse look
// ============================================================================

#[test]
fn test_first_cursor_sample_does_not_rotate() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.begin_drag();
    controller.cursor_moved(400.0, 300.0);
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
}

#[test]
fn test_cursor_delta_rotates() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.begin_drag();
    controller.cursor_moved(400.0, 300.0);
    controller.cursor_moved(410.0, 296.0);
    controller.apply(&mut camera, 1.0);
    // dx = +10 turns right, dy = -4 looks up.
    assert!((camera.yaw() - (-90.0 + 10.0 * controller.speed())).abs() < EPSILON);
    assert!((camera.pitch() - 4.0 * controller.speed()).abs() < EPSILON);
}

#[test]
fn test_cursor_ignored_without_drag() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.cursor_moved(400.0, 300.0);
    controller.cursor_moved(500.0, 200.0);
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
}

#[test]
fn test_new_drag_resets_reference() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.begin_drag();
    controller.cursor_moved(100.0, 100.0);
    controller.end_drag();
    controller.begin_drag();
    // Far-away cursor after re-press must not cause a view jump.
    controller.cursor_moved(700.0, 500.0);
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
}

#[test]
fn test_pending_rotation_consumed_once() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.begin_drag();
    controller.cursor_moved(0.0, 0.0);
    controller.cursor_moved(10.0, 0.0);
    controller.apply(&mut camera, 1.0);
    let yaw_after_first = camera.yaw();
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.yaw(), yaw_after_first);
}

#[test]
fn test_pitch_clamped_through_controller() {
    let mut camera = camera_at_origin();
    let mut controller = CameraController::new();
    controller.begin_drag();
    controller.cursor_moved(0.0, 1000.0);
    controller.cursor_moved(0.0, 0.0);
    controller.apply(&mut camera, 1.0);
    assert_eq!(camera.pitch(), 89.0);
}
