//! Kinematic motion primitives: planar stepping, the scripted jump arc,
//! and the out-of-bounds fall. The state machine composes these; no
//! trigonometry leaks out of this module.

use nalgebra::Point3;

use crate::constants::{GRAVITY_MPS2, TERMINAL_FALL_SPEED_MPS};
use crate::intent::MoveIntent;

/// Advance the planar (XZ) position by one tick of directional movement.
///
/// Diagonal intent is intentionally not normalized; both axes advance at
/// full speed, matching the authored movement feel.
#[inline]
pub fn step_planar(
    position: &mut Point3<f32>,
    intent: MoveIntent,
    speed_mps: f32,
    dt_seconds: f32,
) {
    let step = speed_mps.max(0.0) * dt_seconds.max(0.0);
    position.x += intent.x * step;
    position.z += intent.z * step;
}

/// Height of the scripted jump arc above the ground plane.
///
/// `h(t) = height * sin(pi * t / duration)` with the phase clamped to
/// [0, 1]: zero at launch and landing, peak `height` at the midpoint.
/// Frame rate only affects how often the arc is sampled, never its shape.
#[inline]
pub fn jump_height(elapsed: f32, duration: f32, height: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed / duration).clamp(0.0, 1.0);
    height * (core::f32::consts::PI * phase).sin()
}

/// Advance the fall speed by one tick of constant downward acceleration
/// and return the vertical displacement for this tick.
///
/// Semi-implicit Euler: the returned displacement already uses the
/// updated speed. Speed is clamped at the terminal fall speed, so the
/// descent is monotonic and bounded.
#[inline]
pub fn fall_step(vertical_speed: &mut f32, dt_seconds: f32) -> f32 {
    let dt = dt_seconds.max(0.0);
    *vertical_speed = (*vertical_speed - GRAVITY_MPS2 * dt).max(TERMINAL_FALL_SPEED_MPS);
    *vertical_speed * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() <= 1.0e-5, "{a} != {b}");
    }

    #[test]
    fn planar_step_scales_with_speed_and_dt() {
        let mut pos = Point3::new(1.0, 0.0, -2.0);
        let intent = MoveIntent { x: 1.0, z: -1.0 };

        step_planar(&mut pos, intent, 3.0, 0.5);

        assert_close(pos.x, 2.5);
        assert_close(pos.z, -3.5);
        assert_close(pos.y, 0.0);
    }

    #[test]
    fn planar_step_ignores_negative_inputs() {
        let mut pos = Point3::origin();
        step_planar(&mut pos, MoveIntent { x: 1.0, z: 0.0 }, 3.0, -0.1);
        assert_eq!(pos, Point3::origin());

        step_planar(&mut pos, MoveIntent { x: 1.0, z: 0.0 }, -3.0, 0.1);
        assert_eq!(pos, Point3::origin());
    }

    #[test]
    fn jump_arc_is_zero_at_both_ends_and_peaks_at_the_midpoint() {
        let duration = 0.6;
        let height = 1.5;

        assert_close(jump_height(0.0, duration, height), 0.0);
        assert_close(jump_height(duration, duration, height), 0.0);
        assert_close(jump_height(duration / 2.0, duration, height), height);
    }

    #[test]
    fn jump_arc_clamps_past_the_end() {
        assert_close(jump_height(10.0, 0.6, 1.5), 0.0);
        assert_close(jump_height(-1.0, 0.6, 1.5), 0.0);
    }

    #[test]
    fn jump_arc_with_zero_duration_is_flat() {
        assert_eq!(jump_height(0.3, 0.0, 1.5), 0.0);
    }

    #[test]
    fn fall_descent_is_monotonic_and_accelerating() {
        let dt = 1.0 / 60.0;
        let mut speed = 0.0;

        let first = fall_step(&mut speed, dt);
        let second = fall_step(&mut speed, dt);

        assert!(first < 0.0);
        assert!(second < first);
        assert_close(speed, -2.0 * GRAVITY_MPS2 * dt);
    }

    #[test]
    fn fall_speed_clamps_at_terminal() {
        let mut speed = 0.0;
        for _ in 0..1_000 {
            fall_step(&mut speed, 1.0 / 30.0);
        }
        assert_eq!(speed, TERMINAL_FALL_SPEED_MPS);
    }
}
