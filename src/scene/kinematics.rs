//! Pure angle and placement functions: every transform in the scene is a
//! function of elapsed time and a spec, recomputed each frame. No angle is
//! ever accumulated, so nothing can drift.

use gfx_maths::*;

use crate::mesh::GearSpec;

use super::transform::Transform;

/// 360° per minute.
pub const SECOND_HAND_DEG_PER_SEC: f32 = 6.0;
/// 360° per hour.
pub const MINUTE_HAND_DEG_PER_SEC: f32 = 0.1;
/// 360° per 12 hours.
pub const HOUR_HAND_DEG_PER_SEC: f32 = 1.0 / 120.0;

pub const MARKER_COUNT: u32 = 12;
pub const MARKER_STEP_DEG: f32 = 30.0;

/// Wraps an angle into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Gear rotation after `t` seconds at `rpm` revolutions per minute.
/// One rpm is 6°/s.
pub fn gear_angle(t: f32, rpm: f32) -> f32 {
    wrap_degrees(t * rpm * 6.0)
}

/// Hand rotation after `t` seconds, with a uniform phase offset aligning
/// angle zero with the 12 o'clock direction.
pub fn hand_angle(t: f32, deg_per_sec: f32, phase_deg: f32) -> f32 {
    wrap_degrees(t * deg_per_sec + phase_deg)
}

fn spin(position: Vec3, angle_deg: f32) -> Transform {
    Transform {
        position,
        rotation: Quaternion::axis_angle(Vec3::new(0.0, 0.0, 1.0), angle_deg.to_radians()),
        scale: Vec3::one(),
    }
}

/// Placement of a gear spinning about +Z at `position`. Rotation composes
/// after translation, so the gear spins in place.
pub fn gear_transform(t: f32, spec: &GearSpec, position: Vec3) -> Transform {
    spin(position, gear_angle(t, spec.rpm))
}

/// Placement of a hand pivoting at the scene origin.
pub fn hand_transform(t: f32, deg_per_sec: f32, phase_deg: f32) -> Transform {
    spin(Vec3::zero(), hand_angle(t, deg_per_sec, phase_deg))
}

/// Static placement of hour marker `index` on a circle of `radius`. The
/// marker mesh points radially outward under its placement angle; the extra
/// 90° lays its long axis tangential.
pub fn marker_transform(index: u32, radius: f32, phase_deg: f32) -> Transform {
    let angle_deg = index as f32 * MARKER_STEP_DEG + phase_deg;
    let rad = angle_deg.to_radians();
    // where the tip of a +Y-pointing mesh rotated by `angle_deg` would sit
    let position = Vec3::new(-rad.sin(), rad.cos(), 0.0) * radius;
    spin(position, angle_deg + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_covers_negative_and_overshooting_angles() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(-540.0), 180.0);
    }

    #[test]
    fn meshed_gear_pair_scenario() {
        // driver at 1 rpm with 60 teeth, driven wheel with 12
        let driver = GearSpec::new(1.0, 0.5, 60, 1.0);
        let driven = GearSpec::driven_by(&driver, 0.2, 0.1, 12);
        assert_eq!(driven.rpm, -5.0);
        assert_eq!(gear_angle(6.0, driver.rpm), 36.0);
        assert_eq!(gear_angle(6.0, driven.rpm), 180.0);
    }

    #[test]
    fn hand_rates_reproduce_a_real_clock() {
        assert_eq!(MINUTE_HAND_DEG_PER_SEC, SECOND_HAND_DEG_PER_SEC / 60.0);
        assert_eq!(HOUR_HAND_DEG_PER_SEC, MINUTE_HAND_DEG_PER_SEC / 12.0);
    }

    #[test]
    fn second_hand_period_is_sixty_seconds() {
        for t in [0.0f32, 12.3, 59.0, 301.7] {
            let now = hand_angle(t, SECOND_HAND_DEG_PER_SEC, 0.0);
            let later = hand_angle(t + 60.0, SECOND_HAND_DEG_PER_SEC, 0.0);
            assert!((now - later).abs() < 1e-3, "t={t}: {now} vs {later}");
        }
    }

    #[test]
    fn at_time_zero_all_angles_equal_the_phase() {
        for phase in [0.0f32, 90.0] {
            for dps in [
                SECOND_HAND_DEG_PER_SEC,
                MINUTE_HAND_DEG_PER_SEC,
                HOUR_HAND_DEG_PER_SEC,
            ] {
                assert_eq!(hand_angle(0.0, dps, phase), phase);
            }
        }
    }

    #[test]
    fn markers_sit_on_the_dial_circle() {
        for index in 0..MARKER_COUNT {
            let transform = marker_transform(index, 0.5, 0.0);
            let p = transform.position;
            let distance = (p.x * p.x + p.y * p.y).sqrt();
            assert!((distance - 0.5).abs() < 1e-5);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn markers_lie_tangential_to_the_dial() {
        for index in 0..MARKER_COUNT {
            let matrix = marker_transform(index, 0.5, 0.0).get_model_matrix();
            let base = matrix * Vec4::new(0.0, 0.0, 0.0, 1.0);
            let tip = matrix * Vec4::new(0.0, 1.0, 0.0, 1.0);
            let (dx, dy) = (tip.x - base.x, tip.y - base.y);
            // long axis perpendicular to the radial direction
            let dot = base.x * dx + base.y * dy;
            assert!(dot.abs() < 1e-5, "marker {index} is not tangential");
            // and laid counter-clockwise around the dial, not the reverse
            let cross = base.x * dy - base.y * dx;
            assert!(cross > 0.0);
        }
    }

    #[test]
    fn marker_zero_sits_at_twelve_o_clock() {
        let transform = marker_transform(0, 0.5, 0.0);
        assert!(transform.position.x.abs() < 1e-6);
        assert!((transform.position.y - 0.5).abs() < 1e-6);
    }
}
