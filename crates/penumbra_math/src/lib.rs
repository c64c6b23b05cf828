//! Vector and color math for penumbra.
//!
//! Points and directions share one type, `DVec3`, re-exported from glam.
//! Colors use the same storage with channels on a 0..255 scale; they are only
//! clamped by [`clamp_color`] at the final composition step.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod ray;

pub use color::{clamp_color, Color, BLACK, CHANNEL_MAX};
pub use interval::Interval;
pub use ray::Ray;

/// Default tolerance for intersection windows, parallel tests and normalization.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Normalize `v`, or `None` when its length is below `epsilon`.
///
/// A zero-length vector has no direction; callers decide what a degenerate
/// direction means for them instead of dividing by zero.
#[inline]
pub fn normalize(v: DVec3, epsilon: f64) -> Option<DVec3> {
    let length = v.length();
    if length < epsilon || !length.is_finite() {
        return None;
    }
    Some(v / length)
}

/// Mirror `v` about `normal`: `2 * normal * dot(normal, v) - v`.
///
/// `v` points away from the surface and so does the result.
#[inline]
pub fn reflect(v: DVec3, normal: DVec3) -> DVec3 {
    normal * (2.0 * normal.dot(v)) - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, DVec3::splat(3.0));
        assert_eq!(a * 2.0, DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(DVec3::X.cross(DVec3::Y), DVec3::Z);
    }

    #[test]
    fn test_normalize_unit_length() {
        let vectors = [
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(-1.0, 2.0, -7.5),
            DVec3::new(0.001, 0.0, 0.002),
            DVec3::new(1200.0, -50.0, 2000.0),
        ];

        for v in vectors {
            let n = normalize(v, DEFAULT_EPSILON).unwrap();
            assert!((n.length() - 1.0).abs() < 1e-9, "{v:?} -> {n:?}");
            // Same direction as the input
            assert!(n.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_normalize_degenerate() {
        assert_eq!(normalize(DVec3::ZERO, DEFAULT_EPSILON), None);
        assert_eq!(normalize(DVec3::splat(1e-6), DEFAULT_EPSILON), None);
        assert_eq!(normalize(DVec3::new(f64::NAN, 0.0, 1.0), DEFAULT_EPSILON), None);
    }

    #[test]
    fn test_reflect() {
        // Light straight above a floor reflects straight back up
        let up = reflect(DVec3::Y, DVec3::Y);
        assert_eq!(up, DVec3::Y);

        // 45 degrees in, 45 degrees out on the other side
        let v = DVec3::new(1.0, 1.0, 0.0);
        assert_eq!(reflect(v, DVec3::Y), DVec3::new(-1.0, 1.0, 0.0));
    }
}
