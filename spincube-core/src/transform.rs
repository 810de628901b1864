/// Rotation matrices and the per-frame animation state
use nalgebra::{Matrix3, Point3};

/// Fixed tilt applied around the X axis every frame (degrees).
const TILT_DEGREES: f32 = 30.0;
/// Frequency of the secondary Z wobble, in radians per degree of spin.
const WOBBLE_RATE: f32 = 0.053;
/// Amplitude of the secondary Z wobble (degrees).
const WOBBLE_DEGREES: f32 = 40.0;

/// Rotation angles around the three principal axes (in degrees)
#[derive(Debug, Clone, Copy)]
pub struct RotationAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationAngles {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Rotation matrix around the X axis for an angle in degrees.
///
/// Sign layout: `[1 0 0; 0 c -s; 0 s c]`.
pub fn rotation_x(degrees: f32) -> Matrix3<f32> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Rotation matrix around the Y axis for an angle in degrees.
///
/// Sign layout: `[c 0 s; 0 1 0; -s 0 c]`.
pub fn rotation_y(degrees: f32) -> Matrix3<f32> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Rotation matrix around the Z axis for an angle in degrees.
///
/// Sign layout: `[c -s 0; s c 0; 0 0 1]`.
pub fn rotation_z(degrees: f32) -> Matrix3<f32> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Rotate a point by the given per-axis angles.
///
/// Applies X first, then Y, then Z (three separate matrix-vector products,
/// not one pre-composed matrix). The order changes the visual motion and is
/// part of the pipeline's contract.
pub fn rotate_point(point: &Point3<f32>, angles: &RotationAngles) -> Point3<f32> {
    rotation_z(angles.z) * (rotation_y(angles.y) * (rotation_x(angles.x) * point))
}

/// Animation state: a single spin angle advanced once per frame.
///
/// The wrap check runs before the increment, so the rendered angle cycles
/// through 1..=361 rather than 0..=360. Angles are otherwise unwrapped; the
/// trigonometry is periodic anyway.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    pub angle: f32,
}

impl Spin {
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    /// Advance by one degree, wrapping to zero once the angle exceeds 360.
    pub fn advance(&mut self) {
        if self.angle > 360.0 {
            self.angle = 0.0;
        }
        self.angle += 1.0;
    }

    /// Per-frame rotation angles: a fixed X tilt, a spin around Y and a
    /// sine wobble around Z driven by the spin angle.
    pub fn angles(&self) -> RotationAngles {
        RotationAngles::new(
            TILT_DEGREES,
            -self.angle,
            (-self.angle * WOBBLE_RATE).sin() * WOBBLE_DEGREES,
        )
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: &Point3<f32>, b: &Point3<f32>, eps: f32) -> bool {
        (a - b).norm() < eps
    }

    #[test]
    fn test_zero_angle_is_identity() {
        for matrix in [rotation_x(0.0), rotation_y(0.0), rotation_z(0.0)] {
            assert!((matrix - Matrix3::identity()).norm() < 1e-6);
        }
    }

    #[test]
    fn test_single_axis_equals_composition_with_zeros() {
        let point = Point3::new(0.5, -1.25, 2.0);
        for degrees in [0.0, 90.0, 180.0, 270.0, 360.0] {
            let composed = rotate_point(&point, &RotationAngles::new(degrees, 0.0, 0.0));
            let direct = rotation_x(degrees) * point;
            assert!(approx(&composed, &direct, 1e-6));
        }
    }

    #[test]
    fn test_full_turn_returns_original_point() {
        let point = Point3::new(1.0, 2.0, 3.0);
        assert!(approx(&(rotation_x(360.0) * point), &point, 1e-4));
        assert!(approx(&(rotation_y(360.0) * point), &point, 1e-4));
        assert!(approx(&(rotation_z(360.0) * point), &point, 1e-4));
    }

    #[test]
    fn test_sign_conventions() {
        // Right-handed: +90 degrees about X carries +y onto +z.
        let rotated = rotation_x(90.0) * Point3::new(0.0, 1.0, 0.0);
        assert!(approx(&rotated, &Point3::new(0.0, 0.0, 1.0), 1e-6));
        // +90 degrees about Y carries +x onto -z.
        let rotated = rotation_y(90.0) * Point3::new(1.0, 0.0, 0.0);
        assert!(approx(&rotated, &Point3::new(0.0, 0.0, -1.0), 1e-6));
        // +90 degrees about Z carries +x onto +y.
        let rotated = rotation_z(90.0) * Point3::new(1.0, 0.0, 0.0);
        assert!(approx(&rotated, &Point3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_application_order_is_z_after_y_after_x() {
        let point = Point3::new(0.3, 0.7, -1.1);
        let angles = RotationAngles::new(30.0, 45.0, 60.0);
        let expected = rotation_z(60.0) * (rotation_y(45.0) * (rotation_x(30.0) * point));
        assert!(approx(&rotate_point(&point, &angles), &expected, 1e-6));
    }

    #[test]
    fn test_spin_wraps_after_exceeding_full_turn() {
        let mut spin = Spin::new();
        for _ in 0..360 {
            spin.advance();
        }
        assert_eq!(spin.angle, 360.0);
        spin.advance();
        assert_eq!(spin.angle, 361.0);
        spin.advance();
        assert_eq!(spin.angle, 1.0);
    }

    #[test]
    fn test_spin_angles_recipe() {
        let spin = Spin { angle: 10.0 };
        let angles = spin.angles();
        assert_eq!(angles.x, 30.0);
        assert_eq!(angles.y, -10.0);
        let expected = (-10.0f32 * 0.053).sin() * 40.0;
        assert!((angles.z - expected).abs() < 1e-6);
    }
}
