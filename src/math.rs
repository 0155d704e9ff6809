//! # Math Foundation
//!
//! Thin helpers on top of `cgmath` used by the camera, renderer and terrain.
//!
//! `cgmath::Matrix4` is column-major and multiplies column vectors, so
//! `a * b` applies `b` first. Translations live in the fourth column
//! (memory slots 12..14), which is the layout the device receives.
//!
//! Rotations are expressed in degrees throughout the game code; the
//! `rotation_*` helpers convert at the boundary.

use cgmath::{Deg, InnerSpace, Matrix4, Rad, Vector3, Vector4};

/// Rotation about the X axis (pitch), angle in degrees.
pub fn rotation_x(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(degrees))
}

/// Rotation about the Y axis (yaw), angle in degrees.
pub fn rotation_y(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(degrees))
}

/// Rotation about the Z axis (roll), angle in degrees.
pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
    Matrix4::from_angle_z(Deg(degrees))
}

pub fn translation(offset: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(offset)
}

/// Left-handed perspective projection with a [0, 1] depth range.
///
/// The camera looks down +Z. `fov_y` is the full vertical field of view.
/// Clip-space `w` equals view-space `z`.
pub fn perspective_lh(fov_y: Rad<f32>, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let y_scale = 1.0 / (fov_y.0 / 2.0).tan();
    let x_scale = y_scale / aspect;
    let depth = far / (far - near);

    #[rustfmt::skip]
    let projection = Matrix4::new(
        x_scale, 0.0,     0.0,            0.0,
        0.0,     y_scale, 0.0,            0.0,
        0.0,     0.0,     depth,          1.0,
        0.0,     0.0,     -near * depth,  0.0,
    );
    projection
}

/// Normalizes a plane equation `(a, b, c, d)`.
///
/// Only the normal `(a, b, c)` contributes to the magnitude; `d` is divided
/// by the same factor so signed distances come out in world units.
pub fn normalize_plane(plane: Vector4<f32>) -> Vector4<f32> {
    let magnitude = plane.truncate().magnitude();
    if magnitude <= f32::EPSILON {
        return plane;
    }
    plane / magnitude
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Axis-aligned box in an object's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl BoundingBox {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Moves the box by `offset`, keeping its extent.
    pub fn translated(&self, offset: Vector3<f32>) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector4};

    const EPS: f32 = 1e-4;

    fn assert_matrix_eq(a: &Matrix4<f32>, b: &Matrix4<f32>) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < EPS, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_matrix_multiplication_is_associative() {
        let a = translation(Vector3::new(3.0, -2.0, 7.5)) * rotation_y(33.0);
        let b = rotation_x(-71.0) * rotation_z(12.0);
        let c = perspective_lh(Rad(1.0), 4.0 / 3.0, 0.1, 300.0);

        assert_matrix_eq(&((a * b) * c), &(a * (b * c)));
    }

    #[test]
    fn test_translation_lands_in_last_column() {
        let m = translation(Vector3::new(1.0, 2.0, 3.0));
        let items: &[f32; 16] = m.as_ref();
        assert_eq!(&items[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(items[15], 1.0);
    }

    #[test]
    fn test_rotation_y_turns_forward_towards_positive_x() {
        let v = rotation_y(90.0) * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert!((v.x - 1.0).abs() < EPS);
        assert!(v.z.abs() < EPS);
    }

    #[test]
    fn test_rotation_round_trip_is_identity() {
        let m = rotation_z(40.0) * rotation_z(-40.0);
        assert_matrix_eq(&m, &Matrix4::identity());
    }

    #[test]
    fn test_perspective_maps_near_and_far_to_depth_range() {
        let near = 0.5;
        let far = 100.0;
        let p = perspective_lh(Rad(std::f32::consts::FRAC_PI_3), 1.0, near, far);

        let at_near = p * Vector4::new(0.0, 0.0, near, 1.0);
        let at_far = p * Vector4::new(0.0, 0.0, far, 1.0);

        assert!((at_near.z / at_near.w).abs() < EPS);
        assert!((at_far.z / at_far.w - 1.0).abs() < EPS);
        assert!((at_far.w - far).abs() < EPS);
    }

    #[test]
    fn test_normalize_plane_ignores_w_in_magnitude() {
        let plane = normalize_plane(Vector4::new(0.0, 3.0, 4.0, 10.0));
        assert!((plane.y - 0.6).abs() < EPS);
        assert!((plane.z - 0.8).abs() < EPS);
        assert!((plane.w - 2.0).abs() < EPS);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn test_bounding_box_translation_keeps_extent() {
        let bbox = BoundingBox::new(Vector3::new(-1.0, 0.0, -1.0), Vector3::new(1.0, 2.0, 1.0));
        let moved = bbox.translated(Vector3::new(10.0, 0.0, 5.0));
        assert_eq!(moved.min, Vector3::new(9.0, 0.0, 4.0));
        assert_eq!(moved.max, Vector3::new(11.0, 2.0, 6.0));
    }
}
