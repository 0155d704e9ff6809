//! View frustum extracted from a combined view-projection matrix.

use cgmath::{Matrix, Matrix4, Vector3, Vector4};

use crate::math::normalize_plane;

/// Six clip planes, each `(a, b, c, d)` with `a*x + b*y + c*z + d > 0` inside.
///
/// Plane order: left, right, bottom, top, far, near.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Vector4<f32>; 6],
}

impl Frustum {
    /// Builds the planes from `projection * view` by adding and subtracting
    /// rows of the matrix, then normalizes each one.
    pub fn from_view_projection(view_projection: &Matrix4<f32>) -> Self {
        let r0 = view_projection.row(0);
        let r1 = view_projection.row(1);
        let r2 = view_projection.row(2);
        let r3 = view_projection.row(3);

        Self {
            planes: [
                normalize_plane(r3 + r0), // left
                normalize_plane(r3 - r0), // right
                normalize_plane(r3 + r1), // bottom
                normalize_plane(r3 - r1), // top
                normalize_plane(r3 - r2), // far
                normalize_plane(r3 + r2), // near
            ],
        }
    }

    /// Recomputes the planes in place.
    pub fn calculate(&mut self, view_projection: &Matrix4<f32>) {
        *self = Self::from_view_projection(view_projection);
    }

    fn signed_distance(plane: &Vector4<f32>, point: Vector3<f32>) -> f32 {
        plane.x * point.x + plane.y * point.y + plane.z * point.z + plane.w
    }

    /// A point touching a plane counts as outside.
    pub fn is_point_in_frustum(&self, point: Vector3<f32>) -> bool {
        self.planes
            .iter()
            .all(|plane| Self::signed_distance(plane, point) > 0.0)
    }

    /// Rejects only spheres lying entirely behind some plane, so spheres that
    /// graze a plane are accepted.
    pub fn is_sphere_in_frustum(&self, center: Vector3<f32>, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| Self::signed_distance(plane, center) > -radius)
    }
}
