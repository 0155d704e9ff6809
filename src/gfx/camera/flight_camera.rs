use std::cell::Cell;

use cgmath::{Deg, Matrix4, Rad, Vector3};

use super::frustum::Frustum;
use crate::math::{perspective_lh, rotation_x, rotation_y, rotation_z, translation, BoundingBox};

/// Lens parameters for [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 60.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 300.0,
        }
    }
}

impl CameraSettings {
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }
}

/// Matrices and frustum derived from the camera state.
#[derive(Debug, Clone, Copy)]
pub struct CameraMatrices {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    pub frustum: Frustum,
}

/// Free-flying camera positioned by Euler angles in degrees.
///
/// Every setter drops the cached matrices; they are rebuilt on the next read,
/// so visibility queries never see a frustum older than the last write.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    settings: CameraSettings,
    cached: Cell<Option<CameraMatrices>>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            settings,
            cached: Cell::new(None),
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Rotation in degrees: x = pitch, y = yaw, z = roll
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn settings(&self) -> CameraSettings {
        self.settings
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
        self.cached.set(None);
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
        self.cached.set(None);
    }

    pub fn set_settings(&mut self, settings: CameraSettings) {
        self.settings = settings;
        self.cached.set(None);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.settings.aspect = aspect;
        self.cached.set(None);
    }

    pub fn matrices(&self) -> CameraMatrices {
        if let Some(matrices) = self.cached.get() {
            return matrices;
        }
        let matrices = self.compute();
        self.cached.set(Some(matrices));
        matrices
    }

    pub fn view(&self) -> Matrix4<f32> {
        self.matrices().view
    }

    pub fn projection(&self) -> Matrix4<f32> {
        self.matrices().projection
    }

    pub fn frustum(&self) -> Frustum {
        self.matrices().frustum
    }

    fn compute(&self) -> CameraMatrices {
        // Inverse of the object transform: undo roll, pitch, yaw, then translation
        let view = rotation_z(-self.rotation.z)
            * rotation_x(-self.rotation.x)
            * rotation_y(-self.rotation.y)
            * translation(-self.position);
        let projection = perspective_lh(
            Rad::from(Deg(self.settings.fov)),
            self.settings.aspect,
            self.settings.near,
            self.settings.far,
        );
        let frustum = Frustum::from_view_projection(&(projection * view));

        log::trace!(
            "Camera matrices rebuilt at {:?} / {:?}",
            self.position,
            self.rotation
        );

        CameraMatrices {
            view,
            projection,
            frustum,
        }
    }

    /// Tests the two extreme corners of `local_box` moved to `world_offset`.
    ///
    /// Only the min and max corners are checked, so a box whose other corners
    /// are on screen while these two are not is reported invisible.
    pub fn is_aabb_visible(&self, world_offset: Vector3<f32>, local_box: &BoundingBox) -> bool {
        let world = local_box.translated(world_offset);
        let frustum = self.frustum();
        frustum.is_point_in_frustum(world.min) && frustum.is_point_in_frustum(world.max)
    }

    pub fn is_sphere_visible(&self, center: Vector3<f32>, radius: f32) -> bool {
        self.frustum().is_sphere_in_frustum(center, radius)
    }
}
