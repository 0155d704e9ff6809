//! # Renderer
//!
//! [`Graphics`] owns the device, the camera, the light list and the frame
//! statistics. Game code submits meshes through [`Graphics::draw_mesh`], which
//! is the single place where sphere culling happens.

use std::ops::Range;
use std::rc::Rc;

use cgmath::{Matrix4, Vector3};

use super::device::{GraphicsDevice, Light, TransformKind};
use super::effects::{apply_material, depth_state, reset_combiner};
use crate::gfx::camera::{Camera, CameraSettings};
use crate::gfx::resources::assets::{load_texture_data, AssetSource};
use crate::gfx::resources::{Material, Texture, TextureData};
use crate::gfx::scene::Mesh;
use crate::gfx::skybox::Skybox;
use crate::math::{rotation_x, rotation_y, rotation_z, translation};
use crate::performance::{FrameStats, StatsConfig};

/// Colour the target is cleared to each frame.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLUE;

pub struct Graphics {
    device: Box<dyn GraphicsDevice>,
    camera: Camera,
    lights: Vec<Light>,
    sky: Option<Rc<Skybox>>,
    stats: FrameStats,
}

impl Graphics {
    pub fn new(device: Box<dyn GraphicsDevice>, camera: CameraSettings, stats: StatsConfig) -> Self {
        log::info!("Initializing graphics");
        Self {
            device,
            camera: Camera::new(camera),
            lights: Vec::new(),
            sky: None,
            stats: FrameStats::new(stats),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn device_mut(&mut self) -> &mut dyn GraphicsDevice {
        self.device.as_mut()
    }

    pub fn set_skybox(&mut self, sky: Option<Skybox>) {
        self.sky = sky.map(Rc::new);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Adding a light twice is a no-op.
    pub fn add_light(&mut self, light: Light) {
        if !self.lights.contains(&light) {
            self.device.add_light(&light);
            self.lights.push(light);
        }
    }

    pub fn remove_light(&mut self, light: &Light) {
        if let Some(index) = self.lights.iter().position(|l| l == light) {
            self.lights.remove(index);
            self.device.remove_light(light);
        }
    }

    /// Uploads decoded pixels. Failures are logged and yield `None`.
    pub fn create_texture(&mut self, data: &TextureData) -> Option<Texture> {
        match self.device.create_texture(data) {
            Ok(id) => {
                let texture = Texture {
                    id,
                    width: data.width,
                    height: data.height,
                };
                self.stats.add_texture_memory(texture.memory_size());
                log::debug!("Created texture {} ({}x{})", data.name, data.width, data.height);
                Some(texture)
            }
            Err(e) => {
                log::warn!("Texture {} can't be used: {}", data.name, e);
                None
            }
        }
    }

    pub fn load_texture(&mut self, assets: &dyn AssetSource, path: &str) -> Option<Texture> {
        let data = load_texture_data(assets, path)?;
        self.create_texture(&data)
    }

    /// Starts a frame: uploads the camera, clears, then draws the sky.
    pub fn begin_scene(&mut self) {
        self.stats.begin_frame();

        let matrices = self.camera.matrices();
        self.device.set_transform(TransformKind::View, &matrices.view);
        self.device
            .set_transform(TransformKind::Projection, &matrices.projection);
        self.device.clear(CLEAR_COLOR, 1.0);
        self.device.begin_scene();

        if let Some(sky) = self.sky.clone() {
            sky.draw(self);
        }
    }

    pub fn end_scene(&mut self, delta_time: f32) {
        self.device.end_scene();
        self.stats.end_frame(delta_time);
    }

    /// Draws the whole mesh. See [`Graphics::draw_mesh_range`].
    pub fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        scale: Vector3<f32>,
        material_override: Option<&Material>,
    ) -> bool {
        self.draw_mesh_range(
            mesh,
            0..mesh.vertex_count(),
            position,
            rotation,
            scale,
            material_override,
        )
    }

    /// Submits `range` of the mesh's vertices as one draw call.
    ///
    /// Meshes with a positive radius are culled as a sphere at `position`;
    /// culled calls return `false` and touch neither the device nor the
    /// statistics. Rotation is in degrees and applied yaw, then roll, then
    /// pitch.
    pub fn draw_mesh_range(
        &mut self,
        mesh: &Mesh,
        range: Range<usize>,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        scale: Vector3<f32>,
        material_override: Option<&Material>,
    ) -> bool {
        if mesh.radius() > 0.0 && !self.camera.is_sphere_visible(position, mesh.radius()) {
            return false;
        }

        let end = range.end.min(mesh.vertex_count());
        let start = range.start.min(end);

        let world = translation(position)
            * rotation_y(rotation.y)
            * rotation_z(rotation.z)
            * rotation_x(rotation.x)
            * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
        self.device.set_transform(TransformKind::World, &world);

        let material = material_override.or(mesh.material.as_deref());
        let (no_z_test, lit) = match material {
            Some(material) => {
                apply_material(self.device.as_mut(), material);
                (material.no_z_test, material.lit)
            }
            None => {
                reset_combiner(self.device.as_mut());
                (false, false)
            }
        };
        self.device.set_render_state(depth_state(no_z_test));

        self.device.draw_primitives(
            mesh.topology().primitive(),
            &mesh.vertices()[start..end],
            lit,
        );
        self.stats.record_draw(((end - start) / 3) as u32);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::device::RenderState;
    use crate::gfx::rendering::recording::{CommandLog, DeviceCommand, RecordingDevice};
    use crate::gfx::scene::vertex::WHITE;
    use crate::gfx::scene::{Topology, Vertex};

    fn one() -> Vector3<f32> {
        Vector3::new(1.0, 1.0, 1.0)
    }

    fn zero() -> Vector3<f32> {
        Vector3::new(0.0, 0.0, 0.0)
    }

    fn graphics() -> (Graphics, CommandLog) {
        let device = RecordingDevice::new();
        let log = device.log();
        let graphics = Graphics::new(
            Box::new(device),
            CameraSettings::default(),
            StatsConfig::default(),
        );
        (graphics, log)
    }

    /// Two triangles spanning -5..5 on every axis, so the radius is 5.
    fn cube_mesh() -> Mesh {
        let v = |x: f32, y: f32, z: f32| Vertex::new([x, y, z], [0.0, 1.0, 0.0], WHITE, [0.0, 0.0]);
        Mesh::new(
            vec![
                v(-5.0, -5.0, -5.0),
                v(5.0, 5.0, 5.0),
                v(-5.0, 5.0, 5.0),
                v(-5.0, -5.0, -5.0),
                v(5.0, -5.0, 5.0),
                v(5.0, 5.0, 5.0),
            ],
            Topology::Triangles,
        )
        .unwrap()
    }

    #[test]
    fn test_visible_mesh_is_submitted() {
        let (mut graphics, log) = graphics();
        let mesh = cube_mesh().with_material(Rc::new(Material::diffuse(None, None)));

        assert!(graphics.draw_mesh(&mesh, Vector3::new(0.0, 0.0, 50.0), zero(), one(), None));
        assert_eq!(log.draw_count(), 1);
        assert_eq!(graphics.stats().draw_calls(), 1);
        assert_eq!(graphics.stats().triangles(), 2);

        let commands = log.snapshot();
        assert!(commands.contains(&DeviceCommand::Draw {
            topology: wgpu::PrimitiveTopology::TriangleList,
            vertex_count: 6,
            lit: true,
        }));
    }

    #[test]
    fn test_mesh_behind_camera_is_culled() {
        let (mut graphics, log) = graphics();
        graphics
            .camera_mut()
            .set_rotation(Vector3::new(0.0, -90.0, 0.0));

        let mesh = cube_mesh();
        assert_eq!(mesh.radius(), 5.0);
        assert!(!graphics.draw_mesh(&mesh, Vector3::new(100.0, 0.0, 0.0), zero(), one(), None));
        assert!(log.is_empty());
        assert_eq!(graphics.stats().draw_calls(), 0);
    }

    #[test]
    fn test_world_matrix_order() {
        let (mut graphics, log) = graphics();
        let position = Vector3::new(0.0, 0.0, 50.0);
        let rotation = Vector3::new(10.0, 20.0, 30.0);
        graphics.draw_mesh(&cube_mesh(), position, rotation, one(), None);

        let expected = translation(position) * rotation_y(20.0) * rotation_z(30.0) * rotation_x(10.0);
        assert_eq!(
            log.snapshot()[0],
            DeviceCommand::SetTransform(TransformKind::World, expected)
        );
    }

    #[test]
    fn test_override_wins_and_controls_depth() {
        let (mut graphics, log) = graphics();
        let mesh = cube_mesh().with_material(Rc::new(Material::diffuse(None, Some("assigned"))));
        let sky = Material::new(Some("sky")).with_no_z_test(true);

        graphics.draw_mesh(&mesh, Vector3::new(0.0, 0.0, 50.0), zero(), one(), Some(&sky));
        let commands = log.snapshot();
        assert!(commands.contains(&DeviceCommand::SetMaterial(sky.desc())));
        assert!(commands.contains(&DeviceCommand::SetRenderState(RenderState::DepthCompare(
            wgpu::CompareFunction::Always
        ))));
        assert!(commands.contains(&DeviceCommand::Draw {
            topology: wgpu::PrimitiveTopology::TriangleList,
            vertex_count: 6,
            lit: false,
        }));
    }

    #[test]
    fn test_range_submits_slice() {
        let (mut graphics, log) = graphics();
        graphics.draw_mesh_range(&cube_mesh(), 3..6, Vector3::new(0.0, 0.0, 50.0), zero(), one(), None);
        assert!(log.snapshot().contains(&DeviceCommand::Draw {
            topology: wgpu::PrimitiveTopology::TriangleList,
            vertex_count: 3,
            lit: false,
        }));
        assert_eq!(graphics.stats().triangles(), 1);
    }

    #[test]
    fn test_lights_are_unique() {
        let (mut graphics, log) = graphics();
        let light = Light::directional([1.0; 4], Vector3::new(0.3, -0.8, 0.9));

        graphics.add_light(light);
        graphics.add_light(light);
        assert_eq!(graphics.lights().len(), 1);

        let other = Light::point([1.0; 4], Vector3::new(0.0, 10.0, 0.0));
        graphics.remove_light(&other);
        graphics.remove_light(&light);
        assert!(graphics.lights().is_empty());
        assert_eq!(
            log.snapshot(),
            vec![DeviceCommand::AddLight(light), DeviceCommand::RemoveLight(light)]
        );
    }

    #[test]
    fn test_begin_scene_uploads_camera_and_resets_stats() {
        let (mut graphics, log) = graphics();
        graphics.draw_mesh(&cube_mesh(), Vector3::new(0.0, 0.0, 50.0), zero(), one(), None);
        log.clear();

        graphics.begin_scene();
        assert_eq!(graphics.stats().draw_calls(), 0);
        let commands = log.snapshot();
        assert_eq!(
            commands[0],
            DeviceCommand::SetTransform(TransformKind::View, graphics.camera().view())
        );
        assert_eq!(
            commands[1],
            DeviceCommand::SetTransform(TransformKind::Projection, graphics.camera().projection())
        );
        assert_eq!(
            commands[2],
            DeviceCommand::Clear {
                color: CLEAR_COLOR,
                depth: 1.0
            }
        );
        assert_eq!(commands[3], DeviceCommand::BeginScene);

        graphics.end_scene(0.016);
        assert_eq!(log.snapshot().last(), Some(&DeviceCommand::EndScene));
    }

    #[test]
    fn test_rejected_texture_is_absent() {
        let (mut graphics, _log) = graphics();
        assert!(graphics
            .create_texture(&TextureData::solid("huge", 2048, 8, [0; 4]))
            .is_none());

        let texture = graphics
            .create_texture(&TextureData::solid("grass", 16, 16, [0, 255, 0, 255]))
            .unwrap();
        assert_eq!(graphics.stats().metrics().texture_memory, texture.memory_size());
    }
}
