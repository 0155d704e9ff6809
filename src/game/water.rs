//! Translucent water plane with a scrolling texture.

use std::rc::Rc;

use cgmath::Vector3;

use super::{GameObject, Transform, UpdateContext};
use crate::gfx::rendering::Graphics;
use crate::gfx::resources::{Material, Texture};
use crate::gfx::scene::{pack_color, Mesh, MeshError, Topology, Vertex};

/// Quads per side
pub const WATER_SIZE: usize = 64;
/// World units per quad
pub const WATER_SCALE: f32 = 2.0;
pub const WATER_ALPHA: u8 = 110;
const TEXTURE_SCALE: f32 = 1.0;
/// Where the plane is drawn
pub const WATER_OFFSET: Vector3<f32> = Vector3::new(0.0, -7.0, 0.0);

pub struct Water {
    transform: Transform,
    mesh: Mesh,
    time: f32,
}

impl Water {
    pub fn new(texture: Option<Texture>) -> Result<Self, MeshError> {
        let color = pack_color(WATER_ALPHA, 255, 255, 255);
        let normal = [0.0, 1.0, 0.0];
        let ts = TEXTURE_SCALE;

        let mut vertices = Vec::with_capacity(WATER_SIZE * WATER_SIZE * 6);
        for i in 0..WATER_SIZE {
            for j in 0..WATER_SIZE {
                let x = i as f32 * WATER_SCALE;
                let z = j as f32 * WATER_SCALE;
                let corner = |dx: f32, dz: f32, uv: [f32; 2]| {
                    Vertex::new([x + dx, 0.0, z + dz], normal, color, uv)
                };
                vertices.extend_from_slice(&[
                    corner(0.0, 0.0, [0.0, ts]),
                    corner(WATER_SCALE, WATER_SCALE, [ts, 0.0]),
                    corner(0.0, WATER_SCALE, [0.0, 0.0]),
                    corner(0.0, 0.0, [0.0, ts]),
                    corner(WATER_SCALE, 0.0, [ts, ts]),
                    corner(WATER_SCALE, WATER_SCALE, [ts, 0.0]),
                ]);
            }
        }

        let material = Material::diffuse(texture, Some("water"));
        let mesh = Mesh::new(vertices, Topology::Triangles)?.with_material(Rc::new(material));
        Ok(Self {
            transform: Transform::at(WATER_OFFSET),
            mesh,
            time: 0.0,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl GameObject for Water {
    fn name(&self) -> &str {
        "water"
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Scrolls the texture along V. The step is per tick, not per second.
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
        self.time += 0.1;
        self.mesh.offset_uv((self.time * 0.001).sin());
    }

    fn draw(&self, graphics: &mut Graphics) {
        let t = &self.transform;
        graphics.draw_mesh(&self.mesh, t.position, t.rotation, Vector3::new(1.0, 1.0, 1.0), None);
    }
}
