//! Camera-centred sky cube.
//!
//! The sky mesh stores its faces as consecutive 6-vertex ranges. Each face is
//! drawn with its own unlit material that ignores the depth buffer, so the
//! sky always sits behind the rest of the scene.

use cgmath::Vector3;

use crate::gfx::rendering::Graphics;
use crate::gfx::resources::{AssetSource, Material};
use crate::gfx::scene::Mesh;

/// Texture suffixes, in material slot order.
const FACE_SUFFIXES: [&str; 6] = ["bk", "ft", "lf", "rt", "up", "dn"];

/// Material slot drawn for each 6-vertex range of the mesh: front, right,
/// back, left, up.
const FACE_MATERIALS: [usize; 5] = [1, 3, 0, 2, 4];

/// Offset from the camera the cube is centred on.
const CAMERA_OFFSET: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.5,
};

pub struct Skybox {
    mesh: Option<Mesh>,
    materials: [Material; 6],
}

impl Skybox {
    pub fn new(mesh: Option<Mesh>) -> Self {
        let materials = std::array::from_fn(|i| {
            Material::new(Some(&format!("skybox_mat{}", i)))
                .with_no_z_test(true)
                .with_lit(false)
        });
        Self { mesh, materials }
    }

    pub fn materials(&self) -> &[Material; 6] {
        &self.materials
    }

    /// Loads `{dir}{name}_{bk,ft,lf,rt,up,dn}.bmp` into the six face materials.
    /// Faces whose texture fails to load stay untextured.
    pub fn load(&mut self, graphics: &mut Graphics, assets: &dyn AssetSource, dir: &str, name: &str) {
        for (material, suffix) in self.materials.iter_mut().zip(FACE_SUFFIXES) {
            let path = format!("{}{}_{}.bmp", dir, name, suffix);
            material.texture = graphics.load_texture(assets, &path);
        }
        log::info!("Loaded sky {}", name);
    }

    pub fn draw(&self, graphics: &mut Graphics) {
        let Some(mesh) = &self.mesh else {
            return;
        };

        let position = graphics.camera().position() + CAMERA_OFFSET;
        let rotation = Vector3::new(0.0, 0.0, 0.0);
        let scale = Vector3::new(1.0, 1.0, 1.0);
        for (face, &slot) in FACE_MATERIALS.iter().enumerate() {
            let start = face * 6;
            graphics.draw_mesh_range(
                mesh,
                start..start + 6,
                position,
                rotation,
                scale,
                Some(&self.materials[slot]),
            );
        }
    }
}
