//! # Terrain
//!
//! Turns a heightmap into a grid of textured quads, scatters foliage over it
//! and answers point-vs-ground collision queries.
//!
//! Every interior pixel `(i, j)` (the border ring is skipped) becomes one quad
//! of two triangles whose corners sample pixels `(i, j)`, `(i + 1, j)`,
//! `(i, j + 1)` and `(i + 1, j + 1)`. Quads are laid out column by column,
//! so the quad for pixel `(i, j)` starts at vertex
//! `((i - 1) * (height - 2) + (j - 1)) * 6`.
//!
//! Vertex colour carries the grass/rock blend weight consumed by the terrain
//! material effect: the vertex height as a fraction of the tallest vertex,
//! as a byte in every channel, forced to zero below the blend threshold.

pub mod config;
pub mod heightmap;

use std::rc::Rc;

use cgmath::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub use config::{FoliageSpecies, TerrainConfig};
pub use heightmap::Heightmap;

use crate::gfx::rendering::Graphics;
use crate::gfx::resources::assets::load_mesh;
use crate::gfx::resources::{AssetError, AssetSource, Material, MaterialEffect};
use crate::gfx::scene::{pack_color, Mesh, MeshError, Topology, Vertex};

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("failed to read heightmap: {0}")]
    Asset(#[from] AssetError),
    #[error("failed to decode heightmap {name}: {reason}")]
    Decode { name: String, reason: String },
    #[error("heightmap has {actual} samples, expected {expected}")]
    SampleCount { expected: usize, actual: usize },
    #[error("heightmap must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// One scattered foliage instance.
#[derive(Debug, Clone)]
pub struct FoliagePlacement {
    pub mesh: Rc<Mesh>,
    /// Terrain-local position
    pub position: Vector3<f32>,
}

#[derive(Debug)]
pub struct Terrain {
    mesh: Mesh,
    width: usize,
    height: usize,
    tallest: f32,
    xz_scale: f32,
    placements: Vec<FoliagePlacement>,
}

impl Terrain {
    /// Generates the terrain mesh and foliage placements.
    ///
    /// Placement only depends on the heightmap, the config and the species
    /// list, so the same inputs always give the same scatter.
    pub fn build(
        heightmap: &Heightmap,
        config: &TerrainConfig,
        foliage: &[Rc<Mesh>],
        material: Option<Rc<Material>>,
    ) -> Result<Self, TerrainError> {
        let (width, height) = (heightmap.width(), heightmap.height());
        if width < 3 || height < 3 {
            return Err(TerrainError::TooSmall { width, height });
        }

        let scale = config.xz_scale;
        let ts = config.texture_scale;
        let mut rng = StdRng::seed_from_u64(config.foliage_seed);
        let mut placements = Vec::new();
        let mut vertices = Vec::with_capacity((width - 2) * (height - 2) * 6);

        for i in 1..width - 1 {
            for j in 1..height - 1 {
                let x = i as f32 * scale;
                let z = j as f32 * scale;
                let y = |di: usize, dj: usize| heightmap.sample(i + di, j + dj) * config.y_scale;

                let roll = rng.random_range(0..config.foliage_roll.max(1));
                if roll % config.foliage_odds.max(1) == 0 && !foliage.is_empty() {
                    let species = rng.random_range(0..foliage.len());
                    placements.push(FoliagePlacement {
                        mesh: Rc::clone(&foliage[species]),
                        position: Vector3::new(x, y(0, 0), z),
                    });
                }

                let corner = |di: usize, dj: usize, uv: [f32; 2]| {
                    Vertex::new(
                        [x + di as f32 * scale, y(di, dj), z + dj as f32 * scale],
                        [0.0, 1.0, 0.0],
                        0,
                        uv,
                    )
                };
                vertices.extend_from_slice(&[
                    corner(0, 0, [0.0, ts]),
                    corner(1, 1, [ts, 0.0]),
                    corner(0, 1, [0.0, 0.0]),
                    corner(0, 0, [0.0, ts]),
                    corner(1, 0, [ts, ts]),
                    corner(1, 1, [ts, 0.0]),
                ]);
            }
        }

        let tallest = vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        for vertex in vertices.iter_mut() {
            vertex.diffuse = blend_color(vertex.position[1], tallest, config.blend_threshold);
        }

        let mut mesh = Mesh::new(vertices, Topology::Triangles)?;
        mesh.material = material;

        log::info!(
            "Built terrain {}x{}: {} vertices, {} foliage placements, tallest point {:.1}",
            width,
            height,
            mesh.vertex_count(),
            placements.len(),
            tallest
        );

        Ok(Self {
            mesh,
            width,
            height,
            tallest,
            xz_scale: scale,
            placements,
        })
    }

    /// Reads the heightmap, foliage meshes and textures named by `config`.
    ///
    /// Only a missing or unreadable heightmap is an error; foliage and
    /// textures that fail to load are logged and left out.
    pub fn load(
        graphics: &mut Graphics,
        assets: &dyn AssetSource,
        config: &TerrainConfig,
    ) -> Result<Self, TerrainError> {
        log::info!("Building terrain {}", config.heightmap);
        let bytes = assets.read(&config.heightmap)?;
        let heightmap = Heightmap::decode(&config.heightmap, &bytes)?;

        let foliage: Vec<Rc<Mesh>> = config
            .foliage
            .iter()
            .filter_map(|species| {
                let mesh = load_mesh(assets, &species.mesh)?;
                let texture = graphics.load_texture(assets, &species.texture);
                Some(Rc::new(
                    mesh.with_material(Rc::new(Material::diffuse(texture, None))),
                ))
            })
            .collect();

        let grass = graphics.load_texture(assets, &config.grass_texture);
        let detail = graphics.load_texture(assets, &config.detail_texture);
        let material = Material::diffuse(grass, Some("terrain"))
            .with_detail(detail)
            .with_effect(MaterialEffect::Terrain);

        Self::build(&heightmap, config, &foliage, Some(Rc::new(material)))
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn placements(&self) -> &[FoliagePlacement] {
        &self.placements
    }

    pub fn tallest_point(&self) -> f32 {
        self.tallest
    }

    /// Heightmap dimensions in pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when `world.y` is below any corner of the quad under `world`.
    ///
    /// Points over the first row or column of cells, before the grid origin,
    /// past its far edge or with a non-finite x or z never collide. `_radius`
    /// is not used: the test is a point against the height field.
    pub fn check_collision(&self, world: Vector3<f32>, _radius: f32) -> bool {
        if !world.x.is_finite() || !world.z.is_finite() {
            return false;
        }
        let i = (world.x / self.xz_scale).floor();
        let j = (world.z / self.xz_scale).floor();
        if i <= 0.0 || j <= 0.0 {
            return false;
        }

        let (i, j) = (i as usize, j as usize);
        if i >= self.width - 1 || j >= self.height - 1 {
            return false;
        }

        let quad = (i - 1) * (self.height - 2) + (j - 1);
        self.mesh.vertices()[quad * 6..quad * 6 + 6]
            .iter()
            .any(|v| world.y < v.position[1])
    }

    /// Draws the ground then every foliage placement, one call each.
    pub fn draw(&self, graphics: &mut Graphics, offset: Vector3<f32>) {
        let rotation = Vector3::new(0.0, 0.0, 0.0);
        let scale = Vector3::new(1.0, 1.0, 1.0);

        graphics.draw_mesh(&self.mesh, offset, rotation, scale, None);
        for placement in self.placements.iter() {
            graphics.draw_mesh(&placement.mesh, offset + placement.position, rotation, scale, None);
        }
    }
}

fn blend_color(y: f32, tallest: f32, threshold: f32) -> u32 {
    let ratio = if tallest > 0.0 { y / tallest } else { 0.0 };
    let weight = if ratio < threshold {
        0
    } else {
        (ratio.clamp(0.0, 1.0) * 255.0) as u8
    };
    pack_color(weight, weight, weight, weight)
}
