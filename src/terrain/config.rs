//! Terrain build settings.

/// A foliage mesh and the texture it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct FoliageSpecies {
    pub mesh: String,
    pub texture: String,
}

impl FoliageSpecies {
    pub fn new(mesh: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            texture: texture.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    pub heightmap: String,
    pub grass_texture: String,
    /// Blended over the grass on tall ground
    pub detail_texture: String,
    pub foliage: Vec<FoliageSpecies>,
    /// World units between neighbouring heightmap pixels
    pub xz_scale: f32,
    /// Height of a full-brightness pixel
    pub y_scale: f32,
    /// Fraction of the tallest point below which the detail texture is hidden
    pub blend_threshold: f32,
    pub texture_scale: f32,
    /// A cell gets foliage when a roll in `0..foliage_roll` is a multiple of `foliage_odds`
    pub foliage_roll: u32,
    pub foliage_odds: u32,
    pub foliage_seed: u64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            heightmap: "data/heightmap.bmp".to_string(),
            grass_texture: "data/textures/grass.bmp".to_string(),
            detail_texture: "data/textures/ground.bmp".to_string(),
            foliage: vec![
                FoliageSpecies::new("data/geometry/bush08.obj", "data/textures/bush08.bmp"),
                FoliageSpecies::new("data/geometry/tree04.obj", "data/textures/tree04.bmp"),
                FoliageSpecies::new("data/geometry/bush08.obj", "data/textures/bush05.bmp"),
            ],
            xz_scale: 8.0,
            y_scale: 35.0,
            blend_threshold: 0.4,
            texture_scale: 0.2,
            foliage_roll: 32,
            foliage_odds: 8,
            foliage_seed: 0,
        }
    }
}

impl TerrainConfig {
    pub fn with_heightmap(mut self, path: impl Into<String>) -> Self {
        self.heightmap = path.into();
        self
    }

    pub fn with_foliage(mut self, foliage: Vec<FoliageSpecies>) -> Self {
        self.foliage = foliage;
        self
    }

    pub fn with_foliage_seed(mut self, seed: u64) -> Self {
        self.foliage_seed = seed;
        self
    }

    pub fn with_scale(mut self, xz_scale: f32, y_scale: f32) -> Self {
        self.xz_scale = xz_scale;
        self.y_scale = y_scale;
        self
    }
}
