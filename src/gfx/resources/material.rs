//! Material definitions for the fixed-function pipeline
//!
//! A [`Material`] says which textures a mesh samples, whether it is lit, and
//! which combiner [`MaterialEffect`] blends them. Materials are shared between
//! meshes through `Rc`, so every foliage instance of one species points at the
//! same material.

use super::texture::Texture;

/// Combiner program selected by a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialEffect {
    /// Single texture modulated by the vertex colour
    #[default]
    Default,
    /// Primary texture blended with the detail texture by vertex alpha
    Terrain,
}

/// Ambient term sent with every material description.
pub const MATERIAL_AMBIENT: f32 = 0.2;

/// Material definition
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub effect: MaterialEffect,
    pub texture: Option<Texture>,
    pub detail: Option<Texture>,
    pub lit: bool,
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
    pub no_z_test: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Material {
    /// Creates an unlit, untextured material. `None` names it "Unnamed".
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or("Unnamed").to_string(),
            effect: MaterialEffect::Default,
            texture: None,
            detail: None,
            lit: false,
            diffuse: [0.0; 4],
            specular: [0.0; 4],
            shininess: 0.0,
            no_z_test: false,
        }
    }

    /// Lit material with white diffuse and specular and a shininess of 50.
    pub fn diffuse(texture: Option<Texture>, name: Option<&str>) -> Self {
        Self {
            texture,
            diffuse: [1.0; 4],
            specular: [1.0; 4],
            shininess: 50.0,
            lit: true,
            ..Self::new(name)
        }
    }

    pub fn with_effect(mut self, effect: MaterialEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_detail(mut self, detail: Option<Texture>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_lit(mut self, lit: bool) -> Self {
        self.lit = lit;
        self
    }

    pub fn with_no_z_test(mut self, no_z_test: bool) -> Self {
        self.no_z_test = no_z_test;
        self
    }

    pub fn with_diffuse(mut self, diffuse: [f32; 4]) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Lighting description uploaded with `set_material`.
    pub fn desc(&self) -> MaterialDesc {
        MaterialDesc {
            diffuse: self.diffuse,
            ambient: [MATERIAL_AMBIENT, MATERIAL_AMBIENT, MATERIAL_AMBIENT, 0.0],
            specular: [self.specular[0], self.specular[1], self.specular[2], 0.0],
            power: self.shininess,
            _padding: [0.0; 3],
        }
    }
}

/// Device-facing lighting material.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialDesc {
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
    pub specular: [f32; 4],
    pub power: f32,
    _padding: [f32; 3],
}
