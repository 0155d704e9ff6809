//! Fixed-function graphics device boundary
//!
//! The renderer never talks to a concrete API. Everything it needs from a
//! device is expressed through [`GraphicsDevice`]: transforms, texture stages,
//! combiner state, lights and immediate primitive submission.

use cgmath::{Matrix4, Vector3};

use crate::gfx::resources::{AssetError, MaterialDesc, TextureData, TextureId};
use crate::gfx::scene::Vertex;

/// Which transform slot `set_transform` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    World,
    View,
    Projection,
}

/// Texture combiner operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinerOp {
    Disable,
    SelectArg1,
    Modulate,
    /// Lerp between the two arguments by the interpolated vertex alpha
    BlendDiffuseAlpha,
}

/// Texture combiner input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinerArg {
    Diffuse,
    Texture,
    /// Output of the previous stage
    Current,
}

/// One texture stage setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStageState {
    ColorOp(CombinerOp),
    ColorArg1(CombinerArg),
    ColorArg2(CombinerArg),
    AlphaOp(CombinerOp),
    AlphaArg1(CombinerArg),
    AlphaArg2(CombinerArg),
}

/// Pipeline state outside the texture stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Constant colour available to the combiners, packed ARGB
    TextureFactor(u32),
    /// Depth comparison; `Always` disables the z-test
    DepthCompare(wgpu::CompareFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 4],
    pub direction: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Light {
    pub fn directional(color: [f32; 4], direction: Vector3<f32>) -> Self {
        Self {
            kind: LightKind::Directional,
            color,
            direction,
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn point(color: [f32; 4], position: Vector3<f32>) -> Self {
        Self {
            kind: LightKind::Point,
            color,
            direction: Vector3::new(0.0, 0.0, 0.0),
            position,
        }
    }
}

/// Operations the renderer issues against a device backend.
pub trait GraphicsDevice {
    fn begin_scene(&mut self);
    fn end_scene(&mut self);
    /// Clears the colour target and the depth buffer.
    fn clear(&mut self, color: wgpu::Color, depth: f32);
    fn set_transform(&mut self, kind: TransformKind, matrix: &Matrix4<f32>);
    fn set_texture(&mut self, stage: u32, texture: Option<TextureId>);
    fn set_texture_stage_state(&mut self, stage: u32, state: TextureStageState);
    fn set_render_state(&mut self, state: RenderState);
    fn set_material(&mut self, material: &MaterialDesc);
    fn add_light(&mut self, light: &Light);
    fn remove_light(&mut self, light: &Light);
    fn create_texture(&mut self, data: &TextureData) -> Result<TextureId, AssetError>;
    fn draw_primitives(&mut self, topology: wgpu::PrimitiveTopology, vertices: &[Vertex], lit: bool);
}
