//! Headless device that records every call it receives.

use std::cell::RefCell;
use std::rc::Rc;

use cgmath::Matrix4;

use super::device::{GraphicsDevice, Light, RenderState, TextureStageState, TransformKind};
use crate::gfx::resources::{AssetError, MaterialDesc, TextureData, TextureId};
use crate::gfx::scene::Vertex;

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    BeginScene,
    EndScene,
    Clear { color: wgpu::Color, depth: f32 },
    SetTransform(TransformKind, Matrix4<f32>),
    SetTexture(u32, Option<TextureId>),
    SetTextureStageState(u32, TextureStageState),
    SetRenderState(RenderState),
    SetMaterial(MaterialDesc),
    AddLight(Light),
    RemoveLight(Light),
    CreateTexture { id: TextureId, width: u32, height: u32 },
    Draw {
        topology: wgpu::PrimitiveTopology,
        vertex_count: usize,
        lit: bool,
    },
}

/// Shared handle onto a [`RecordingDevice`]'s command list.
///
/// The device usually ends up boxed inside the renderer; keep a log handle to
/// inspect what it received.
#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<DeviceCommand>>>);

impl CommandLog {
    fn push(&self, command: DeviceCommand) {
        self.0.borrow_mut().push(command);
    }

    pub fn snapshot(&self) -> Vec<DeviceCommand> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn draw_count(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|command| matches!(command, DeviceCommand::Draw { .. }))
            .count()
    }
}

/// [`GraphicsDevice`] that keeps a log of commands instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    log: CommandLog,
    next_texture: u32,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.log.snapshot()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn begin_scene(&mut self) {
        self.log.push(DeviceCommand::BeginScene);
    }

    fn end_scene(&mut self) {
        self.log.push(DeviceCommand::EndScene);
    }

    fn clear(&mut self, color: wgpu::Color, depth: f32) {
        self.log.push(DeviceCommand::Clear { color, depth });
    }

    fn set_transform(&mut self, kind: TransformKind, matrix: &Matrix4<f32>) {
        self.log.push(DeviceCommand::SetTransform(kind, *matrix));
    }

    fn set_texture(&mut self, stage: u32, texture: Option<TextureId>) {
        self.log.push(DeviceCommand::SetTexture(stage, texture));
    }

    fn set_texture_stage_state(&mut self, stage: u32, state: TextureStageState) {
        self.log
            .push(DeviceCommand::SetTextureStageState(stage, state));
    }

    fn set_render_state(&mut self, state: RenderState) {
        self.log.push(DeviceCommand::SetRenderState(state));
    }

    fn set_material(&mut self, material: &MaterialDesc) {
        self.log.push(DeviceCommand::SetMaterial(*material));
    }

    fn add_light(&mut self, light: &Light) {
        self.log.push(DeviceCommand::AddLight(*light));
    }

    fn remove_light(&mut self, light: &Light) {
        self.log.push(DeviceCommand::RemoveLight(*light));
    }

    fn create_texture(&mut self, data: &TextureData) -> Result<TextureId, AssetError> {
        data.validate()?;
        self.next_texture += 1;
        let id = TextureId(self.next_texture);
        self.log.push(DeviceCommand::CreateTexture {
            id,
            width: data.width,
            height: data.height,
        });
        Ok(id)
    }

    fn draw_primitives(&mut self, topology: wgpu::PrimitiveTopology, vertices: &[Vertex], lit: bool) {
        self.log.push(DeviceCommand::Draw {
            topology,
            vertex_count: vertices.len(),
            lit,
        });
    }
}
