//! Core rendering functionality
//!
//! Handles the device boundary, material effects and mesh submission.

pub mod device;
pub mod effects;
pub mod graphics;
pub mod recording;

// Re-export main types
pub use device::{
    CombinerArg, CombinerOp, GraphicsDevice, Light, LightKind, RenderState, TextureStageState,
    TransformKind,
};
pub use graphics::Graphics;
pub use recording::{CommandLog, DeviceCommand, RecordingDevice};
