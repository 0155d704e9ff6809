//! # Planes3D Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use planes3d::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     planes3d::init_logging();
//!     let mut app = FlightApp::new(
//!         Box::new(RecordingDevice::new()),
//!         &FileAssets::new("."),
//!         AppConfig::default(),
//!     )?;
//!     app.frame(1.0 / 60.0);
//!     Ok(())
//! }
//! ```

// Re-export core application types
pub use crate::app::{init_logging, AppConfig, FlightApp};

// Re-export game and scene types
pub use crate::game::{
    Enemy, Game, GameConfig, GameObject, ObjectRef, Player, Scene, SceneCommands, Transform,
    UpdateContext, Water,
};
pub use crate::terrain::{Terrain, TerrainConfig};

// Re-export graphics types
pub use crate::gfx::camera::{Camera, CameraSettings, Frustum};
pub use crate::gfx::rendering::{Graphics, GraphicsDevice, Light, RecordingDevice};
pub use crate::gfx::resources::{AssetSource, FileAssets, Material, MaterialEffect, MemoryAssets};
pub use crate::gfx::scene::{Mesh, Topology, Vertex};
pub use crate::gfx::Skybox;

// Re-export input and performance monitoring
pub use crate::input::{Input, KeyboardState};
pub use crate::performance::{FrameMetrics, FrameStats, StatsConfig};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3};
