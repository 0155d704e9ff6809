//! # Graphics Module
//!
//! Everything between game objects and the graphics device: the camera and
//! its frustum, mesh data, materials and textures, and the renderer that
//! culls and submits draw calls.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Euler-angle camera with lazily rebuilt matrices
//! - **Rendering** ([`rendering`]) - device trait, material effects, [`Graphics`]
//! - **Mesh Data** ([`scene`]) - vertices and meshes
//! - **Resource Management** ([`resources`]) - materials, textures and asset loading
//! - **Sky** ([`skybox`]) - camera-centred sky cube
//!
//! ## Usage
//!
//! ```no_run
//! use planes3d::gfx::{Graphics, RecordingDevice};
//! use planes3d::gfx::camera::CameraSettings;
//! use planes3d::performance::StatsConfig;
//!
//! let mut graphics = Graphics::new(
//!     Box::new(RecordingDevice::new()),
//!     CameraSettings::default(),
//!     StatsConfig::default(),
//! );
//! graphics.begin_scene();
//! // ... draw meshes ...
//! graphics.end_scene(1.0 / 60.0);
//! ```

pub mod camera;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod skybox;

// Re-export commonly used types
pub use camera::Camera;
pub use rendering::{Graphics, GraphicsDevice, RecordingDevice};
pub use skybox::Skybox;
