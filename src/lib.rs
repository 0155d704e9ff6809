// src/lib.rs
//! Planes3D
//!
//! A small flight scene: an aircraft flying over heightmap terrain and water
//! inside a sky cube, chased by a scripted enemy. Rendering goes through a
//! fixed-function [`gfx::GraphicsDevice`] so the scene logic runs against any
//! backend, including the recording device used in tests.

pub mod app;
pub mod game;
pub mod gfx;
pub mod input;
pub mod math;
pub mod performance;
pub mod prelude;
pub mod terrain;

// Re-export main types for convenience
pub use app::{init_logging, AppConfig, FlightApp};
