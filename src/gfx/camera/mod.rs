//! # Camera Module
//!
//! The single view camera and the frustum it derives for visibility culling.
//!
//! - [`Camera`] - position/rotation in degrees, lazily rebuilt matrices
//! - [`CameraSettings`] - field of view, aspect ratio and clip planes
//! - [`Frustum`] - six normalized clip planes with point and sphere tests

pub mod flight_camera;
pub mod frustum;

// Re-export main types
pub use flight_camera::{Camera, CameraMatrices, CameraSettings};
pub use frustum::Frustum;
