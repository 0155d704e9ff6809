//! # Mesh Data
//!
//! Vertex format and the mesh container drawn by the renderer.
//!
//! - [`Vertex`] - position, normal, packed ARGB colour and UV
//! - [`Mesh`] - flat vertex list, topology, shared material and culling radius

pub mod mesh;
pub mod vertex;

// Re-export main types
pub use mesh::{Mesh, MeshError, Topology};
pub use vertex::{pack_color, Vertex};
