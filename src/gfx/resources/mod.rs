//! # Resources
//!
//! Materials, textures and the asset loaders that produce them.

pub mod assets;
pub mod material;
pub mod texture;

pub use assets::{AssetError, AssetSource, FileAssets, MemoryAssets};
pub use material::{Material, MaterialDesc, MaterialEffect};
pub use texture::{Texture, TextureData, TextureId};
