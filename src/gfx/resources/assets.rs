//! Asset reading and decoding
//!
//! Assets are fetched as raw bytes through an [`AssetSource`] and decoded here:
//! images through `image`, Wavefront OBJ meshes through `tobj`. Loading never
//! panics; the `load_*` helpers log failures and hand back `None` so callers
//! can carry on without the asset.

use std::collections::HashMap;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;

use thiserror::Error;

use super::texture::{validate_dimensions, TextureData};
use crate::gfx::scene::{vertex::WHITE, Mesh, MeshError, Topology, Vertex};

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("asset {0} not found")]
    NotFound(String),
    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },
    #[error("{name} is {width}x{height}, textures must be 8 to 1024 pixels per side")]
    SizeOutOfRange {
        name: String,
        width: u32,
        height: u32,
    },
    #[error("invalid mesh data in {name}: {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshError,
    },
    #[error("device rejected texture {0}")]
    Device(String),
}

/// Read-only byte store the game loads its assets from.
pub trait AssetSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileAssets {
    root: PathBuf,
}

impl FileAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FileAssets {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(full.display().to_string())
            } else {
                AssetError::Io {
                    path: full.display().to_string(),
                    source,
                }
            }
        })
    }
}

/// In-memory asset store keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn with_file(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

/// Decodes any supported image format into RGBA8 and checks its size.
pub fn decode_texture(name: &str, bytes: &[u8]) -> Result<TextureData, AssetError> {
    let image = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    validate_dimensions(name, width, height)?;

    Ok(TextureData::new(name, width, height, rgba.into_raw()))
}

/// Parses an OBJ file into a flat triangle list with white vertex colour.
///
/// Faces are triangulated and the index buffer is expanded, since meshes are
/// drawn without indices. Missing normals or texture coordinates become zero.
pub fn decode_obj(name: &str, bytes: &[u8]) -> Result<Vec<Vertex>, AssetError> {
    let mut reader = BufReader::new(Cursor::new(bytes));
    let (models, _) = tobj::load_obj_buf(
        &mut reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )
    .map_err(|e| AssetError::Decode {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    let mut vertices = Vec::new();
    for model in models.iter() {
        let mesh = &model.mesh;
        for &index in mesh.indices.iter() {
            let i = index as usize;
            let position = [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ];
            let normal = if mesh.normals.len() >= (i + 1) * 3 {
                [mesh.normals[i * 3], mesh.normals[i * 3 + 1], mesh.normals[i * 3 + 2]]
            } else {
                [0.0; 3]
            };
            let uv = if mesh.texcoords.len() >= (i + 1) * 2 {
                [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
            } else {
                [0.0; 2]
            };
            vertices.push(Vertex::new(position, normal, WHITE, uv));
        }
    }

    log::debug!("Decoded {} with {} vertices", name, vertices.len());
    Ok(vertices)
}

/// Loads an OBJ mesh, logging and returning `None` on failure.
pub fn load_mesh(assets: &dyn AssetSource, path: &str) -> Option<Mesh> {
    let result = assets.read(path).and_then(|bytes| {
        let vertices = decode_obj(path, &bytes)?;
        Mesh::new(vertices, Topology::Triangles).map_err(|source| AssetError::Mesh {
            name: path.to_string(),
            source,
        })
    });

    match result {
        Ok(mesh) => {
            log::info!("Loaded mesh {} ({} vertices)", path, mesh.vertex_count());
            Some(mesh)
        }
        Err(e) => {
            log::warn!("Mesh {} can't be used: {}", path, e);
            None
        }
    }
}

/// Reads and decodes a texture, logging and returning `None` on failure.
pub fn load_texture_data(assets: &dyn AssetSource, path: &str) -> Option<TextureData> {
    match assets.read(path).and_then(|bytes| decode_texture(path, &bytes)) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Texture {} can't be used: {}", path, e);
            None
        }
    }
}
