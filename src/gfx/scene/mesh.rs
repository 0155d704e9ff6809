//! # Mesh
//!
//! A flat, non-indexed vertex list with a topology, an optional shared
//! material and a precomputed culling radius.

use std::rc::Rc;

use thiserror::Error;

use super::vertex::Vertex;
use crate::gfx::resources::material::Material;

/// How the vertex list is grouped into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    Lines,
    #[default]
    Triangles,
    Points,
}

impl Topology {
    pub fn primitive(&self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
            Topology::Points => wgpu::PrimitiveTopology::PointList,
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MeshError {
    #[error("triangle list needs a multiple of 3 vertices, got {0}")]
    IncompleteTriangle(usize),
}

#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    topology: Topology,
    radius: f32,
    pub material: Option<Rc<Material>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, topology: Topology) -> Result<Self, MeshError> {
        if topology == Topology::Triangles && vertices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle(vertices.len()));
        }
        let radius = bounding_radius(&vertices);
        Ok(Self {
            vertices,
            topology,
            radius,
            material: None,
        })
    }

    pub fn with_material(mut self, material: Rc<Material>) -> Self {
        self.material = Some(material);
        self
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Culling radius; zero disables culling for the mesh.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Shifts the V coordinate of every vertex. Positions are untouched, so
    /// the radius stays valid.
    pub fn offset_uv(&mut self, dv: f32) {
        for vertex in self.vertices.iter_mut() {
            vertex.uv[1] += dv;
        }
    }
}

/// Largest per-axis maximum across all vertices, made positive.
///
/// This is looser than a real bounding sphere: it ignores how far vertices
/// sit from the origin on the other two axes and ignores negative extents.
/// Culling is tuned against it, so keep it as is.
fn bounding_radius(vertices: &[Vertex]) -> f32 {
    if vertices.is_empty() {
        return 0.0;
    }
    let mut max = [f32::MIN; 3];
    for vertex in vertices {
        for (axis, value) in max.iter_mut().zip(vertex.position.iter()) {
            *axis = axis.max(*value);
        }
    }
    max[0].max(max[1]).max(max[2]).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::vertex::WHITE;

    fn vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new([x, y, z], [0.0, 1.0, 0.0], WHITE, [0.0, 0.0])
    }

    #[test]
    fn test_triangle_list_must_be_complete() {
        let err = Mesh::new(vec![vertex(0.0, 0.0, 0.0); 4], Topology::Triangles).unwrap_err();
        assert_eq!(err, MeshError::IncompleteTriangle(4));

        assert!(Mesh::new(vec![vertex(0.0, 0.0, 0.0); 4], Topology::Lines).is_ok());
    }

    #[test]
    fn test_radius_is_largest_axis_maximum() {
        let mesh = Mesh::new(
            vec![vertex(1.0, 2.0, -9.0), vertex(-4.0, 5.0, 0.5), vertex(3.0, 0.0, 0.0)],
            Topology::Triangles,
        )
        .unwrap();
        // -9 on Z never contributes; the largest per-axis maximum is Y = 5
        assert_eq!(mesh.radius(), 5.0);
    }

    #[test]
    fn test_radius_of_negative_mesh_is_absolute() {
        let mesh = Mesh::new(
            vec![vertex(-2.0, -3.0, -4.0), vertex(-6.0, -7.0, -8.0), vertex(-5.0, -5.0, -5.0)],
            Topology::Triangles,
        )
        .unwrap();
        assert_eq!(mesh.radius(), 2.0);
    }

    #[test]
    fn test_empty_mesh_is_never_culled() {
        let mesh = Mesh::new(Vec::new(), Topology::Triangles).unwrap();
        assert_eq!(mesh.radius(), 0.0);
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_offset_uv_moves_v_only() {
        let mut mesh = Mesh::new(vec![vertex(1.0, 1.0, 1.0); 3], Topology::Triangles).unwrap();
        mesh.offset_uv(0.25);
        for v in mesh.vertices() {
            assert_eq!(v.uv, [0.0, 0.25]);
            assert_eq!(v.position, [1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_topology_maps_to_primitive() {
        assert_eq!(Topology::Lines.primitive(), wgpu::PrimitiveTopology::LineList);
        assert_eq!(Topology::Points.primitive(), wgpu::PrimitiveTopology::PointList);
        assert_eq!(Topology::Triangles.primitive(), wgpu::PrimitiveTopology::TriangleList);
    }
}
