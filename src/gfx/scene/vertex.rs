//! # Vertex Data Structures
//!
//! The single vertex format submitted to the graphics device.

/// A textured, coloured vertex.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute keeps the layout stable so a device backend can
/// upload a `&[Vertex]` straight through `bytemuck::cast_slice`.
///
/// # Fields
///
/// - `position`: 3D position coordinates [x, y, z]
/// - `normal`: normal vector used by lit materials
/// - `diffuse`: packed ARGB colour; terrain stores its blend weight here
/// - `uv`: texture coordinates [u, v]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub diffuse: u32,
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], diffuse: u32, uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            diffuse,
            uv,
        }
    }

    pub fn alpha(&self) -> u8 {
        (self.diffuse >> 24) as u8
    }
}

/// Packs an ARGB colour as `A << 24 | R << 16 | G << 8 | B`.
pub fn pack_color(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_color_channel_order() {
        assert_eq!(pack_color(0x11, 0x22, 0x33, 0x44), 0x1122_3344);
        assert_eq!(pack_color(255, 255, 255, 255), WHITE);
    }

    #[test]
    fn test_alpha_reads_top_byte() {
        let vertex = Vertex::new([0.0; 3], [0.0, 1.0, 0.0], pack_color(110, 255, 255, 255), [0.0; 2]);
        assert_eq!(vertex.alpha(), 110);
    }

    #[test]
    fn test_vertex_casts_to_bytes() {
        let vertices = [Vertex::new([1.0, 2.0, 3.0], [0.0; 3], WHITE, [0.5, 0.5]); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
    }
}
