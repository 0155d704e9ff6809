//! Texture handles and decoded pixel data.

use super::assets::AssetError;

/// Smallest accepted edge length, in pixels.
pub const MIN_TEXTURE_SIZE: u32 = 8;
/// Largest accepted edge length, in pixels.
pub const MAX_TEXTURE_SIZE: u32 = 1024;

/// Device-side handle returned by `GraphicsDevice::create_texture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A texture living on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Bytes occupied at 16 bits per pixel, the format the device stores.
    pub fn memory_size(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }
}

/// Decoded RGBA8 pixels ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn new(name: impl Into<String>, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            rgba,
        }
    }

    /// Single-colour texture, mostly useful for tests and placeholders.
    pub fn solid(name: impl Into<String>, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.repeat(width as usize * height as usize);
        Self::new(name, width, height, pixels)
    }

    /// Checks edge lengths and buffer length before the data reaches a device.
    pub fn validate(&self) -> Result<(), AssetError> {
        validate_dimensions(&self.name, self.width, self.height)?;
        let expected = self.width as usize * self.height as usize * 4;
        if self.rgba.len() != expected {
            return Err(AssetError::Decode {
                name: self.name.clone(),
                reason: format!("expected {} bytes of RGBA, got {}", expected, self.rgba.len()),
            });
        }
        Ok(())
    }
}

pub fn validate_dimensions(name: &str, width: u32, height: u32) -> Result<(), AssetError> {
    let in_range = |edge: u32| (MIN_TEXTURE_SIZE..=MAX_TEXTURE_SIZE).contains(&edge);
    if in_range(width) && in_range(height) {
        Ok(())
    } else {
        Err(AssetError::SizeOutOfRange {
            name: name.to_string(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_limits() {
        assert!(validate_dimensions("a", 8, 8).is_ok());
        assert!(validate_dimensions("a", 1024, 512).is_ok());
        assert!(validate_dimensions("a", 7, 64).is_err());
        assert!(validate_dimensions("a", 64, 2048).is_err());
    }

    #[test]
    fn test_validate_checks_buffer_length() {
        let mut data = TextureData::solid("grass", 16, 16, [0, 255, 0, 255]);
        assert!(data.validate().is_ok());

        data.rgba.pop();
        assert!(matches!(data.validate(), Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_memory_size_is_two_bytes_per_pixel() {
        let texture = Texture {
            id: TextureId(1),
            width: 64,
            height: 32,
        };
        assert_eq!(texture.memory_size(), 4096);
    }
}
