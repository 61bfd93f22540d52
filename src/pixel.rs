/// Pixel memory layout of a decoded BMP buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit BGR (24-bit BMP).
    Bgr8,
    /// 4 channels, 8-bit BGRX (32-bit BMP; 4th byte is never read).
    Bgrx8,
}

impl PixelLayout {
    /// Layout for a BMP bit depth, if it is one we decode.
    pub fn from_bits_per_pixel(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr8),
            32 => Some(Self::Bgrx8),
            _ => None,
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr8 => 3,
            Self::Bgrx8 => 4,
        }
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.bytes_per_pixel() as u16 * 8
    }
}
