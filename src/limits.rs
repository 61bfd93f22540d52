use crate::error::BmpArtError;

/// Bounds on what a BMP header may claim before any pixel data is read.
///
/// Checked once the signature and bit depth are accepted. Width and height
/// are the header's own values; `max_memory_bytes` is compared against the
/// packed `width * height * bpp / 8` pixel buffer. Every bound is `None`
/// (unbounded) by default.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum glyph count of the rendered art (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the BGR(X) pixel buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject header dimensions outside the configured bounds.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpArtError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(BmpArtError::LimitExceeded(format!(
                    "BMP width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(BmpArtError::LimitExceeded(format!(
                    "BMP height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(BmpArtError::LimitExceeded(format!(
                    "{pixels} pixels exceed limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Reject a pixel buffer of `bytes` above `max_memory_bytes`.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BmpArtError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(BmpArtError::LimitExceeded(format!(
                    "pixel buffer of {bytes} bytes exceeds limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
