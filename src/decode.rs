use std::io::{self, Read};

use enough::Stop;
use log::debug;

use crate::error::BmpArtError;
use crate::header::BmpHeaders;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Owned pixel bytes of one decoded BMP, in storage order.
///
/// Rows are tightly packed (no 4-byte row padding) and kept in the order they
/// appear in the file, so a conventional bottom-up BMP is held upside down.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Access the raw pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of pixel `(x, y)`: `(x + y * width) * bytes_per_pixel`.
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (x as usize + y as usize * self.width as usize) * self.layout.bytes_per_pixel()
    }

    /// `[blue, green, red]` of pixel `(x, y)`. Any 4th byte is skipped.
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn bgr_at(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index_of(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

/// `width * height * bits_per_pixel / 8`, with no row padding.
pub fn data_size(headers: &BmpHeaders) -> Result<usize, BmpArtError> {
    let too_large = || BmpArtError::DimensionsTooLarge {
        width: headers.width(),
        height: headers.height(),
    };
    let width = usize::try_from(headers.width()).map_err(|_| too_large())?;
    let height = usize::try_from(headers.height()).map_err(|_| too_large())?;
    width
        .checked_mul(height)
        .and_then(|wh| wh.checked_mul(usize::from(headers.bits_per_pixel())))
        .map(|bits| bits / 8)
        .ok_or_else(too_large)
}

/// Read the pixel array in one bulk read from a stream positioned at
/// `pixel_data_offset`.
///
/// The buffer grows only as bytes arrive, so a header claiming more data than
/// the stream holds fails with `UnexpectedEof` instead of allocating the
/// claimed size up front. The buffer is never zero-padded.
pub fn decode_pixels<R: Read>(
    reader: &mut R,
    headers: &BmpHeaders,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BmpArtError> {
    let size = data_size(headers)?;
    // Non-negative after data_size succeeded.
    let width = headers.width() as u32;
    let height = headers.height() as u32;

    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(size)?;
    }
    stop.check()?;

    debug!("reading {size} bytes of pixel data");
    let mut pixels = Vec::new();
    reader.by_ref().take(size as u64).read_to_end(&mut pixels)?;
    if pixels.len() < size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("pixel data truncated: need {size} bytes, got {}", pixels.len()),
        )
        .into());
    }

    Ok(PixelBuffer {
        pixels,
        width,
        height,
        layout: headers.layout,
    })
}
