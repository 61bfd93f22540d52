//! BMP file header and legacy info header parsing.
//!
//! Both records are fixed-width and read back to back: 14 bytes of file
//! header, then the 40-byte `BITMAPINFOHEADER`. Fields are pulled out of the
//! raw bytes by offset with explicit little-endian decoding; the header's own
//! `header_size` field is recorded but does not change how much is read.

use std::io::{Read, Seek, SeekFrom};

use log::{debug, info};

use crate::error::BmpArtError;
use crate::pixel::PixelLayout;

/// `"BM"`.
pub const BMP_MAGIC: [u8; 2] = *b"BM";
pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;

// ── Field cursor ────────────────────────────────────────────────────

/// Little-endian field reader over a fully-read header record.
struct FieldCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpArtError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| BmpArtError::InvalidHeader("header record truncated".into()))?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpArtError> {
        self.read_fixed_bytes::<2>().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpArtError> {
        self.read_fixed_bytes::<4>().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpArtError> {
        self.read_fixed_bytes::<4>().map(i32::from_le_bytes)
    }
}

// ── Records ─────────────────────────────────────────────────────────

/// The 14-byte `BITMAPFILEHEADER`.
///
/// | offset | size | field |
/// |---|---|---|
/// | 0 | 2 | signature |
/// | 2 | 4 | file size |
/// | 6 | 4 | reserved |
/// | 10 | 4 | pixel data offset |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: [u8; 4],
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Decode the record. Does not validate the signature.
    pub fn from_bytes(raw: &[u8; FILE_HEADER_LEN]) -> Result<Self, BmpArtError> {
        let mut c = FieldCursor::new(raw);
        Ok(Self {
            signature: c.read_fixed_bytes()?,
            file_size: c.get_u32_le()?,
            reserved: c.read_fixed_bytes()?,
            pixel_data_offset: c.get_u32_le()?,
        })
    }

    pub fn is_bitmap(&self) -> bool {
        self.signature == BMP_MAGIC
    }
}

/// The 40-byte `BITMAPINFOHEADER`.
///
/// | offset | size | field |
/// |---|---|---|
/// | 0 | 4 | header size |
/// | 4 | 4 | width (signed) |
/// | 8 | 4 | height (signed) |
/// | 12 | 2 | colour planes |
/// | 14 | 2 | bits per pixel |
/// | 16 | 4 | compression |
/// | 20 | 4 | image data size |
/// | 24 | 4 | horizontal resolution |
/// | 28 | 4 | vertical resolution |
/// | 32 | 4 | palette colours used |
/// | 36 | 4 | important colours |
///
/// Only `bits_per_pixel` is validated. Planes, compression and the image
/// size field are carried as read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn from_bytes(raw: &[u8; INFO_HEADER_LEN]) -> Result<Self, BmpArtError> {
        let mut c = FieldCursor::new(raw);
        Ok(Self {
            header_size: c.get_u32_le()?,
            width: c.get_i32_le()?,
            height: c.get_i32_le()?,
            planes: c.get_u16_le()?,
            bits_per_pixel: c.get_u16_le()?,
            compression: c.get_u32_le()?,
            image_size: c.get_u32_le()?,
            x_pixels_per_meter: c.get_i32_le()?,
            y_pixels_per_meter: c.get_i32_le()?,
            colors_used: c.get_u32_le()?,
            colors_important: c.get_u32_le()?,
        })
    }
}

/// Both header records of a validated BMP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub layout: PixelLayout,
}

impl BmpHeaders {
    pub fn width(&self) -> i32 {
        self.info.width
    }

    pub fn height(&self) -> i32 {
        self.info.height
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.info.bits_per_pixel
    }
}

// ── Stream parsing ──────────────────────────────────────────────────

/// Read and validate both headers from a stream positioned at offset 0.
///
/// On success the stream is left at `pixel_data_offset`, whatever the header
/// reads consumed.
pub fn read_headers<R: Read + Seek>(reader: &mut R) -> Result<BmpHeaders, BmpArtError> {
    let mut raw_file = [0u8; FILE_HEADER_LEN];
    reader.read_exact(&mut raw_file)?;
    let file = FileHeader::from_bytes(&raw_file)?;

    if !file.is_bitmap() {
        return Err(BmpArtError::NotABitmap {
            found: file.signature,
        });
    }

    let mut raw_info = [0u8; INFO_HEADER_LEN];
    reader.read_exact(&mut raw_info)?;
    let info = InfoHeader::from_bytes(&raw_info)?;

    info!("Bit: {}", info.bits_per_pixel);

    let layout = PixelLayout::from_bits_per_pixel(info.bits_per_pixel)
        .ok_or(BmpArtError::UnsupportedPixelFormat(info.bits_per_pixel))?;

    if info.width < 0 || info.height < 0 {
        return Err(BmpArtError::InvalidHeader(format!(
            "negative dimensions {}x{} (top-down rows) unsupported",
            info.width, info.height
        )));
    }

    info!("Width: {}", info.width);
    info!("Height: {}", info.height);
    debug!(
        "header size {}, pixel data at offset {}",
        info.header_size, file.pixel_data_offset
    );

    reader.seek(SeekFrom::Start(u64::from(file.pixel_data_offset)))?;

    Ok(BmpHeaders { file, info, layout })
}
