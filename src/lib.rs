//! # zenbmpart
//!
//! Decodes uncompressed 24-bit and 32-bit BMP files and renders them as
//! two-glyph text art.
//!
//! ## Pipeline
//!
//! 1. [`read_headers`] reads the 14-byte file header and the 40-byte info
//!    header, checks the `BM` signature and the bit depth, and seeks to the
//!    pixel data offset.
//! 2. [`decode_pixels`] reads `width * height * bpp / 8` bytes in one go.
//! 3. [`render()`] prints one glyph per pixel: light when blue, green and red
//!    are all above 127, dark otherwise.
//!
//! [`BmpReader`] wraps the three steps and owns the pixel buffer between
//! `open` and `close`.
//!
//! ## Compatibility notes
//!
//! - Rows are printed in storage order. BMP stores rows bottom-up, so most
//!   files render upside down.
//! - Rows are assumed tightly packed. Files whose row size is not a multiple
//!   of 4 bytes (e.g. 24-bit with a width not divisible by 4) carry padding
//!   that is read as pixel data, which skews later rows.
//! - The 4th byte of 32-bit pixels is ignored.
//!
//! ## Non-Goals
//!
//! - Paletted, RLE or bitfield BMPs
//! - Top-down (negative height) BMPs
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmpart::{BmpReader, Unstoppable};
//!
//! let mut reader = BmpReader::new();
//! reader.open("image.bmp", Unstoppable)?;
//! print!("{}", reader.render_to_string(Unstoppable)?);
//! reader.close();
//! # Ok::<(), zenbmpart::BmpArtError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod error;
mod header;
mod limits;
mod pixel;
mod reader;
pub mod render;

// Re-exports
pub use decode::{PixelBuffer, data_size, decode_pixels};
pub use enough::{Stop, Unstoppable};
pub use error::BmpArtError;
pub use header::{
    BMP_MAGIC, BmpHeaders, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    read_headers,
};
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use reader::{BmpReader, ReaderState};
pub use render::{Glyphs, Shade, render, render_to_string};
