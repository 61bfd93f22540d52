#![allow(dead_code)]

/// Build a BMP with a 14 + 40 byte header and tightly packed pixel rows.
///
/// `pixels` is written verbatim after the header; no row padding is added.
pub fn bmp(width: i32, height: i32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
    bmp_with(b"BM", width, height, bpp, 54, pixels)
}

pub fn bmp_with(
    magic: &[u8; 2],
    width: i32,
    height: i32,
    bpp: u16,
    offset: u32,
    pixels: &[u8],
) -> Vec<u8> {
    let mut out = vec![0u8; offset as usize];
    out[0..2].copy_from_slice(magic);
    let file_size = offset as usize + pixels.len();
    out[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
    out[10..14].copy_from_slice(&offset.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(pixels);
    out
}

/// `w * h` copies of one BGR(X) pixel.
pub fn solid(w: usize, h: usize, pixel: &[u8]) -> Vec<u8> {
    pixel.repeat(w * h)
}

/// Checkerboard of white and black BGR pixels, white at (0, 0).
pub fn checkerboard(w: usize, h: usize, bytes_per_pixel: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bytes_per_pixel];
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                let off = (y * w + x) * bytes_per_pixel;
                pixels[off..off + 3].fill(255);
            }
        }
    }
    pixels
}
