//! Header validation and bulk pixel reads.

mod common;

use std::io::Cursor;

use enough::Unstoppable;
use zenbmpart::*;

fn decode(bytes: Vec<u8>, limits: Option<&Limits>) -> Result<PixelBuffer, BmpArtError> {
    let mut cur = Cursor::new(bytes);
    let headers = read_headers(&mut cur)?;
    decode_pixels(&mut cur, &headers, limits, &Unstoppable)
}

#[test]
fn buffer_size_matches_dimensions() {
    for (w, h, bpp) in [(2, 2, 24u16), (3, 5, 24), (4, 1, 32), (7, 3, 32), (0, 4, 24)] {
        let bytes_pp = usize::from(bpp / 8);
        let pixels = common::checkerboard(w, h, bytes_pp);
        let buf = decode(common::bmp(w as i32, h as i32, bpp, &pixels), None).unwrap();
        assert_eq!(buf.pixels().len(), w * h * bytes_pp, "{w}x{h}@{bpp}");
        assert_eq!(buf.pixels(), &pixels[..]);
    }
}

#[test]
fn layout_follows_bit_depth() {
    let buf = decode(common::bmp(1, 1, 24, &[1, 2, 3]), None).unwrap();
    assert_eq!(buf.layout(), PixelLayout::Bgr8);
    let buf = decode(common::bmp(1, 1, 32, &[1, 2, 3, 4]), None).unwrap();
    assert_eq!(buf.layout(), PixelLayout::Bgrx8);
    assert_eq!(buf.bgr_at(0, 0), [1, 2, 3]);
}

#[test]
fn bad_signature_is_not_a_bitmap() {
    let bytes = common::bmp_with(b"XX", 2, 2, 24, 54, &[255; 12]);
    let err = decode(bytes, None).unwrap_err();
    assert!(matches!(err, BmpArtError::NotABitmap { .. }));
}

#[test]
fn unsupported_bit_depths() {
    for bpp in [1u16, 4, 8, 16, 0, 48] {
        let err = decode(common::bmp(2, 2, bpp, &[0; 64]), None).unwrap_err();
        assert!(
            matches!(err, BmpArtError::UnsupportedPixelFormat(b) if b == bpp),
            "bpp {bpp}: {err:?}"
        );
    }
}

#[test]
fn short_pixel_stream_is_an_error() {
    // 2x2 at 24 bit needs 12 bytes.
    let err = decode(common::bmp(2, 2, 24, &[255; 11]), None).unwrap_err();
    assert!(matches!(err, BmpArtError::Io(_)));
}

#[test]
fn empty_input_is_io_error() {
    let err = decode(Vec::new(), None).unwrap_err();
    assert!(matches!(err, BmpArtError::Io(_)));
}

#[test]
fn pixel_offset_is_authoritative() {
    // Pixel data placed after a 10-byte gap that must be skipped.
    let mut bytes = common::bmp_with(b"BM", 1, 1, 24, 64, &[10, 20, 30]);
    // Header ends at 54; bytes 54..64 are the gap.
    bytes[54..64].fill(0xAA);
    let buf = decode(bytes, None).unwrap();
    assert_eq!(buf.pixels(), &[10, 20, 30]);
}

#[test]
fn offset_may_point_back_into_header() {
    // Offset 50 makes the last 4 info-header bytes part of the pixel data.
    let mut bytes = common::bmp(1, 1, 32, &[]);
    bytes.truncate(50);
    bytes.extend_from_slice(&[200, 201, 202, 203]);
    bytes[10..14].copy_from_slice(&50u32.to_le_bytes());
    let buf = decode(bytes, None).unwrap();
    assert_eq!(buf.bgr_at(0, 0), [200, 201, 202]);
}

#[test]
fn trailing_row_padding_is_not_skipped() {
    // A 1x2 24-bit image with 1 byte of padding after each row: the decoder
    // reads the first 6 bytes as-is, padding included.
    let raw = [1, 2, 3, 0, 4, 5, 6, 0];
    let buf = decode(common::bmp(1, 2, 24, &raw), None).unwrap();
    assert_eq!(buf.pixels(), &[1, 2, 3, 0, 4, 5]);
    assert_eq!(buf.bgr_at(0, 1), [0, 4, 5]);
}

#[test]
fn data_size_is_exact() {
    let mut cur = Cursor::new(common::bmp(5, 3, 32, &[0; 60]));
    let headers = read_headers(&mut cur).unwrap();
    assert_eq!(data_size(&headers).unwrap(), 5 * 3 * 4);
}

#[test]
fn huge_dimensions_rejected_by_limits() {
    let limits = Limits {
        max_memory_bytes: Some(1024),
        ..Limits::default()
    };
    let err = decode(common::bmp(1000, 1000, 24, &[]), Some(&limits)).unwrap_err();
    assert!(matches!(err, BmpArtError::LimitExceeded(_)));
}

#[test]
fn negative_width_rejected() {
    let err = decode(common::bmp(-4, 2, 24, &[0; 24]), None).unwrap_err();
    assert!(matches!(err, BmpArtError::InvalidHeader(_)));
}

#[test]
fn cancelled_before_bulk_read() {
    struct AlwaysStop;
    impl Stop for AlwaysStop {
        fn check(&self) -> Result<(), enough::StopReason> {
            Err(enough::StopReason::Cancelled)
        }
    }

    let mut cur = Cursor::new(common::bmp(1, 1, 24, &[0; 3]));
    let headers = read_headers(&mut cur).unwrap();
    let err = decode_pixels(&mut cur, &headers, None, &AlwaysStop).unwrap_err();
    assert!(matches!(err, BmpArtError::Cancelled(_)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn oversized_claim_on_tiny_file_is_io_error() {
    // 100000x100000 at 32 bit claims 40 GB but the file ends at the header.
    let bytes = common::bmp(100_000, 100_000, 32, &[]);
    assert_eq!(bytes.len(), 54);
    let err = decode(bytes, None).unwrap_err();
    assert!(
        matches!(&err, BmpArtError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof),
        "{err:?}"
    );
}

#[test]
fn data_size_overflow_is_dimensions_too_large() {
    let err = decode(common::bmp(i32::MAX, i32::MAX, 32, &[]), None).unwrap_err();
    assert!(matches!(err, BmpArtError::DimensionsTooLarge { .. }), "{err:?}");
}

#[test]
fn layout_bits_round_trip_header_depth() {
    for bpp in [24u16, 32] {
        let layout = PixelLayout::from_bits_per_pixel(bpp).unwrap();
        assert_eq!(layout.bits_per_pixel(), bpp);
    }
}
