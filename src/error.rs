use enough::StopReason;

/// Errors from opening, decoding, and rendering a BMP.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpArtError {
    /// The file could not be opened, or the stream could not supply the
    /// requested number of bytes.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not BMP (signature {found:02x?}, expected \"BM\")")]
    NotABitmap { found: [u8; 2] },

    #[error("unsupported BMP format: {0} bit")]
    UnsupportedPixelFormat(u16),

    #[error("no data to display")]
    NoDataLoaded,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpArtError {
    fn from(r: StopReason) -> Self {
        BmpArtError::Cancelled(r)
    }
}
