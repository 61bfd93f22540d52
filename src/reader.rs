use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use enough::Stop;
use log::{debug, warn};

use crate::decode::{PixelBuffer, decode_pixels};
use crate::error::BmpArtError;
use crate::header::{BmpHeaders, read_headers};
use crate::limits::Limits;
use crate::render::{self, Glyphs};

/// Lifecycle of a [`BmpReader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing loaded yet, or the last open failed.
    Unopened,
    /// Headers validated and pixel buffer loaded.
    Opened,
    /// Buffer released by [`BmpReader::close`].
    Closed,
}

/// Opens a BMP, holds its pixel buffer, and renders it as text.
///
/// ```no_run
/// use zenbmpart::{BmpReader, Unstoppable};
///
/// let mut reader = BmpReader::new();
/// reader.open("image.bmp", Unstoppable)?;
/// reader.render(&mut std::io::stdout().lock(), Unstoppable)?;
/// reader.close();
/// # Ok::<(), zenbmpart::BmpArtError>(())
/// ```
#[derive(Debug)]
pub struct BmpReader {
    headers: Option<BmpHeaders>,
    data: Option<PixelBuffer>,
    state: ReaderState,
    limits: Option<Limits>,
    glyphs: Glyphs,
}

impl Default for BmpReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BmpReader {
    pub fn new() -> Self {
        Self {
            headers: None,
            data: None,
            state: ReaderState::Unopened,
            limits: None,
            glyphs: Glyphs::default(),
        }
    }

    /// Reader that enforces `limits` before allocating the pixel buffer.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits: Some(limits),
            ..Self::new()
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Headers of the currently opened image.
    pub fn headers(&self) -> Option<&BmpHeaders> {
        self.headers.as_ref()
    }

    /// Pixel buffer of the currently opened image.
    pub fn pixels(&self) -> Option<&PixelBuffer> {
        self.data.as_ref()
    }

    /// Open and decode the BMP at `path`.
    pub fn open<P: AsRef<Path>>(&mut self, path: P, stop: impl Stop) -> Result<(), BmpArtError> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        match File::open(path) {
            Ok(file) => self.open_stream(BufReader::new(file), stop),
            Err(e) => {
                self.reset();
                Err(e.into())
            }
        }
    }

    /// Decode a BMP from a stream positioned at the start of the file.
    ///
    /// Any previously loaded image is discarded first, so a failed open
    /// leaves the reader [`ReaderState::Unopened`].
    pub fn open_stream<R: Read + Seek>(
        &mut self,
        mut stream: R,
        stop: impl Stop,
    ) -> Result<(), BmpArtError> {
        self.reset();

        let headers = read_headers(&mut stream)?;
        let data = decode_pixels(&mut stream, &headers, self.limits.as_ref(), &stop)?;

        self.headers = Some(headers);
        self.data = Some(data);
        self.state = ReaderState::Opened;
        Ok(())
    }

    /// Write the art to `out`. Repeatable while the image is open.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W, stop: impl Stop) -> Result<(), BmpArtError> {
        let data = self.loaded()?;
        render::render(data, self.glyphs, out, &stop)
    }

    pub fn render_to_string(&self, stop: impl Stop) -> Result<String, BmpArtError> {
        let data = self.loaded()?;
        render::render_to_string(data, self.glyphs, &stop)
    }

    /// Release the pixel buffer. Safe to call any number of times.
    pub fn close(&mut self) {
        if self.data.take().is_some() {
            debug!("pixel buffer released");
            self.state = ReaderState::Closed;
        }
    }

    fn loaded(&self) -> Result<&PixelBuffer, BmpArtError> {
        self.data.as_ref().ok_or_else(|| {
            warn!("render requested with no pixel data loaded");
            BmpArtError::NoDataLoaded
        })
    }

    fn reset(&mut self) {
        self.headers = None;
        self.data = None;
        self.state = ReaderState::Unopened;
    }
}
