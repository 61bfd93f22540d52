//! Two-glyph text rendering of a decoded pixel buffer.
//!
//! Each pixel becomes one glyph: light when blue, green and red all exceed
//! [`LIGHT_THRESHOLD`], dark otherwise. Rows are emitted in buffer order,
//! each followed by `'\n'`.

use std::io::Write;

use enough::Stop;
use log::trace;

use crate::decode::PixelBuffer;
use crate::error::BmpArtError;

/// A channel must be strictly greater than this to count as light.
pub const LIGHT_THRESHOLD: u8 = 127;

/// Brightness class of one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of_bgr([b, g, r]: [u8; 3]) -> Self {
        if r > LIGHT_THRESHOLD && g > LIGHT_THRESHOLD && b > LIGHT_THRESHOLD {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// The two characters used for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub light: char,
    pub dark: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            light: ' ',
            dark: '#',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, shade: Shade) -> char {
        match shade {
            Shade::Light => self.light,
            Shade::Dark => self.dark,
        }
    }
}

fn for_each_row(
    buffer: &PixelBuffer,
    glyphs: Glyphs,
    stop: &dyn Stop,
    mut emit: impl FnMut(&str) -> Result<(), BmpArtError>,
) -> Result<(), BmpArtError> {
    trace!("rendering {}x{}", buffer.width(), buffer.height());
    let per_glyph = glyphs.light.len_utf8().max(glyphs.dark.len_utf8());
    let mut line = String::with_capacity(buffer.width() as usize * per_glyph + 1);

    for y in 0..buffer.height() {
        stop.check()?;
        line.clear();
        for x in 0..buffer.width() {
            line.push(glyphs.glyph(Shade::of_bgr(buffer.bgr_at(x, y))));
        }
        line.push('\n');
        emit(&line)?;
    }
    Ok(())
}

/// Write the art for `buffer` to `out`, one line per row.
pub fn render<W: Write + ?Sized>(
    buffer: &PixelBuffer,
    glyphs: Glyphs,
    out: &mut W,
    stop: &dyn Stop,
) -> Result<(), BmpArtError> {
    for_each_row(buffer, glyphs, stop, |line| {
        out.write_all(line.as_bytes())?;
        Ok(())
    })
}

/// Render `buffer` into a `String`.
pub fn render_to_string(
    buffer: &PixelBuffer,
    glyphs: Glyphs,
    stop: &dyn Stop,
) -> Result<String, BmpArtError> {
    let mut out = String::new();
    for_each_row(buffer, glyphs, stop, |line| {
        out.push_str(line);
        Ok(())
    })?;
    Ok(out)
}
