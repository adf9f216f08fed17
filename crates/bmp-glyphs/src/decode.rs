//! # Decoding bitmaps to glyphs
use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use log::{debug, warn};
use nom::{Finish, IResult};

use crate::{
    error::{DecodeError, DecodeResult},
    glyphs::{glyph, GlyphGrid},
    header::{
        p_file_header, p_info_header, PixelLayout, FILE_HEADER_SIZE, INFO_HEADER_SIZE, SIGNATURE,
    },
};

/// The result of decoding a bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The rendered rows
    pub grid: GlyphGrid,
    /// Whether some pixel was neither pure black nor pure white
    pub colored: bool,
}

/// One pixel, in on-disk channel order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Bgr {
    blue: u8,
    green: u8,
    red: u8,
}

impl Bgr {
    fn from_slice(px: &[u8]) -> Self {
        Self {
            blue: px[0],
            green: px[1],
            red: px[2],
        }
    }

    fn is_black(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    fn is_white(self) -> bool {
        self.red == 0xFF && self.green == 0xFF && self.blue == 0xFF
    }

    fn is_colored(self) -> bool {
        !self.is_black() && !self.is_white()
    }
}

/// Decode the BMP file at `path`
pub fn decode<P: AsRef<Path>>(path: P) -> DecodeResult<Decoded> {
    let path = path.as_ref();
    debug!("Opening '{}'", path.display());
    let file = File::open(path)?;
    decode_from(BufReader::new(file))
}

/// Decode a BMP from a seekable stream
///
/// Offsets in the headers are relative to the current position.
pub fn decode_from<R: Read + Seek>(mut reader: R) -> DecodeResult<Decoded> {
    let start = reader.stream_position()?;

    let buf = read_up_to(&mut reader, FILE_HEADER_SIZE as u64)?;
    if !buf.starts_with(&SIGNATURE) {
        let mut found = [0; 2];
        for (dst, src) in found.iter_mut().zip(&buf) {
            *dst = *src;
        }
        return Err(DecodeError::BadSignature { found });
    }
    let file_header = parse_header(p_file_header, &buf, "file header", FILE_HEADER_SIZE)?;
    debug!("{:?}", file_header);

    let buf = read_up_to(&mut reader, INFO_HEADER_SIZE as u64)?;
    let info_header = parse_header(p_info_header, &buf, "info header", INFO_HEADER_SIZE)?;
    debug!("{:?}", info_header);

    if info_header.bit_depth != 24 && info_header.bit_depth != 32 {
        return Err(DecodeError::UnsupportedDepth(info_header.bit_depth));
    }
    if info_header.compression != 0 {
        warn!(
            "Compression method {} is not supported, reading pixels as plain BGR",
            info_header.compression
        );
    }
    if info_header.is_top_down() {
        warn!("Top-down bitmap, the output will be upside down");
    }
    if info_header.width < 0 {
        warn!("Negative width {}, no columns are drawn", info_header.width);
    }

    let layout = info_header.layout();
    let data_size = layout
        .data_size()
        .ok_or_else(|| DecodeError::too_large(&layout))?;
    debug!(
        "{:?}, stride {} bytes, {} bytes of pixel data",
        layout,
        layout.row_stride(),
        data_size
    );

    let offset = start + u64::from(file_header.pixel_data_offset);
    reader.seek(SeekFrom::Start(offset))?;
    let pixels = read_up_to(&mut reader, data_size)?;

    convert(&pixels, &layout)
}

fn read_up_to<R: Read>(reader: &mut R, limit: u64) -> DecodeResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(limit).read_to_end(&mut buf)?;
    Ok(buf)
}

fn parse_header<'a, T>(
    parser: fn(&'a [u8]) -> IResult<&'a [u8], T>,
    input: &'a [u8],
    what: &str,
    size: usize,
) -> DecodeResult<T> {
    parser(input)
        .finish()
        .map(|(_, header)| header)
        .map_err(|_| DecodeError::truncated(what, size as u64, input.len()))
}

/// Convert a bottom-up pixel array to glyphs
///
/// Rows are visited from the last stored row to the first, and each visited
/// row becomes the next row of the grid. Fails if `pixels` is shorter than
/// the layout requires.
pub fn convert(pixels: &[u8], layout: &PixelLayout) -> DecodeResult<Decoded> {
    let data_size = layout
        .data_size()
        .ok_or_else(|| DecodeError::too_large(layout))?;
    if (pixels.len() as u64) < data_size {
        return Err(DecodeError::truncated("pixel data", data_size, pixels.len()));
    }

    // fits, since it is at most `data_size`
    let stride = layout.row_stride() as usize;
    let width = layout.width as usize;
    let bpp = layout.bytes_per_pixel();
    let height = layout.height as usize;

    let (rows, colored) = (0..height).rev().fold(
        (Vec::with_capacity(height), false),
        |(mut rows, colored), y| {
            let start = y * stride;
            let row = &pixels[start..start + width * bpp];
            let (line, row_colored) = row.chunks_exact(bpp).map(Bgr::from_slice).fold(
                (Vec::with_capacity(width), false),
                |(mut line, colored), px| {
                    line.push(glyph(px.is_black()));
                    (line, colored || px.is_colored())
                },
            );
            rows.push(line);
            (rows, colored || row_colored)
        },
    );

    Ok(Decoded {
        grid: GlyphGrid::new(width, rows),
        colored,
    })
}
