//! # BMP headers
//!
//! A BMP file starts with the 14 byte `BITMAPFILEHEADER`, followed by a
//! `BITMAPINFOHEADER`. Both are little-endian. Newer info header versions
//! (V4, V5) extend the 40 byte classic layout, so only the shared leading
//! fields are parsed here.
use nom::{
    bytes::complete::tag,
    combinator::map,
    error::{context, ContextError, ParseError},
    number::complete::{le_i32, le_u16, le_u32},
    sequence::{preceded, tuple},
    IResult,
};

/// The magic bytes `BM` (`0x4D42` as a little-endian word)
pub const SIGNATURE: [u8; 2] = *b"BM";
/// Size of the `BITMAPFILEHEADER`
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the classic `BITMAPINFOHEADER`
pub const INFO_HEADER_SIZE: usize = 40;

/// The `BITMAPFILEHEADER`, without the signature
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Size of the whole file, as declared by the writer
    pub file_size: u32,
    /// Two reserved 16-bit words
    pub reserved: u32,
    /// Byte offset of the pixel array from the start of the file
    pub pixel_data_offset: u32,
}

/// The classic `BITMAPINFOHEADER`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InfoHeader {
    /// Size of the info header, 40 or more
    pub header_size: u32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels, negative for top-down bitmaps
    pub height: i32,
    /// Number of color planes (always 1)
    pub planes: u16,
    /// Bits per pixel
    pub bit_depth: u16,
    /// Compression method, `0` is `BI_RGB`
    pub compression: u32,
    /// Size of the raw pixel data, may be 0 for `BI_RGB`
    pub image_size: u32,
    /// Horizontal resolution
    pub x_pixels_per_meter: i32,
    /// Vertical resolution
    pub y_pixels_per_meter: i32,
    /// Number of palette entries
    pub colors_used: u32,
    /// Number of important palette entries
    pub colors_important: u32,
}

/// Parse the file header, including the `BM` signature
pub fn p_file_header<'a, E>(input: &'a [u8]) -> IResult<&'a [u8], FileHeader, E>
where
    E: ParseError<&'a [u8]> + ContextError<&'a [u8]>,
{
    context(
        "file header",
        map(
            preceded(tag(&SIGNATURE[..]), tuple((le_u32, le_u32, le_u32))),
            |(file_size, reserved, pixel_data_offset)| FileHeader {
                file_size,
                reserved,
                pixel_data_offset,
            },
        ),
    )(input)
}

/// Parse the leading 40 bytes of the info header
pub fn p_info_header<'a, E>(input: &'a [u8]) -> IResult<&'a [u8], InfoHeader, E>
where
    E: ParseError<&'a [u8]> + ContextError<&'a [u8]>,
{
    context("info header", p_info_header_fields)(input)
}

fn p_info_header_fields<'a, E: ParseError<&'a [u8]>>(
    input: &'a [u8],
) -> IResult<&'a [u8], InfoHeader, E> {
    let (input, header_size) = le_u32(input)?;
    let (input, width) = le_i32(input)?;
    let (input, height) = le_i32(input)?;
    let (input, planes) = le_u16(input)?;
    let (input, bit_depth) = le_u16(input)?;
    let (input, compression) = le_u32(input)?;
    let (input, image_size) = le_u32(input)?;
    let (input, x_pixels_per_meter) = le_i32(input)?;
    let (input, y_pixels_per_meter) = le_i32(input)?;
    let (input, colors_used) = le_u32(input)?;
    let (input, colors_important) = le_u32(input)?;

    let header = InfoHeader {
        header_size,
        width,
        height,
        planes,
        bit_depth,
        compression,
        image_size,
        x_pixels_per_meter,
        y_pixels_per_meter,
        colors_used,
        colors_important,
    };
    Ok((input, header))
}

impl InfoHeader {
    /// Whether the rows are stored top row first
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// The geometry of the pixel array
    ///
    /// The height is the absolute value of the stored height. A negative
    /// width yields zero columns.
    pub fn layout(&self) -> PixelLayout {
        PixelLayout {
            width: u32::try_from(self.width).unwrap_or(0),
            height: self.height.unsigned_abs(),
            bit_depth: self.bit_depth,
        }
    }
}

/// Dimensions of the stored pixel array
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelLayout {
    /// Pixels per row
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Bits per pixel
    pub bit_depth: u16,
}

impl PixelLayout {
    /// Bytes per row, padded to a multiple of 4
    pub fn row_stride(&self) -> u64 {
        (u64::from(self.width) * u64::from(self.bit_depth) + 31) / 32 * 4
    }

    /// Size of the full padded pixel array, `None` on overflow
    pub fn data_size(&self) -> Option<u64> {
        self.row_stride().checked_mul(u64::from(self.height))
    }

    /// Bytes per pixel
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bit_depth / 8)
    }
}
