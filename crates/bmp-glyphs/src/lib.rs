#![warn(missing_docs)]
//! # Windows bitmaps as glyph grids
//!
//! Decodes uncompressed 24 and 32 bit BMP files into rows of characters,
//! with `#` for black pixels and a space for everything else.
//!
//! ```no_run
//! let decoded = bmp_glyphs::decode("image.bmp")?;
//! if decoded.colored {
//!     eprintln!("colors were ignored");
//! }
//! print!("{}", decoded.grid);
//! # Ok::<(), bmp_glyphs::DecodeError>(())
//! ```

mod decode;
pub mod error;
mod glyphs;
pub mod header;

pub use decode::{convert, decode, decode_from, Decoded};
pub use error::{DecodeError, DecodeResult};
pub use glyphs::{glyph, GlyphGrid, INK, NO_INK};
