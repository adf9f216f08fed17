//! Errors when decoding a bitmap
use std::io;

use displaydoc::Display;
use thiserror::Error;

use crate::header::PixelLayout;

/// An error when decoding a BMP file
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// I/O error
    Io(#[from] io::Error),
    /// not a BMP (signature {found:02X?})
    BadSignature {
        /// The first two bytes of the file, zero padded
        found: [u8; 2],
    },
    /// unsupported bit depth {0}, only 24 and 32 bit images are supported
    UnsupportedDepth(u16),
}

impl DecodeError {
    /// Whether the file was readable but is not a supported BMP
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::BadSignature { .. } | Self::UnsupportedDepth(_)
        )
    }

    pub(crate) fn too_large(layout: &PixelLayout) -> Self {
        Self::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "pixel data of {}x{} pixels at {} bits per pixel exceeds any file size",
                layout.width, layout.height, layout.bit_depth
            ),
        ))
    }

    pub(crate) fn truncated(what: &str, expected: u64, actual: usize) -> Self {
        Self::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{what} truncated: expected {expected} bytes, found {actual}"),
        ))
    }
}

/// Type alias for convenience
pub type DecodeResult<T> = Result<T, DecodeError>;
