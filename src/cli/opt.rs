use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(version)]
/// Print an uncompressed 24 or 32-bit BMP file as ASCII art
pub struct Options {
    /// The bitmap to print
    pub file: PathBuf,
}
