use std::fmt::{self, Write};

use bmp_glyphs::Decoded;
use log::info;

/// Printed before the image when some pixels were neither black nor white
pub const COLORED_WARNING: &str =
    "The image contains colored pixels. They will be ignored when output.";

/// Format a decoded image for the terminal
pub fn render(decoded: &Decoded) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if decoded.colored {
        info!("Found pixels that are neither black nor white");
        writeln!(out, "{}", COLORED_WARNING)?;
    }
    write!(out, "{}", decoded.grid)?;
    Ok(out)
}
