//! # BMP to ASCII art
#![warn(missing_docs)]

use std::io::{self, Write};

use bmp_glyphs::decode;
use color_eyre::eyre::{self, WrapErr};

mod cli;

use cli::opt::Options;

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;

    let decoded = decode(&opt.file)
        .wrap_err_with(|| format!("Failed to decode '{}'", opt.file.display()))?;

    let art = cli::art::render(&decoded)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(art.as_bytes())?;
    out.flush()?;
    Ok(())
}
