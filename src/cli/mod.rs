use env_logger::Env;
use log::LevelFilter;

pub mod art;
pub mod opt;

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_env(Env::new().filter("BMP_ASCII_LOG"))
        .init();
    match T::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => {
            err.print()?;
            std::process::exit(exit_code(&err))
        }
    }
}

/// Usage errors exit with 1, `--help` and `--version` with 0
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{exit_code, opt::Options};

    fn code(args: &[&str]) -> i32 {
        let err = Options::try_parse_from(args).unwrap_err();
        exit_code(&err)
    }

    #[test]
    fn exit_codes() {
        assert_eq!(code(&["bmp-ascii"]), 1);
        assert_eq!(code(&["bmp-ascii", "a.bmp", "b.bmp"]), 1);
        assert_eq!(code(&["bmp-ascii", "--frame", "a.bmp"]), 1);
        assert_eq!(code(&["bmp-ascii", "--help"]), 0);
        assert_eq!(code(&["bmp-ascii", "--version"]), 0);
    }
}
