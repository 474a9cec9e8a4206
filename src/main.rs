//! CLI entry point for box-counting analysis of a single image

use std::process::ExitCode;

use fractal2d::io::cli::{Cli, FileProcessor};
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse_with_catalog();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    match FileProcessor::new(cli).process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
