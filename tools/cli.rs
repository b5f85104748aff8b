use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stateface_css::{Input, StylesheetConfig, generate};

/// Prints the StateFace stylesheet: the icon font boilerplate followed by one
/// `:before` rule per entry of a JSON mapping of abbreviation to glyph code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file mapping abbreviations to glyph codes. Reads stdin when omitted.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = Input::from_arg(args.path);
    log::debug!("Reading mapping from {input}");

    match generate(&input, &StylesheetConfig::default(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
