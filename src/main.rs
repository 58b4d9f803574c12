use std::env;
use std::io;
use std::process;

use tinygrep::app;
use tinygrep::cli::{USAGE, parse_args};

const EXIT_MATCH: i32 = 0;
const EXIT_NO_MATCH: i32 = 1;
const EXIT_ERROR: i32 = 2;

// Usage: echo <input_text> | tinygrep -E <pattern> [-o]
fn main() {
    env_logger::init();

    let cfg = match parse_args(env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            process::exit(EXIT_ERROR);
        }
    };

    let code = match app::run(&cfg, io::stdin().lock(), io::stdout().lock()) {
        Ok(true) => EXIT_MATCH,
        Ok(false) => EXIT_NO_MATCH,
        Err(err) => {
            eprintln!("error: {err:#}");
            EXIT_ERROR
        }
    };
    process::exit(code);
}
