use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::cli::Config;
use crate::regex::{find_match, match_pattern};

/// Reads a single line, dropping its line terminator. An empty reader yields
/// an empty line.
pub fn read_input_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read input line")?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Matches one line from `input` against the configured pattern.
///
/// Returns whether the line matched. With `only_matching` set, the matched
/// part is written to `out`.
pub fn run(cfg: &Config, mut input: impl BufRead, mut out: impl Write) -> Result<bool> {
    let line = read_input_line(&mut input)?;
    debug!("pattern {:?}, input {:?}", cfg.pattern, line);

    if !cfg.only_matching {
        return Ok(match_pattern(&line, &cfg.pattern));
    }

    match find_match(&line, &cfg.pattern) {
        Some(found) => {
            writeln!(out, "{found}").context("failed to write match")?;
            out.flush().context("failed to write match")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
