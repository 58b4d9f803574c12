use thiserror::Error;

pub const USAGE: &str = "Usage: echo <input_text> | tinygrep -E <pattern> [-o]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("expected a pattern given with '-E'")]
    MissingFlag,
    #[error("missing pattern after '-E'")]
    MissingPattern,
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: String,
    /// Print the matched part of the line (`-o`).
    pub only_matching: bool,
}

/// Parses the command line, without the program name.
///
/// The argument following `-E` is always taken as the pattern, even when it
/// starts with a dash.
pub fn parse_args(args: Vec<String>) -> Result<Config, CliError> {
    let mut pattern = None;
    let mut only_matching = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" if pattern.is_none() => {
                pattern = Some(args.next().ok_or(CliError::MissingPattern)?);
            }
            "-o" => only_matching = true,
            "-E" => return Err(CliError::UnexpectedArgument(arg)),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::UnknownFlag(arg));
            }
            _ => return Err(CliError::UnexpectedArgument(arg)),
        }
    }

    Ok(Config {
        pattern: pattern.ok_or(CliError::MissingFlag)?,
        only_matching,
    })
}
