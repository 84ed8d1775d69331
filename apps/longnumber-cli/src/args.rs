//! Command-line argument parsing.

use std::path::PathBuf;

use longnumber_core::ConversionKind;

use crate::config::{ConfigError, OutputFormat};

pub const USAGE: &str = "\
LongNumber - spell out numerals and dollar amounts

Usage: longnumber [OPTIONS] [number|currency|scale] <INPUT>...
       longnumber [OPTIONS] [number|currency|scale] -

Arguments:
  <INPUT>...             Values to convert; \"-\" reads one per line from stdin

Options:
  -c, --config <PATH>    Configuration file (default: platform config dir)
  -f, --format <FMT>     Output format: text | json
  -h, --help             Show this help message
  -V, --version          Show version

Environment:
  LONGNUMBER_FORMAT, LONGNUMBER_KIND, LONGNUMBER_LOG, RUST_LOG

Examples:
  longnumber 1000000000001
  longnumber currency -- -$5,000,032.01
  longnumber --format json scale 87
";

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub kind: Option<ConversionKind>,
    pub inputs: Vec<String>,
    pub read_stdin: bool,
    pub help: bool,
    pub version: bool,
}

/// Command-line errors.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error(transparent)]
    InvalidFormat(#[from] ConfigError),

    #[error("No input given")]
    NoInput,
}

impl Args {
    /// Parses arguments, excluding the program name.
    ///
    /// The first positional may name the conversion. After `--`, everything
    /// is input. A token starting with `-` followed by a digit, `$`, or `.`
    /// is input too, so negative amounts work without `--`.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        let mut only_inputs = false;

        while let Some(arg) = args.next() {
            if only_inputs || !is_option(&arg) {
                parsed.push_positional(arg);
                continue;
            }

            match arg.as_str() {
                "--" => only_inputs = true,
                "-" => parsed.read_stdin = true,
                "--config" | "-c" => {
                    let path = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--format" | "-f" => {
                    let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    parsed.format = Some(value.parse()?);
                }
                "--help" | "-h" => parsed.help = true,
                "--version" | "-V" => parsed.version = true,
                _ => return Err(ArgsError::UnknownOption(arg.clone())),
            }
        }

        if parsed.inputs.is_empty() && !parsed.read_stdin && !parsed.help && !parsed.version {
            return Err(ArgsError::NoInput);
        }

        Ok(parsed)
    }

    fn push_positional(&mut self, arg: String) {
        if self.kind.is_none() && self.inputs.is_empty() {
            if let Ok(kind) = arg.parse::<ConversionKind>() {
                self.kind = Some(kind);
                return;
            }
        }
        self.inputs.push(arg);
    }
}

fn is_option(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        None => false,
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit() || c == '$' || c == '.'),
    }
}
