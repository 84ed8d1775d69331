//! # LongNumber CLI
//!
//! Spells numerals, dollar amounts, and scale indices from the command line
//! or from stdin.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         longnumber (binary)                             │
//! │                                                                         │
//! │  argv ──► Args ──► CliConfig ──► run(inputs) ──► Reporter ──► stdout    │
//! │                        │              │                   └──► stderr   │
//! │                        ▼              ▼                                 │
//! │                  tracing init   longnumber_core::convert                │
//! │                                                                         │
//! │  Exit: 0 all converted • 1 usage/config error • 2 any input failed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `LONGNUMBER_FORMAT` - `text` or `json`
//! - `LONGNUMBER_KIND` - default conversion (`number`, `currency`, `scale`)
//! - `LONGNUMBER_LOG` - tracing filter used when `RUST_LOG` is unset

pub mod args;
pub mod config;
pub mod error;
pub mod output;

use std::io::{self, BufRead, Write};

use longnumber_core::ConversionKind;
use tracing::{debug, warn};

pub use args::{Args, ArgsError, USAGE};
pub use config::{CliConfig, ConfigError, OutputFormat};
pub use error::{ApiError, ErrorCode};
pub use output::Reporter;

/// Where inputs come from.
pub enum Source<'a, R> {
    /// Values given on the command line.
    Args(&'a [String]),

    /// One value per line; blank lines are skipped.
    Lines(R),
}

/// Counts from one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_converted(&self) -> bool {
        self.failed == 0
    }
}

/// Converts every input and reports each result.
///
/// A failed input is reported and the run moves on to the next one. Only
/// I/O errors stop the run.
pub fn run<R, O, E>(
    kind: ConversionKind,
    source: Source<'_, R>,
    reporter: &mut Reporter<O, E>,
) -> io::Result<Summary>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut summary = Summary::default();

    match source {
        Source::Args(inputs) => {
            for input in inputs {
                convert_one(kind, input, reporter, &mut summary)?;
            }
        }
        Source::Lines(reader) => {
            for line in reader.lines() {
                let line = line?;
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                convert_one(kind, input, reporter, &mut summary)?;
            }
        }
    }

    reporter.flush()?;
    debug!(
        converted = summary.converted,
        failed = summary.failed,
        "Run complete"
    );
    Ok(summary)
}

fn convert_one<O: Write, E: Write>(
    kind: ConversionKind,
    input: &str,
    reporter: &mut Reporter<O, E>,
    summary: &mut Summary,
) -> io::Result<()> {
    match longnumber_core::convert(kind, input) {
        Ok(words) => {
            debug!(%kind, input, "Converted");
            summary.converted += 1;
            reporter.success(input, kind, &words)
        }
        Err(e) => {
            warn!(%kind, input, error = %e, "Conversion failed");
            summary.failed += 1;
            reporter.failure(input, kind, &ApiError::from(e))
        }
    }
}
