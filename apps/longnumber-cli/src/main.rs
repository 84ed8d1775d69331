//! # LongNumber
//!
//! Command-line entry point.
//!
//! ```text
//! $ longnumber 1000000000001
//! One trillion one
//! $ longnumber currency -- -$5,000,032.01
//! Negative five million thirty-two dollars and one cent
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use longnumber_cli::{run, Args, CliConfig, Reporter, Source, USAGE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return Ok(ExitCode::from(1));
        }
    };

    if args.help {
        print!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }
    if args.version {
        println!("longnumber {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config =
        CliConfig::load(args.config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(kind) = args.kind {
        config.output.kind = kind;
    }

    // Initialize tracing; RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        format = %config.output.format,
        kind = %config.output.kind,
        inputs = args.inputs.len(),
        stdin = args.read_stdin,
        "Configuration loaded"
    );

    let mut reporter = Reporter::new(config.output.format, io::stdout().lock(), io::stderr());
    let kind = config.output.kind;

    let mut summary = run(kind, Source::<io::StdinLock<'_>>::Args(&args.inputs), &mut reporter)
        .context("Failed to write output")?;
    if args.read_stdin {
        let stdin = run(kind, Source::Lines(io::stdin().lock()), &mut reporter)
            .context("Failed to read input")?;
        summary.converted += stdin.converted;
        summary.failed += stdin.failed;
    }

    if summary.all_converted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
