//! Judecca command-line runner
//!
//! Reads a program file and runs it on stdin/stdout until a limit is hit.
//! Logs go to stderr so program output stays clean.

mod args;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use judecca_disassembler::disassemble;
use judecca_runtime::{
    ExecutionSummary, IoDevice, Machine, MachineConfig, NullIo, RuntimeError, StdIo, EXIT_USAGE,
};
use judecca_spec::{check_source_len, derive_seed, Limits, Seed};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read(&cli.program)
        .with_context(|| format!("Failed to read program {}", cli.program.display()))?;
    check_source_len(source.len() as u64)?;

    info!(program = %cli.program.display(), bytes = source.len(), "deriving seed");
    let seed = derive_seed(&source);
    info!(seed = %seed, "seed derived");

    if let Some(pages) = cli.dump_pages {
        print!("{}", disassemble(&source, &seed, 0..pages, cli.style())?);
        return Ok(());
    }

    let config = MachineConfig {
        limits: cli.limits(Limits::from_env()),
        trace: cli.verbose >= 2,
        max_steps: cli.max_steps,
    };

    let summary = if cli.null_io {
        execute(&source, seed, config, NullIo::default())?
    } else {
        execute(&source, seed, config, StdIo::new())?
    };
    info!(
        steps = summary.steps,
        pages_generated = summary.pages_generated,
        pages_scanned = summary.pages_scanned,
        breakpoints = summary.breakpoints,
        "finished"
    );
    Ok(())
}

fn execute<D: IoDevice>(
    source: &[u8],
    seed: Seed,
    config: MachineConfig,
    device: D,
) -> Result<ExecutionSummary, RuntimeError> {
    let mut machine = Machine::new(source, seed, config, device)?;
    machine.run()
}

/// Machine errors carry their own status; anything else is a usage error
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<RuntimeError>()
        .map(RuntimeError::exit_code)
        .unwrap_or(EXIT_USAGE)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str())),
        1 => EnvFilter::new(Level::DEBUG.as_str()),
        _ => EnvFilter::new(Level::TRACE.as_str()),
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use judecca_runtime::{EXIT_INTERNAL, EXIT_IO, EXIT_LIMIT};
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_exit_code_for_runtime_errors() {
        let limit = anyhow::Error::from(RuntimeError::TapeLimitExceeded { position: 3, limit: 2 });
        assert_eq!(exit_code(&limit), EXIT_LIMIT);

        let io = anyhow::Error::from(RuntimeError::from(IoError::new(ErrorKind::BrokenPipe, "x")));
        assert_eq!(exit_code(&io), EXIT_IO);

        let internal = anyhow::Error::from(RuntimeError::UnresolvableJump { index: 0 });
        assert_eq!(exit_code(&internal), EXIT_INTERNAL);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::anyhow!("Failed to read program");
        assert_eq!(exit_code(&err), EXIT_USAGE);

        let spec = anyhow::Error::from(judecca_spec::SpecError::SourceTooLong { len: 2, max: 1 });
        assert_eq!(exit_code(&spec), EXIT_USAGE);
    }
}
