//! cliforge CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments (reported by clap)
//! - 3: Discovery failure
//! - 4: Validation failure
//! - 5: Generation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

use cliforge_codegen::CodegenError;
use cliforge_collect::CollectError;
use cliforge_model::ModelError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const DISCOVERY_FAILURE: u8 = 3;
    pub const VALIDATION_FAILURE: u8 = 4;
    pub const GENERATION_FAILURE: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("cliforge={}", level).parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::List(args) => commands::list::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map an error to its pipeline stage's exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<CollectError>().is_some() {
        ExitCodes::DISCOVERY_FAILURE
    } else if e.downcast_ref::<ModelError>().is_some() {
        ExitCodes::VALIDATION_FAILURE
    } else if e.downcast_ref::<CodegenError>().is_some() {
        ExitCodes::GENERATION_FAILURE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_categorize_error_by_stage() {
        let discovery: anyhow::Error = CollectError::SourceNotFound(PathBuf::from("cmd")).into();
        assert_eq!(categorize_error(&discovery), ExitCodes::DISCOVERY_FAILURE);

        let validation: anyhow::Error = ModelError::EmptyName {
            ident: "FOO".to_string(),
        }
        .into();
        assert_eq!(categorize_error(&validation), ExitCodes::VALIDATION_FAILURE);

        let general = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&general), ExitCodes::GENERAL_ERROR);
    }

    #[test]
    fn test_context_preserves_the_stage() {
        let err = Err::<(), _>(CollectError::SourceNotFound(PathBuf::from("cmd")))
            .context("command discovery failed")
            .unwrap_err();
        assert_eq!(categorize_error(&err), ExitCodes::DISCOVERY_FAILURE);
    }
}
