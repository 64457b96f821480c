//! Check command - Discover and validate without generating.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cliforge_collect::Scanner;
use cliforge_model::CommandValidator;

#[derive(Args)]
pub struct CheckArgs {
    /// Directory of command declaration files
    #[arg(short, long, default_value = "cmd")]
    pub source: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking command declarations under {:?}", args.source);

    let registry = Scanner::scan(&args.source).context("command discovery failed")?;
    println!("🔍 Discovered {} command(s)", registry.len());

    CommandValidator::validate_all(
        registry
            .entries()
            .iter()
            .map(|e| (e.ident.as_str(), &e.command)),
    )
    .context("command validation failed")?;

    println!("✅ All declarations are valid");
    Ok(())
}
