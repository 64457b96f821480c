//! Generate command - Run the full compile pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cliforge_codegen::Generator;
use cliforge_collect::Scanner;
use cliforge_model::CommandValidator;

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory of command declaration files
    #[arg(short, long, default_value = "cmd")]
    pub source: PathBuf,

    /// Output directory for generated dispatcher sources
    #[arg(short, long, default_value = "generated")]
    pub out: PathBuf,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    info!("Compiling CLI surface from {:?}", args.source);

    let registry = Scanner::scan(&args.source).context("command discovery failed")?;
    println!("🔍 Discovered {} command(s)", registry.len());

    // Discard the previous run's output up front, so a validation
    // failure cannot leave stale dispatchers in place.
    let generator = Generator::new(&args.out);
    generator
        .clean()
        .context("failed to clear the output directory")?;

    CommandValidator::validate_all(
        registry
            .entries()
            .iter()
            .map(|e| (e.ident.as_str(), &e.command)),
    )
    .context("command validation failed")?;

    generator
        .generate(&registry)
        .context("dispatcher generation failed")?;

    println!(
        "✅ Generated {} dispatcher(s) and the registry into {:?}",
        registry.len(),
        args.out
    );
    Ok(())
}
