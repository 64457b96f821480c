//! List command - Print the discovered command surface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cliforge_codegen::{parent_ident, usage_string};
use cliforge_collect::Scanner;

#[derive(Args)]
pub struct ListArgs {
    /// Directory of command declaration files
    #[arg(short, long, default_value = "cmd")]
    pub source: PathBuf,

    /// Include hidden commands
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let registry = Scanner::scan(&args.source).context("command discovery failed")?;

    for entry in registry.entries() {
        if entry.command.hidden && !args.all {
            continue;
        }
        let hidden = if entry.command.hidden { " (hidden)" } else { "" };
        println!(
            "{:<28} {} → {}{}",
            entry.ident,
            parent_ident(&entry.command),
            usage_string(&entry.command),
            hidden
        );
    }

    println!("\n{} command(s)", registry.len());
    Ok(())
}
