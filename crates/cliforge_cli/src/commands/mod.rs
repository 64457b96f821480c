//! CLI command definitions.
//!
//! Each subcommand maps to one slice of the compile pipeline:
//! `check` runs discovery and validation, `generate` runs the whole
//! pipeline, `list` prints the discovered surface.

use clap::{Parser, Subcommand};

pub mod check;
pub mod generate;
pub mod list;

/// cliforge - declarative CLI-surface compiler
#[derive(Parser)]
#[command(name = "cliforge")]
#[command(version, about = "cliforge - declarative CLI-surface compiler")]
#[command(long_about = r#"
cliforge compiles a tree of declarative command descriptor files into
ready-to-compile clap dispatcher units plus a sorted command registry.

WORKFLOWS:
  generate  → Discover, validate, and generate dispatcher sources
  check     → Discover and validate only, touching no output
  list      → Print the discovered commands and their usage lines

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Discovery failure
  4 - Validation failure
  5 - Generation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate dispatcher sources from command declarations
    Generate(generate::GenerateArgs),

    /// Validate command declarations without generating anything
    Check(check::CheckArgs),

    /// List the discovered commands
    List(list::ListArgs),
}
