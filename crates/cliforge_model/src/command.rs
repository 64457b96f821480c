//! Command descriptors.

use serde::{Deserialize, Serialize};

use crate::arg::ArgSpec;
use crate::flag::FlagSpec;

/// The declaration marker. A top-level value is Command-shaped exactly
/// when it carries `kind: command`; anything else is not a command
/// declaration, whatever its other fields look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Command,
}

/// One declared CLI subcommand: its place in the command hierarchy,
/// its help text, its positional arguments and flags, and the handler
/// the generated dispatcher invokes.
///
/// Descriptors are immutable values. They are deserialized once from a
/// declaration file and then threaded read-only through the collector,
/// validator, and generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    pub kind: DeclarationKind,
    pub name: String,
    /// Registration identifier of the parent command; the root
    /// dispatcher when absent.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub short_help: String,
    #[serde(default)]
    pub long_help: String,
    #[serde(default)]
    pub example: String,
    /// Hidden commands are registered but excluded from help listings.
    #[serde(default)]
    pub hidden: bool,
    /// Skip the terminal-cursor toggling the generated body performs
    /// around the handler call.
    #[serde(default)]
    pub dont_hide_cursor: bool,
    /// Rust path of the handler function. Commands without a handler
    /// are pure grouping nodes and get no dispatch body.
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl CommandSpec {
    /// Whether any argument or flag is network-address kinded.
    pub fn uses_net_addr(&self) -> bool {
        self.args
            .iter()
            .any(|a| a.kind == crate::arg::ArgKind::NetAddr)
            || self.flags.iter().any(|f| f.kind.is_net_addr())
    }

    /// Count of required positional arguments.
    pub fn required_args(&self) -> usize {
        self.args.iter().filter(|a| !a.optional).count()
    }
}
