//! # cliforge_collect
//!
//! Command declaration discovery for cliforge.
//!
//! The collector walks a source tree, finds one command declaration
//! per file, and produces a [`CommandRegistry`] sorted by registration
//! identifier. The registry also renders the registry source unit that
//! the generator writes alongside the dispatchers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use cliforge_collect::Scanner;
//!
//! let registry = Scanner::scan(Path::new("cmd")).unwrap();
//! for ident in registry.idents() {
//!     println!("{}", ident);
//! }
//! ```

pub mod error;
pub mod registry;
pub mod scanner;

pub use error::{CollectError, CollectResult};
pub use registry::{CommandRegistry, RegistryEntry};
pub use scanner::Scanner;
