//! # cliforge_model
//!
//! The command descriptor vocabulary for cliforge, plus the runtime
//! support that generated dispatchers link against.
//!
//! A command is declared as an immutable descriptor value: its place in
//! the command hierarchy, positional arguments, flags, and handler
//! reference. Each argument and flag kind supplies a validate rule, a
//! conversion function, and a type tag, so the generator can emit
//! correctly typed dispatch code without knowing the kinds themselves.
//!
//! ## Example
//!
//! ```rust
//! use cliforge_model::ArgKind;
//!
//! let kind = ArgKind::Path { max_segments: 3 };
//! assert!(kind.validate(1, "org/project/app").is_ok());
//! assert!(kind.validate(1, "a/b/c/d").is_err());
//! assert_eq!(kind.type_tag(), "Vec<String>");
//! ```

pub mod arg;
pub mod command;
pub mod error;
pub mod flag;
pub mod flags;
pub mod term;
pub mod validator;

pub use arg::{ArgKind, ArgSpec, ArgValue};
pub use command::{CommandSpec, DeclarationKind};
pub use error::{ModelError, ModelResult};
pub use flag::{FlagKind, FlagSpec};
pub use validator::CommandValidator;
