//! # cliforge_codegen
//!
//! Dispatcher source generation for cliforge.
//!
//! For every validated command descriptor the generator derives a
//! usage string, positional arity bounds, a dependency set, and a
//! parent binding, then renders a self-contained clap dispatcher unit.
//! One registry unit exposing the sorted identifier and command
//! collections is written alongside the dispatchers.
//!
//! Generation is all-or-nothing: the output directory is recreated at
//! the start of a run and removed entirely when anything fails.

pub mod dispatch;
pub mod error;
pub mod generator;
pub mod renderer;
pub mod templates;

pub use dispatch::{arity_bounds, dependency_set, parent_ident, render_dispatcher, usage_string};
pub use error::{CodegenError, CodegenResult};
pub use generator::{Generator, REGISTRY_FILE};
pub use renderer::TemplateRenderer;
