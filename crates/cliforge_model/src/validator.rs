//! Structural validation of command descriptors.
//!
//! Runs once per discovered command before any code is emitted.
//! Fail-fast: the first violation aborts the whole run, so every error
//! carries the identifier of the offending command.

use tracing::debug;

use crate::arg::ArgKind;
use crate::command::CommandSpec;
use crate::error::{ModelError, ModelResult};

/// Validator for command descriptors.
pub struct CommandValidator;

impl CommandValidator {
    /// Validate one command. Pure and I/O-free.
    pub fn validate(ident: &str, command: &CommandSpec) -> ModelResult<()> {
        debug!("Validating command {}", ident);

        if command.name.is_empty() {
            return Err(ModelError::EmptyName {
                ident: ident.to_string(),
            });
        }

        let mut saw_optional = false;
        for (index, arg) in command.args.iter().enumerate() {
            if arg.optional {
                if saw_optional {
                    return Err(ModelError::TooManyOptional {
                        ident: ident.to_string(),
                        arg: arg.name.clone(),
                    });
                }
                saw_optional = true;
            } else if saw_optional {
                return Err(ModelError::RequiredAfterOptional {
                    ident: ident.to_string(),
                    arg: arg.name.clone(),
                    position: index + 1,
                });
            }

            if let ArgKind::Path { max_segments } = arg.kind {
                if !(2..=6).contains(&max_segments) {
                    return Err(ModelError::PathArityOutOfRange {
                        ident: ident.to_string(),
                        arg: arg.name.clone(),
                        max_segments,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate commands in order, stopping at the first failure.
    pub fn validate_all<'a, I>(commands: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a CommandSpec)>,
    {
        for (ident, command) in commands {
            Self::validate(ident, command)?;
        }
        Ok(())
    }
}
