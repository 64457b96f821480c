//! Source templates for generated dispatcher units.

/// Skeleton of one dispatcher source file. The `builder` variable
/// carries the chained clap builder calls, `run` the dispatch function
/// (empty for grouping commands without a handler).
pub const DISPATCHER_TEMPLATE: &str = r#"// Code generated by cliforge. DO NOT EDIT.
//
// Dispatcher for `{{name}}`, declared as {{ident}}.

{{uses}}

/// Identifier of the parent dispatcher.
pub const PARENT: &str = "{{parent}}";

/// Usage line reported on arity and validation failures.
pub const USAGE: &str = "{{usage}}";

/// Build the clap command for `{{name}}`.
pub fn command() -> Command {
    Command::new("{{name}}"){{builder}}
}
{{run}}"#;
