//! Per-descriptor derivations and dispatcher rendering.
//!
//! Everything here is a pure function of one command descriptor; the
//! filesystem side lives in [`crate::generator`].

use std::collections::HashMap;

use cliforge_model::{ArgKind, ArgSpec, CommandSpec};

use crate::error::CodegenResult;
use crate::renderer::TemplateRenderer;
use crate::templates::DISPATCHER_TEMPLATE;

/// Identifier the parent binding resolves to when no parent command
/// is declared.
pub const ROOT_IDENT: &str = "ROOT";

/// Usage string: command name, then each argument in declared order,
/// angle-bracketed if required, square-bracketed if optional.
pub fn usage_string(command: &CommandSpec) -> String {
    let mut usage = command.name.clone();
    for arg in &command.args {
        if arg.optional {
            usage.push_str(&format!(" [{}]", arg.name));
        } else {
            usage.push_str(&format!(" <{}>", arg.name));
        }
    }
    usage
}

/// Positional arity bounds: minimum is the required count, maximum the
/// total count. The validator guarantees they differ by at most one.
pub fn arity_bounds(command: &CommandSpec) -> (usize, usize) {
    (command.required_args(), command.args.len())
}

/// Identifier of the dispatcher this command attaches to.
pub fn parent_ident(command: &CommandSpec) -> &str {
    command.parent.as_deref().unwrap_or(ROOT_IDENT)
}

/// The `use` lines of the generated unit: always clap and the
/// descriptor runtime; the address type when an argument or flag is
/// network-address kinded; context, handler module, and the
/// error-translation helpers only when a handler is declared.
pub fn dependency_set(command: &CommandSpec) -> Vec<String> {
    let has_handler = command.handler.is_some();
    let mut lines = Vec::new();

    if has_handler && command.uses_net_addr() {
        lines.push("use std::net::IpAddr;".to_string());
        lines.push(String::new());
    }

    let mut clap_items = vec!["Command"];
    if !command.args.is_empty() {
        clap_items.insert(0, "Arg");
    }
    if has_handler {
        let at = clap_items.len() - 1;
        clap_items.insert(at, "ArgMatches");
    }
    if clap_items.len() == 1 {
        lines.push("use clap::Command;".to_string());
    } else {
        lines.push(format!("use clap::{{{}}};", clap_items.join(", ")));
    }

    if has_handler && !command.args.is_empty() {
        lines.push("use cliforge_model::arg::ArgKind;".to_string());
    }
    let mut support = Vec::new();
    if !command.flags.is_empty() {
        support.push("flags");
    }
    if has_handler {
        support.push("term");
    }
    match support.len() {
        0 => {}
        1 => lines.push(format!("use cliforge_model::{};", support[0])),
        _ => lines.push(format!("use cliforge_model::{{{}}};", support.join(", "))),
    }

    if has_handler {
        lines.push(String::new());
        lines.push("use crate::context::Context;".to_string());
        if let Some(module) = command
            .handler
            .as_deref()
            .filter(|h| h.contains("::"))
            .and_then(|h| h.split("::").next())
        {
            lines.push(format!("use crate::{};", module));
        }
    }

    lines
}

/// Render the complete dispatcher source unit for one command.
pub fn render_dispatcher(
    renderer: &TemplateRenderer,
    ident: &str,
    command: &CommandSpec,
) -> CodegenResult<String> {
    let mut vars = HashMap::new();
    vars.insert("ident".to_string(), ident.to_string());
    vars.insert("name".to_string(), command.name.clone());
    vars.insert("parent".to_string(), parent_ident(command).to_string());
    vars.insert("usage".to_string(), usage_string(command));
    vars.insert("uses".to_string(), dependency_set(command).join("\n"));
    vars.insert("builder".to_string(), builder_calls(command));
    vars.insert("run".to_string(), run_fn(command));

    renderer.render(ident, DISPATCHER_TEMPLATE, &vars)
}

/// Chained clap builder calls appended to `Command::new(name)`.
fn builder_calls(command: &CommandSpec) -> String {
    let mut calls = String::new();
    let mut push = |call: String| {
        calls.push_str("\n        ");
        calls.push_str(&call);
    };

    if !command.short_help.is_empty() {
        push(format!(".about({:?})", command.short_help));
    }
    if !command.long_help.is_empty() {
        push(format!(".long_about({:?})", command.long_help));
    }
    if !command.example.is_empty() {
        push(format!(".after_help({:?})", command.example.trim_end()));
    }
    push(".override_usage(USAGE)".to_string());
    if command.hidden {
        push(".hide(true)".to_string());
    }

    let (_, max) = arity_bounds(command);
    if max > 0 {
        push(format!(
            ".arg(Arg::new(\"args\").num_args(0..={}).value_name(\"ARGS\"))",
            max
        ));
    }

    for flag in &command.flags {
        push(format!(
            ".arg(flags::{}({:?}, {}, {}, {:?}))",
            flag.kind.register_fn(),
            flag.long,
            short_expr(flag.short),
            flag.kind.default_literal(),
            flag.doc,
        ));
    }

    calls
}

/// The `run` dispatch function, emitted only when a handler is
/// declared. Body order: arity enforcement, per-argument validate then
/// convert with typed bindings, flag bindings, cursor toggling around
/// the handler call, error translation.
fn run_fn(command: &CommandSpec) -> String {
    let Some(handler) = command.handler.as_deref() else {
        return String::new();
    };

    let (min, max) = arity_bounds(command);
    let mut body = String::new();

    body.push_str(&format!(
        "\n/// Dispatch `{}` with validated positional arguments.\n",
        command.name
    ));
    let matches_param = if max > 0 || !command.flags.is_empty() {
        "matches"
    } else {
        "_matches"
    };
    body.push_str(&format!(
        "pub fn run(ctx: &mut Context, {}: &ArgMatches) -> Result<(), String> {{\n",
        matches_param
    ));

    if max > 0 {
        body.push_str(
            "    let tokens: Vec<&String> = matches\n        .get_many::<String>(\"args\")\n        .map(|values| values.collect())\n        .unwrap_or_default();\n",
        );
        let out_of_bounds = if min == 0 {
            format!("tokens.len() > {}", max)
        } else {
            format!("tokens.len() < {} || tokens.len() > {}", min, max)
        };
        body.push_str(&format!(
            "    if {} {{\n        return Err(format!(\n            \"accepts between {} and {} arg(s), received {{}}\\nusage: {{}}\",\n            tokens.len(),\n            USAGE\n        ));\n    }}\n",
            out_of_bounds, min, max
        ));
    }

    for (index, arg) in command.args.iter().enumerate() {
        body.push_str(&arg_binding(index, arg));
    }

    for flag in &command.flags {
        body.push_str(&format!(
            "    let {}: {} = flags::{}(matches, {:?});\n",
            flag.var_name(),
            short_type(flag.kind.type_tag()),
            flag.kind.getter_fn(),
            flag.long,
        ));
    }

    let mut call_args: Vec<String> = vec!["ctx".to_string()];
    call_args.extend(command.args.iter().map(|a| var_name(&a.name)));
    call_args.extend(command.flags.iter().map(|f| f.var_name()));
    let call = format!("{}({})", handler, call_args.join(", "));

    if command.dont_hide_cursor {
        body.push_str(&format!(
            "    {}.map_err(|err| term::fail_message(&err))\n",
            call
        ));
    } else {
        body.push_str("    term::hide_cursor();\n");
        body.push_str(&format!("    let result = {};\n", call));
        body.push_str("    term::show_cursor();\n");
        body.push_str("    result.map_err(|err| term::fail_message(&err))\n");
    }

    body.push_str("}\n");
    body
}

/// Validate-then-convert binding for one positional argument.
fn arg_binding(index: usize, arg: &ArgSpec) -> String {
    let position = index + 1;
    let kind = kind_expr(&arg.kind);
    let ty = short_type(arg.kind.type_tag());
    let accessor = arg.kind.accessor();
    let var = var_name(&arg.name);

    if arg.optional {
        format!(
            "    let {var}: {ty} = match tokens.get({index}) {{\n        Some(raw) => {{\n            if let Err(err) = {kind}.validate({position}, raw) {{\n                return Err(err.to_string());\n            }}\n            {kind}.convert(raw).{accessor}()\n        }}\n        None => {kind}.convert(\"\").{accessor}(),\n    }};\n"
        )
    } else {
        format!(
            "    let {var}: {ty} = {{\n        let raw = tokens[{index}].as_str();\n        if let Err(err) = {kind}.validate({position}, raw) {{\n            return Err(err.to_string());\n        }}\n        {kind}.convert(raw).{accessor}()\n    }};\n"
        )
    }
}

fn kind_expr(kind: &ArgKind) -> String {
    match kind {
        ArgKind::Text => "ArgKind::Text".to_string(),
        ArgKind::Integer => "ArgKind::Integer".to_string(),
        ArgKind::Decimal => "ArgKind::Decimal".to_string(),
        ArgKind::NetAddr => "ArgKind::NetAddr".to_string(),
        // Parenthesized so the emitted struct literal stays legal in
        // scrutinee position.
        ArgKind::Path { max_segments } => {
            format!("(ArgKind::Path {{ max_segments: {} }})", max_segments)
        }
    }
}

fn short_expr(short: Option<char>) -> String {
    match short {
        Some(c) => format!("Some('{}')", c),
        None => "None".to_string(),
    }
}

/// Unqualified form of a type tag; the qualifying import is part of
/// the dependency set.
fn short_type(tag: &'static str) -> &'static str {
    match tag {
        "std::net::IpAddr" => "IpAddr",
        other => other,
    }
}

fn var_name(name: &str) -> String {
    name.replace('-', "_")
}
