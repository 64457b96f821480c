//! Flag registration and binding helpers for generated dispatchers.
//!
//! The generator emits one `flag_*` call per declared flag when it
//! builds the clap command, and one `get_*` call per flag when it
//! binds the dispatcher-scoped variables. Each pair corresponds to one
//! [`FlagKind`](crate::flag::FlagKind) variant.

use std::net::IpAddr;

use clap::{Arg, ArgAction, ArgMatches};

fn base(long: &'static str, short: Option<char>, doc: &'static str) -> Arg {
    let mut arg = Arg::new(long).long(long).help(doc);
    if let Some(c) = short {
        arg = arg.short(c);
    }
    arg
}

/// Boolean flag. Bare `--flag` means true; `--flag=false` is accepted
/// so a true-by-default flag can be switched off.
pub fn flag_bool(long: &'static str, short: Option<char>, default: bool, doc: &'static str) -> Arg {
    base(long, short, doc)
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .default_value(if default { "true" } else { "false" })
        .value_parser(clap::value_parser!(bool))
}

pub fn flag_integer(
    long: &'static str,
    short: Option<char>,
    default: i64,
    doc: &'static str,
) -> Arg {
    base(long, short, doc)
        .value_parser(clap::value_parser!(i64))
        .default_value(default.to_string())
}

pub fn flag_decimal(
    long: &'static str,
    short: Option<char>,
    default: f64,
    doc: &'static str,
) -> Arg {
    base(long, short, doc)
        .value_parser(clap::value_parser!(f64))
        .default_value(format!("{:?}", default))
}

pub fn flag_text(
    long: &'static str,
    short: Option<char>,
    default: &'static str,
    doc: &'static str,
) -> Arg {
    base(long, short, doc).default_value(default)
}

/// Network-address flag. An empty default registers no default value,
/// since the empty string is not an address literal.
pub fn flag_net_addr(
    long: &'static str,
    short: Option<char>,
    default: &'static str,
    doc: &'static str,
) -> Arg {
    let arg = base(long, short, doc).value_parser(clap::value_parser!(IpAddr));
    if default.is_empty() {
        arg
    } else {
        arg.default_value(default)
    }
}

pub fn flag_text_list(
    long: &'static str,
    short: Option<char>,
    default: &'static [&'static str],
    doc: &'static str,
) -> Arg {
    let arg = base(long, short, doc).action(ArgAction::Append);
    if default.is_empty() {
        arg
    } else {
        arg.default_values(default)
    }
}

pub fn get_bool(matches: &ArgMatches, long: &str) -> bool {
    matches.get_one::<bool>(long).copied().unwrap_or_default()
}

pub fn get_integer(matches: &ArgMatches, long: &str) -> i64 {
    matches.get_one::<i64>(long).copied().unwrap_or_default()
}

pub fn get_decimal(matches: &ArgMatches, long: &str) -> f64 {
    matches.get_one::<f64>(long).copied().unwrap_or_default()
}

pub fn get_text(matches: &ArgMatches, long: &str) -> String {
    matches.get_one::<String>(long).cloned().unwrap_or_default()
}

pub fn get_net_addr(matches: &ArgMatches, long: &str) -> IpAddr {
    matches
        .get_one::<IpAddr>(long)
        .copied()
        .unwrap_or_else(|| IpAddr::from([0u8, 0, 0, 0]))
}

pub fn get_text_list(matches: &ArgMatches, long: &str) -> Vec<String> {
    matches
        .get_many::<String>(long)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn command() -> Command {
        Command::new("test")
            .arg(flag_bool("verbose", Some('v'), false, "enable verbose"))
            .arg(flag_integer("retries", None, 3, "retry count"))
            .arg(flag_text("org", Some('o'), "", "org name"))
            .arg(flag_net_addr("host", None, "", "host address"))
            .arg(flag_text_list("label", None, &[], "labels"))
    }

    #[test]
    fn test_defaults_apply_when_flags_absent() {
        let matches = command().get_matches_from(["test"]);
        assert!(!get_bool(&matches, "verbose"));
        assert_eq!(get_integer(&matches, "retries"), 3);
        assert_eq!(get_text(&matches, "org"), "");
        assert!(get_text_list(&matches, "label").is_empty());
    }

    #[test]
    fn test_parsed_values_bind() {
        let matches = command().get_matches_from([
            "test", "-v", "--retries", "7", "-o", "erda", "--host", "10.0.0.1", "--label", "a",
            "--label", "b",
        ]);
        assert!(get_bool(&matches, "verbose"));
        assert_eq!(get_integer(&matches, "retries"), 7);
        assert_eq!(get_text(&matches, "org"), "erda");
        assert_eq!(get_net_addr(&matches, "host"), IpAddr::from([10, 0, 0, 1]));
        assert_eq!(get_text_list(&matches, "label"), vec!["a", "b"]);
    }

    #[test]
    fn test_bool_flag_can_be_switched_off() {
        let cmd = Command::new("test").arg(flag_bool("color", None, true, "colored output"));
        let matches = cmd.get_matches_from(["test", "--color=false"]);
        assert!(!get_bool(&matches, "color"));
    }

    #[test]
    fn test_numeric_defaults_render_as_parseable_values() {
        let cmd = Command::new("test")
            .arg(flag_integer("count", None, 42, "count"))
            .arg(flag_decimal("ratio", None, 2.0, "ratio"));
        let matches = cmd.get_matches_from(["test"]);
        assert_eq!(get_integer(&matches, "count"), 42);
        assert_eq!(get_decimal(&matches, "ratio"), 2.0);
    }

    #[test]
    fn test_list_default_values() {
        let cmd = Command::new("test").arg(flag_text_list("env", None, &["DEV", "TEST"], "envs"));
        let matches = cmd.get_matches_from(["test"]);
        assert_eq!(get_text_list(&matches, "env"), vec!["DEV", "TEST"]);
    }
}
