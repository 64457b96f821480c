//! Positional argument descriptors.
//!
//! Every argument kind supplies the same three operations: a syntactic
//! `validate` on the raw token, a `convert` that is total once
//! `validate` passed, and a `type_tag` naming the Rust type the
//! generator binds the converted value to. Adding a kind is a data
//! change: one enum variant plus one arm in each operation.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A positional argument of a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgSpec {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    pub kind: ArgKind,
}

/// Argument kinds with their validation and conversion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    /// Free-form text, accepted verbatim.
    Text,
    /// Base-10 signed integer.
    Integer,
    /// Decimal number.
    Decimal,
    /// IP address literal.
    NetAddr,
    /// Slash-delimited hierarchical path of at most `max_segments`
    /// segments, `max_segments` in 2..=6.
    Path { max_segments: u8 },
}

/// A converted argument value, produced by [`ArgKind::convert`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    NetAddr(IpAddr),
    Path(Vec<String>),
}

impl ArgKind {
    /// Syntactically check a raw token. `position` is the 1-based
    /// positional index, used only for error reporting.
    pub fn validate(&self, position: usize, raw: &str) -> Result<(), ModelError> {
        match self {
            ArgKind::Text => Ok(()),
            ArgKind::Integer => raw
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| invalid(position, format!("'{}' is not an integer", raw))),
            ArgKind::Decimal => raw
                .parse::<f64>()
                .map(|_| ())
                .map_err(|_| invalid(position, format!("'{}' is not a decimal number", raw))),
            ArgKind::NetAddr => raw
                .parse::<IpAddr>()
                .map(|_| ())
                .map_err(|_| invalid(position, format!("'{}' is not a valid address", raw))),
            ArgKind::Path { max_segments } => {
                let trimmed = raw.trim_matches('/');
                if trimmed.is_empty() {
                    return Ok(());
                }
                let segments: Vec<&str> = trimmed.split('/').collect();
                if segments.iter().any(|s| s.is_empty()) {
                    return Err(invalid(
                        position,
                        format!("'{}' contains an empty path segment", raw),
                    ));
                }
                if segments.len() > usize::from(*max_segments) {
                    return Err(invalid(
                        position,
                        format!(
                            "'{}' has {} segments, at most {} allowed",
                            raw,
                            segments.len(),
                            max_segments
                        ),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Convert a raw token that already passed [`validate`](Self::validate).
    /// Total: any token accepted by `validate` converts without panic;
    /// unvalidated input falls back to the kind's neutral value.
    pub fn convert(&self, raw: &str) -> ArgValue {
        match self {
            ArgKind::Text => ArgValue::Text(raw.to_string()),
            ArgKind::Integer => ArgValue::Integer(raw.parse().unwrap_or_default()),
            ArgKind::Decimal => ArgValue::Decimal(raw.parse().unwrap_or_default()),
            ArgKind::NetAddr => ArgValue::NetAddr(
                raw.parse()
                    .unwrap_or_else(|_| IpAddr::from([0u8, 0, 0, 0])),
            ),
            ArgKind::Path { max_segments } => {
                let n = usize::from(*max_segments);
                let trimmed = raw.trim_matches('/');
                let mut segments: Vec<String> = if trimmed.is_empty() {
                    Vec::new()
                } else {
                    trimmed.split('/').map(str::to_string).collect()
                };
                segments.truncate(n);
                segments.resize(n, String::new());
                ArgValue::Path(segments)
            }
        }
    }

    /// Rust type the generator binds the converted value to.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ArgKind::Text => "String",
            ArgKind::Integer => "i64",
            ArgKind::Decimal => "f64",
            ArgKind::NetAddr => "std::net::IpAddr",
            ArgKind::Path { .. } => "Vec<String>",
        }
    }

    /// Name of the [`ArgValue`] accessor matching [`type_tag`](Self::type_tag).
    pub fn accessor(&self) -> &'static str {
        match self {
            ArgKind::Text => "into_text",
            ArgKind::Integer => "into_integer",
            ArgKind::Decimal => "into_decimal",
            ArgKind::NetAddr => "into_net_addr",
            ArgKind::Path { .. } => "into_path",
        }
    }
}

impl ArgValue {
    pub fn into_text(self) -> String {
        match self {
            ArgValue::Text(s) => s,
            _ => String::new(),
        }
    }

    pub fn into_integer(self) -> i64 {
        match self {
            ArgValue::Integer(i) => i,
            _ => 0,
        }
    }

    pub fn into_decimal(self) -> f64 {
        match self {
            ArgValue::Decimal(d) => d,
            _ => 0.0,
        }
    }

    pub fn into_net_addr(self) -> IpAddr {
        match self {
            ArgValue::NetAddr(a) => a,
            _ => IpAddr::from([0u8, 0, 0, 0]),
        }
    }

    pub fn into_path(self) -> Vec<String> {
        match self {
            ArgValue::Path(p) => p,
            _ => Vec::new(),
        }
    }
}

fn invalid(position: usize, message: String) -> ModelError {
    ModelError::InvalidArgument { position, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_validate() {
        assert!(ArgKind::Integer.validate(1, "42").is_ok());
        assert!(ArgKind::Integer.validate(1, "-7").is_ok());
        assert!(ArgKind::Integer.validate(1, "4.2").is_err());
        assert!(ArgKind::Integer.validate(1, "forty").is_err());
    }

    #[test]
    fn test_net_addr_validate() {
        assert!(ArgKind::NetAddr.validate(1, "10.0.0.1").is_ok());
        assert!(ArgKind::NetAddr.validate(1, "::1").is_ok());
        assert!(ArgKind::NetAddr.validate(1, "10.0.0").is_err());
    }

    #[test]
    fn test_path_validate_segment_count() {
        let kind = ArgKind::Path { max_segments: 3 };
        assert!(kind.validate(1, "org/project/app").is_ok());
        assert!(kind.validate(1, "org/project").is_ok());
        assert!(kind.validate(1, "/org/project/").is_ok());
        assert!(kind.validate(1, "a/b/c/d").is_err());
        assert!(kind.validate(1, "org//app").is_err());
    }

    #[test]
    fn test_path_empty_inputs_are_valid() {
        let kind = ArgKind::Path { max_segments: 2 };
        assert!(kind.validate(1, "").is_ok());
        assert!(kind.validate(1, "/").is_ok());
        assert_eq!(
            kind.convert(""),
            ArgValue::Path(vec![String::new(), String::new()])
        );
        assert_eq!(
            kind.convert("/"),
            ArgValue::Path(vec![String::new(), String::new()])
        );
    }

    #[test]
    fn test_path_convert_pads_trailing_segments() {
        let kind = ArgKind::Path { max_segments: 4 };
        assert_eq!(
            kind.convert("org/project"),
            ArgValue::Path(vec![
                "org".to_string(),
                "project".to_string(),
                String::new(),
                String::new(),
            ])
        );
    }

    #[test]
    fn test_path_round_trip_up_to_padding() {
        let kind = ArgKind::Path { max_segments: 3 };
        for raw in ["a", "a/b", "a/b/c", "/a/b/"] {
            let first = kind.convert(raw).into_path();
            let joined = first
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join("/");
            assert_eq!(kind.convert(&joined).into_path(), first);
        }
    }

    #[test]
    fn test_convert_after_validate_is_total() {
        assert_eq!(ArgKind::Integer.convert("42"), ArgValue::Integer(42));
        assert_eq!(ArgKind::Decimal.convert("1.5"), ArgValue::Decimal(1.5));
        assert_eq!(
            ArgKind::Text.convert("anything at all"),
            ArgValue::Text("anything at all".to_string())
        );
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(ArgKind::Text.type_tag(), "String");
        assert_eq!(ArgKind::Integer.type_tag(), "i64");
        assert_eq!(
            ArgKind::Path { max_segments: 5 }.type_tag(),
            "Vec<String>"
        );
    }

    #[test]
    fn test_kind_deserializes_from_yaml() {
        let kind: ArgKind = serde_yaml::from_str("integer").unwrap();
        assert_eq!(kind, ArgKind::Integer);

        let kind: ArgKind = serde_yaml::from_str("path:\n  max_segments: 3\n").unwrap();
        assert_eq!(kind, ArgKind::Path { max_segments: 3 });
    }
}
