//! Named flag descriptors.

use serde::{Deserialize, Serialize};

/// A named flag of a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagSpec {
    pub long: String,
    #[serde(default)]
    pub short: Option<char>,
    #[serde(default)]
    pub doc: String,
    #[serde(flatten)]
    pub kind: FlagKind,
}

impl FlagSpec {
    /// Snake-case variable name for the flag's dispatcher binding.
    pub fn var_name(&self) -> String {
        self.long.replace('-', "_")
    }
}

/// Flag kinds, each carrying its typed default value.
///
/// Adjacently tagged so a declaration reads
/// `kind: integer` / `default: 3` on separate lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "default", rename_all = "snake_case")]
pub enum FlagKind {
    Bool(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    NetAddr(String),
    TextList(Vec<String>),
}

impl FlagKind {
    /// Render the default as a literal valid in generated Rust source.
    /// List defaults render element-wise; an empty list renders the
    /// neutral marker `&[]`.
    pub fn default_literal(&self) -> String {
        match self {
            FlagKind::Bool(b) => b.to_string(),
            FlagKind::Integer(i) => i.to_string(),
            // {:?} keeps the decimal point on round values (0 -> 0.0)
            FlagKind::Decimal(d) => format!("{:?}", d),
            FlagKind::Text(s) | FlagKind::NetAddr(s) => format!("{:?}", s),
            FlagKind::TextList(items) => {
                if items.is_empty() {
                    "&[]".to_string()
                } else {
                    let quoted: Vec<String> =
                        items.iter().map(|item| format!("{:?}", item)).collect();
                    format!("&[{}]", quoted.join(", "))
                }
            }
        }
    }

    /// Registration helper the generator emits for this kind, from the
    /// runtime support in [`crate::flags`].
    pub fn register_fn(&self) -> &'static str {
        match self {
            FlagKind::Bool(_) => "flag_bool",
            FlagKind::Integer(_) => "flag_integer",
            FlagKind::Decimal(_) => "flag_decimal",
            FlagKind::Text(_) => "flag_text",
            FlagKind::NetAddr(_) => "flag_net_addr",
            FlagKind::TextList(_) => "flag_text_list",
        }
    }

    /// Accessor the generator emits to bind the parsed value.
    pub fn getter_fn(&self) -> &'static str {
        match self {
            FlagKind::Bool(_) => "get_bool",
            FlagKind::Integer(_) => "get_integer",
            FlagKind::Decimal(_) => "get_decimal",
            FlagKind::Text(_) => "get_text",
            FlagKind::NetAddr(_) => "get_net_addr",
            FlagKind::TextList(_) => "get_text_list",
        }
    }

    /// Rust type of the dispatcher-scoped binding.
    pub fn type_tag(&self) -> &'static str {
        match self {
            FlagKind::Bool(_) => "bool",
            FlagKind::Integer(_) => "i64",
            FlagKind::Decimal(_) => "f64",
            FlagKind::Text(_) => "String",
            FlagKind::NetAddr(_) => "std::net::IpAddr",
            FlagKind::TextList(_) => "Vec<String>",
        }
    }

    /// Whether the kind is backed by a network address.
    pub fn is_net_addr(&self) -> bool {
        matches!(self, FlagKind::NetAddr(_))
    }
}
