//! The sorted command registry.

use cliforge_model::CommandSpec;

/// One discovered command: the registration identifier it was declared
/// under and its descriptor.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub ident: String,
    pub command: CommandSpec,
}

/// All discovered commands, sorted lexicographically by identifier so
/// the registry never depends on filesystem iteration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<RegistryEntry>,
}

impl CommandRegistry {
    /// Build a registry from discovered entries, sorting them.
    pub fn from_entries(mut entries: Vec<RegistryEntry>) -> Self {
        entries.sort_by(|a, b| a.ident.cmp(&b.ident));
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Identifier strings, parallel to [`entries`](Self::entries).
    pub fn idents(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.ident.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the registry source unit: module declarations for every
    /// generated dispatcher plus two parallel, identically ordered
    /// collections, the identifier strings and the command values.
    ///
    /// Pure function of the sorted entries, so re-running over an
    /// unchanged tree yields byte-identical output.
    pub fn render_source(&self) -> String {
        let mut out = String::new();
        out.push_str("// Code generated by cliforge. DO NOT EDIT.\n");
        out.push_str("//\n// Registry of all discovered commands, sorted by identifier.\n\n");
        out.push_str("#![allow(non_snake_case)]\n\n");

        for entry in &self.entries {
            out.push_str(&format!(
                "#[path = \"{ident}.rs\"]\npub mod {ident};\n",
                ident = entry.ident
            ));
        }

        out.push_str("\n/// Registration identifiers, parallel to [`commands`].\n");
        out.push_str("pub static COMMAND_IDENTS: &[&str] = &[\n");
        for entry in &self.entries {
            out.push_str(&format!("    \"{}\",\n", entry.ident));
        }
        out.push_str("];\n");

        out.push_str("\n/// Command values, parallel to [`COMMAND_IDENTS`].\n");
        out.push_str("pub fn commands() -> Vec<clap::Command> {\n    vec![\n");
        for entry in &self.entries {
            out.push_str(&format!("        {}::command(),\n", entry.ident));
        }
        out.push_str("    ]\n}\n");
        out
    }
}
