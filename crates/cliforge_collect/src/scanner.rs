//! Declaration file scanning.
//!
//! A declaration file is YAML with exactly one top-level mapping entry:
//! the registration identifier bound to a Command-shaped body. The body
//! is Command-shaped when it carries the explicit `kind: command`
//! marker; nothing else is inspected before that check, so unrelated
//! YAML in the tree fails with a discovery error rather than a parse
//! error deep inside the descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;
use walkdir::WalkDir;

use cliforge_model::CommandSpec;

use crate::error::{CollectError, CollectResult};
use crate::registry::{CommandRegistry, RegistryEntry};

/// Scanner for command declaration trees.
pub struct Scanner;

impl Scanner {
    /// Scan a source tree and build the sorted registry.
    ///
    /// Fail-fast: the first file violating a discovery rule aborts the
    /// scan. Files are visited in sorted path order so the reported
    /// error is stable across runs.
    pub fn scan(root: &Path) -> CollectResult<CommandRegistry> {
        if !root.is_dir() {
            return Err(CollectError::SourceNotFound(root.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_declaration_file(e.path()))
            .map(|e| e.into_path())
            .collect();
        files.sort();

        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            entries.push(Self::scan_file(file)?);
        }

        let registry = CommandRegistry::from_entries(entries);

        // Sorted order puts duplicates next to each other.
        for pair in registry.entries().windows(2) {
            if pair[0].ident == pair[1].ident {
                return Err(CollectError::DuplicateIdentifier {
                    path: root.to_path_buf(),
                    ident: pair[1].ident.clone(),
                });
            }
        }

        debug!("Discovered {} commands under {:?}", registry.len(), root);
        Ok(registry)
    }

    /// Scan a single declaration file.
    pub fn scan_file(path: &Path) -> CollectResult<RegistryEntry> {
        debug!("Scanning {:?}", path);
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&content)?;

        let mapping = match value.as_mapping() {
            Some(m) if !m.is_empty() => m,
            _ => {
                return Err(CollectError::NoCommandDeclaration {
                    path: path.to_path_buf(),
                })
            }
        };
        if mapping.len() > 1 {
            return Err(CollectError::MultipleDeclarations {
                path: path.to_path_buf(),
                count: mapping.len(),
            });
        }

        let (key, body) = mapping.iter().next().unwrap();
        let ident = key.as_str().unwrap_or_default();

        let marker = body.get("kind").and_then(Value::as_str);
        if ident.is_empty() || marker != Some("command") {
            return Err(CollectError::NoCommandDeclaration {
                path: path.to_path_buf(),
            });
        }

        if !ident.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            return Err(CollectError::UnexportedIdentifier {
                path: path.to_path_buf(),
                ident: ident.to_string(),
            });
        }
        // The identifier becomes a module name and a file name in the
        // generated output, so it must stay within the identifier
        // character set.
        if !ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CollectError::InvalidIdentifier {
                path: path.to_path_buf(),
                ident: ident.to_string(),
            });
        }

        let command: CommandSpec =
            serde_yaml::from_value(body.clone()).map_err(|e| CollectError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(RegistryEntry {
            ident: ident.to_string(),
            command,
        })
    }
}

fn is_declaration_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_declaration(dir: &Path, file: &str, ident: &str, name: &str) {
        let content = format!("{}:\n  kind: command\n  name: {}\n", ident, name);
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_scan_sorts_identifiers() {
        let temp = tempdir().unwrap();
        write_declaration(temp.path(), "z.yaml", "ZULU", "zulu");
        write_declaration(temp.path(), "a.yaml", "ALPHA", "alpha");

        let registry = Scanner::scan(temp.path()).unwrap();
        assert_eq!(registry.idents(), vec!["ALPHA", "ZULU"]);
    }

    #[test]
    fn test_file_without_marker_is_a_discovery_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("x.yaml"), "FOO:\n  name: foo\n").unwrap();

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(err, CollectError::NoCommandDeclaration { .. }));
    }

    #[test]
    fn test_lowercase_identifier_is_rejected() {
        let temp = tempdir().unwrap();
        write_declaration(temp.path(), "x.yaml", "foo", "foo");

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CollectError::UnexportedIdentifier { ref ident, .. } if ident == "foo"
        ));
    }

    #[test]
    fn test_identifier_with_non_identifier_characters_is_rejected() {
        let temp = tempdir().unwrap();
        write_declaration(temp.path(), "x.yaml", "FOO-BAR", "foo");

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CollectError::InvalidIdentifier { ref ident, .. } if ident == "FOO-BAR"
        ));
    }

    #[test]
    fn test_two_declarations_in_one_file_are_rejected() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("x.yaml"),
            "FOO:\n  kind: command\n  name: foo\nBAR:\n  kind: command\n  name: bar\n",
        )
        .unwrap();

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CollectError::MultipleDeclarations { count: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_identifiers_across_files_are_rejected() {
        let temp = tempdir().unwrap();
        write_declaration(temp.path(), "a.yaml", "FOO", "foo");
        write_declaration(temp.path(), "b.yaml", "FOO", "other");

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CollectError::DuplicateIdentifier { ref ident, .. } if ident == "FOO"
        ));
    }

    #[test]
    fn test_malformed_body_is_an_invalid_format_error() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("x.yaml"),
            "FOO:\n  kind: command\n  name: foo\n  args: notalist\n",
        )
        .unwrap();

        let err = Scanner::scan(temp.path()).unwrap_err();
        assert!(matches!(err, CollectError::InvalidFormat { .. }));
    }

    #[test]
    fn test_non_yaml_files_are_ignored() {
        let temp = tempdir().unwrap();
        write_declaration(temp.path(), "a.yaml", "ALPHA", "alpha");
        fs::write(temp.path().join("README.md"), "# not a declaration").unwrap();

        let registry = Scanner::scan(temp.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
