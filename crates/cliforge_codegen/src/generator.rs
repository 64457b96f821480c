//! Output directory generation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cliforge_collect::CommandRegistry;

use crate::dispatch::render_dispatcher;
use crate::error::{CodegenError, CodegenResult};
use crate::renderer::TemplateRenderer;

/// Name of the registry source unit written next to the dispatchers.
pub const REGISTRY_FILE: &str = "registry.rs";

/// Generator for dispatcher source units.
///
/// The output directory is wholly owned by one run: it is deleted and
/// recreated at the start, and removed again if anything fails, so it
/// is never left partially populated or mixed with stale output.
pub struct Generator {
    out_dir: PathBuf,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a generator writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Remove the output directory, discarding any previous run's
    /// output. The driver calls this before validation so a run that
    /// aborts upstream of generation cannot leave stale dispatchers
    /// behind.
    pub fn clean(&self) -> CodegenResult<()> {
        if self.out_dir.exists() {
            fs::remove_dir_all(&self.out_dir)?;
        }
        Ok(())
    }

    /// Generate the registry unit and one dispatcher unit per command.
    /// All-or-nothing: on any failure the output directory is removed.
    pub fn generate(&self, registry: &CommandRegistry) -> CodegenResult<()> {
        self.clean()?;
        fs::create_dir_all(&self.out_dir)?;

        match self.generate_inner(registry) {
            Ok(()) => {
                info!(
                    "Generated {} dispatcher(s) into {:?}",
                    registry.len(),
                    self.out_dir
                );
                Ok(())
            }
            Err(e) => {
                let _ = fs::remove_dir_all(&self.out_dir);
                Err(e)
            }
        }
    }

    fn generate_inner(&self, registry: &CommandRegistry) -> CodegenResult<()> {
        self.write(REGISTRY_FILE, &registry.render_source())?;

        for entry in registry.entries() {
            // Logged before rendering: the last identifier printed
            // before an abort names the offending command.
            info!("Generating {}", entry.ident);
            let source = render_dispatcher(&self.renderer, &entry.ident, &entry.command)?;
            self.write(&format!("{}.rs", entry.ident), &source)?;
        }

        Ok(())
    }

    fn write(&self, file: &str, content: &str) -> CodegenResult<()> {
        let path = self.out_dir.join(file);
        debug!("Writing {:?}", path);
        fs::write(&path, content).map_err(|source| CodegenError::WriteFailed { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliforge_collect::RegistryEntry;
    use cliforge_model::{CommandSpec, DeclarationKind};
    use tempfile::tempdir;

    fn entry(ident: &str) -> RegistryEntry {
        RegistryEntry {
            ident: ident.to_string(),
            command: CommandSpec {
                kind: DeclarationKind::Command,
                name: ident.to_lowercase(),
                parent: None,
                short_help: String::new(),
                long_help: String::new(),
                example: String::new(),
                hidden: false,
                dont_hide_cursor: false,
                handler: None,
                args: Vec::new(),
                flags: Vec::new(),
            },
        }
    }

    #[test]
    fn test_generates_one_file_per_command_plus_registry() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("generated");
        let registry = CommandRegistry::from_entries(vec![entry("FOO"), entry("BAR")]);

        Generator::new(&out).generate(&registry).unwrap();

        assert!(out.join("registry.rs").exists());
        assert!(out.join("FOO.rs").exists());
        assert!(out.join("BAR.rs").exists());
    }

    #[test]
    fn test_stale_output_is_replaced() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("generated");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("STALE.rs"), "// stale").unwrap();

        let registry = CommandRegistry::from_entries(vec![entry("FOO")]);
        Generator::new(&out).generate(&registry).unwrap();

        assert!(!out.join("STALE.rs").exists());
        assert!(out.join("FOO.rs").exists());
    }
}
