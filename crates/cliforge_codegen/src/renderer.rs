//! `{{variable}}` template rendering.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{CodegenError, CodegenResult};

/// Renderer for the dispatcher templates.
///
/// Strict by contract: a placeholder left unsubstituted after
/// rendering is a generation error, not silently emitted text.
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new template renderer.
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render a template, substituting every `{{variable}}`.
    pub fn render(
        &self,
        ident: &str,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> CodegenResult<String> {
        let rendered = self
            .variable_pattern
            .replace_all(template, |caps: &regex::Captures| {
                let var_name = &caps[1];
                variables
                    .get(var_name)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", var_name))
            })
            .to_string();

        // Variables may expand to text carrying placeholders of their
        // own (malformed descriptor data); scan the final output.
        if let Some(caps) = self.variable_pattern.captures(&rendered) {
            return Err(CodegenError::RenderingFailed {
                ident: ident.to_string(),
                placeholder: caps[1].to_string(),
            });
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_variables() {
        let renderer = TemplateRenderer::new();
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "stop".to_string());
        vars.insert("parent".to_string(), "ROOT".to_string());

        let rendered = renderer
            .render("FOO", "Command::new(\"{{name}}\") // {{parent}}", &vars)
            .unwrap();
        assert_eq!(rendered, "Command::new(\"stop\") // ROOT");
    }

    #[test]
    fn test_missing_variable_is_a_rendering_error() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render("FOO", "pub const PARENT: &str = \"{{parent}}\";", &HashMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CodegenError::RenderingFailed { ref placeholder, .. } if placeholder == "parent"
        ));
    }
}
