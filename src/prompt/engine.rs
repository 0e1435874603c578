use crate::error::PromptError;
use tera::Tera;

/// Tera-backed template engine for building structured prompts.
///
/// Templates are registered under names without an `.html` suffix, so Tera
/// never autoescapes the values inserted into them.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create with inline templates (no filesystem).
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register a template from a string.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| render_error(&e))
    }

    /// Render a named template with the given context.
    pub fn render(
        &self,
        template_name: &str,
        context: &tera::Context,
    ) -> Result<String, PromptError> {
        self.tera
            .render(template_name, context)
            .map_err(|e| render_error(&e))
    }
}

fn render_error(err: &tera::Error) -> PromptError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    PromptError::Render(message)
}
