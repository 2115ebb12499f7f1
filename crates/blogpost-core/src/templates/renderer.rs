//! Handlebars-based template renderer for post assembly.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Strict mode ensures that any `{{variable}}` referenced in a template
//! must be present in the data context, otherwise rendering returns
//! [`BlogPostError::MissingField`] naming the variable. Output is Markdown, so field
//! values are inserted verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let mut renderer = TemplateRenderer::new();
//! renderer.register("introductory", embedded::INTRODUCTORY)?;
//! let data = serde_json::json!({ "topic": "Bond Investing", /* ... */ });
//! let output = renderer.render("introductory", &data)?;
//! ```

use handlebars::{Handlebars, RenderErrorReason};
use serde::Serialize;

use crate::error::{BlogPostError, Result};

/// Template renderer holding the compiled post templates.
///
/// Templates are compiled once by [`register`](Self::register) and rendered by name.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create an empty renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Compile a template body and register it under `name`.
    pub fn register(&mut self, name: &str, body: &str) -> Result<()> {
        self.hbs
            .register_template_string(name, body)
            .map_err(|e| BlogPostError::TemplateSyntax {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.hbs.has_template(name)
    }

    /// Render a registered template with the given data context.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.hbs.render(name, data).map_err(|e| match e.reason() {
            RenderErrorReason::MissingVariable(Some(field)) => BlogPostError::MissingField {
                template: name.to_string(),
                field: field.clone(),
            },
            _ => BlogPostError::TemplateRender(e.to_string()),
        })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
