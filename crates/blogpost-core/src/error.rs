//! Unified error types for the blogpost toolkit.

use thiserror::Error;

/// All errors that can occur while assembling a blog post.
#[derive(Error, Debug)]
pub enum BlogPostError {
    // --- Keys ---

    /// The requested post type is not one of the built-in templates.
    #[error("unsupported template: {key} (available: {available})")]
    UnsupportedTemplate { key: String, available: String },

    /// The requested topic is not one of the built-in content records.
    #[error("unsupported content: {key} (available: {available})")]
    UnsupportedContent { key: String, available: String },

    // --- Substitution ---

    /// A placeholder in the template has no matching field in the content record.
    #[error("missing field '{field}' for template '{template}'")]
    MissingField { template: String, field: String },

    /// Handlebars rendering failed for a reason other than a missing field.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Catalog ---

    /// An embedded template body is not valid Handlebars.
    #[error("invalid template '{name}': {message}")]
    TemplateSyntax { name: String, message: String },

    /// An embedded topic file is not a flat JSON object of strings.
    #[error("failed to parse content record '{name}'")]
    ContentParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Alias for `Result<T, BlogPostError>`.
pub type Result<T> = std::result::Result<T, BlogPostError>;
