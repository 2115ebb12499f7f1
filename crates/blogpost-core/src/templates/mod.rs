//! Template system for blog post assembly.
//!
//! Post templates and topic content are embedded into the binary at compile-time via
//! [`include_str!`] in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Post templates use plain `{{field}}` expressions. Every field name must exist in the
//! topic's JSON object, e.g.:
//! - `{{topic}}`: display title of the topic (e.g., `Bond Investing`)
//! - `{{learning_points}}`: pre-formatted Markdown list
//!
//! ## Adding a new topic
//!
//! 1. Create `templates/topics/<key>.json` with every field the post templates use
//! 2. Add a `pub const` with `include_str!` in [`embedded`] and list it in [`embedded::topic_source`]
//! 3. Add the variant to [`crate::keys::Topic`]
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to `embedded.rs` and checked at compile-time.

pub mod embedded;
pub mod renderer;
