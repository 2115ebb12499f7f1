//! Core library for the blogpost generator.
//!
//! Provides the [`assembler::DocumentAssembler`], which pairs one of the built-in post
//! templates ([`keys::PostType`]) with one of the built-in topic content records
//! ([`keys::Topic`]) and substitutes the topic's fields into the template's placeholders.
//!
//! Templates and topics are embedded at compile time (see [`templates::embedded`]) and
//! rendered with Handlebars in strict mode, so a placeholder without a matching field is
//! an error rather than silently empty text.
//!
//! ```ignore
//! let assembler = blogpost_core::assembler::DocumentAssembler::new()?;
//! let post = assembler.assemble("introductory", "bond_investing")?;
//! print!("{post}");
//! ```

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod keys;
pub mod templates;
