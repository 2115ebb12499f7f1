//! CLI command implementations for blogpost.
//!
//! `generate` backs the default invocation (`blogpost --type .. --topic ..`); the others
//! correspond to subcommands (`blogpost <command>`).

pub mod check;
pub mod generate;
pub mod list;
