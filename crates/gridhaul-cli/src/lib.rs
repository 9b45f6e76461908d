//! Gridhaul CLI library.
//!
//! Terminal styling and output formatting shared by the `gridhaul-cli`
//! binary's subcommands.

pub mod output;
pub mod terminal;
