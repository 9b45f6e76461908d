// Subcommand handlers. main.rs parses arguments and dispatches here.

pub mod path;
pub mod plan;
