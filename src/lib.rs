//! Workspace tooling package.
//!
//! Holds no code of its own; it exists so `rusty-hook` can install the
//! pre-commit checks configured in the root `Cargo.toml`. The planner lives
//! in `crates/gridhaul-lib` and the command-line front end in
//! `crates/gridhaul-cli`.
