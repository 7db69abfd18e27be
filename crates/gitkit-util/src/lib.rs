//! Shared helpers for gitkit.
//!
//! This crate holds the small utilities the rest of the workspace leans on:
//! - [`ShellCommand`]: external command execution with captured or inherited
//!   stdio
//! - [`resolve_path`]: home expansion and lexical path normalization

mod error;
mod path;
mod shell;

pub use error::{ShellError, ShellResult};
pub use path::resolve_path;
pub use shell::{ShellCommand, ShellOutput};
