//! CLI command handlers
//!
//! This module contains the command-line shell around the core library:
//! - Argument parsing structures
//! - Command routing and output rendering
//! - Log level selection

pub mod args;
pub mod help;
pub mod router;

pub use args::{Cli, Commands};
pub use help::{build_env_filter, get_log_level};
pub use router::{execute_command, render_output};
