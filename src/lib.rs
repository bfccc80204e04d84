//! # arrayops
//!
//! Small, pure array transformations: bookends, tripling, lenient integer
//! parsing, message filtering, word counting, color checks and sum rendering.
//!
//! ## Usage
//!
//! ```bash
//! arrayops run make-math 1 2 3        # 6=1+2+3
//! arrayops --output json run shout 'hi!' 'what?' ok
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure array functions, integer-prefix parsing and named operations
//! - `config` - Layered configuration (defaults, TOML file, environment)
//! - `cli` - Command-line argument structures and routing
//! - `error` - Error type for parsing and dispatch
pub mod cli;
pub mod config;
pub mod core;
pub mod error;


pub use crate::core::arrays::{
    all_rgb, book_end_list, count_short_words, inject_positive, make_math, remove_dollars,
    shout_if_exclaiming, strings_to_integers, triple_numbers,
};
pub use crate::core::{Input, InputKind, Operation, Output};
pub use error::{Error, Result};
