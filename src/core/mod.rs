//! Core logic with pure functions
//!
//! Nothing in this module performs I/O. Following the "functional core,
//! imperative shell" pattern, all functions here:
//! - Borrow their inputs and return fresh outputs
//! - Have no side effects beyond `tracing` events
//! - Are testable without fixtures or mocks

pub mod arrays;
pub mod operation;
pub mod parse;

pub use arrays::{
    all_rgb, book_end_list, count_short_words, inject_positive, make_math, remove_dollars,
    shout_if_exclaiming, strings_to_integers, triple_numbers,
};
pub use operation::{Input, InputKind, Operation, Output};
pub use parse::{parse_int_or_zero, parse_int_prefix};
