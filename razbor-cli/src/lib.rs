//! razbor CLI library
//!
//! Command-line front end for the `razbor-core` word tokenizer.

pub mod commands;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
