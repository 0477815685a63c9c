//! Command implementations
//!
//! Each command is the body of one CLI subcommand.

mod simple;

pub use simple::run_simple;
