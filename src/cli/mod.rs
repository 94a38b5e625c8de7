//! Command-line interface module.
//!
//! Provides argument parsing and dispatch to the report counter.

pub mod args;
pub mod commands;
