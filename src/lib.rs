//! Red-nosed report safety checker.
//!
//! Reads reactor reports (one line of integer levels each) and counts how
//! many are safe under the strict rule or the tolerant "problem dampener"
//! rule. See [`crate::core::safety`] for the rules themselves.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod logging;
