//! Report parsing, the safety rules, and the counting fold.

pub mod input;
pub mod report;
pub mod safety;
pub mod solver;
