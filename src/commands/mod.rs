//! Command implementations
//!
//! - `check`: Validate the most recent commit messages and report failures

pub mod check;
