//! Commit message data structures and rules
//!
//! - `commit`: Log line parsing, commit types and the message validator
//! - `core`: Shared utilities (terminal highlighting)

pub mod commit;
pub mod core;
