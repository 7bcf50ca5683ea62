//! Conventional commit message gate
//!
//! Reads the last few commits of the current repository with `git log` and
//! rejects any whose message does not follow the
//! `<type>[(<scope>)]: <description>` convention. Merge commits are exempt.
//!
//! - `areas`: External collaborators (the `git` binary)
//! - `artifacts`: Log line parsing, commit types, validation and highlighting
//! - `commands`: The check itself and its reporting

pub mod areas;
pub mod artifacts;
pub mod commands;
