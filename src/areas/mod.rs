//! External collaborators
//!
//! - `git_log`: Fetching recent commit log lines from the `git` binary

pub mod git_log;
