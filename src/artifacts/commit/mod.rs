//! Commit message rules
//!
//! - `commit_type`: The closed set of accepted conventional commit types
//! - `log_line`: Splitting a oneline log record into hash and message
//! - `validator`: Header pattern matching and type membership check
//!
//! `CommitError` joins the per-record failures so they can be reported together.

pub mod commit_type;
pub mod log_line;
pub mod validator;

use crate::artifacts::commit::log_line::LineError;
use crate::artifacts::commit::validator::ValidationError;
use crate::artifacts::core::Highlighter;

/// Why a single log record was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error(transparent)]
    Line(#[from] LineError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl CommitError {
    pub fn render(&self, highlighter: &dyn Highlighter) -> String {
        highlighter.highlight(&self.to_string())
    }
}

/// Header grammar: `[fixup! ]<type>[(<scope>)]: <description>`, or a bare
/// `Merge branch` prefix.
///
/// The `Merge branch` alternative is already covered by [`MERGE_PREFIXES`];
/// it is kept so the pattern stays compatible with existing hook setups.
/// Whitespace after `fixup!` and word characters are ASCII only.
pub const COMMIT_MESSAGE_REGEX: &str =
    r"^(?:fixup![\t\n\f\r ]*)?([[:word:]]*)(\(([[:word:]$.*/].*)\))?: (.*)|^Merge branch(.*)";

/// Messages starting with one of these are merge commits and skip validation.
pub const MERGE_PREFIXES: [&str; 2] = ["Merge branch", "Merge remote"];
