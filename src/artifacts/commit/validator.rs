use crate::artifacts::commit::commit_type::CommitType;
use crate::artifacts::commit::{COMMIT_MESSAGE_REGEX, MERGE_PREFIXES};
use anyhow::Context;
use regex::Regex;

/// Reasons a commit message is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The message does not match the header grammar exactly once.
    #[error("[{message}] not match")]
    NotMatched { message: String },
    /// The header parsed but its type is outside the allowed set.
    #[error("[{message}] not match")]
    UnknownType {
        message: String,
        commit_type: String,
    },
}

/// Commit message checker holding the compiled header pattern
#[derive(Debug, Clone)]
pub struct MessageValidator {
    pattern: Regex,
}

impl MessageValidator {
    pub fn new() -> anyhow::Result<Self> {
        let pattern = Regex::new(COMMIT_MESSAGE_REGEX)
            .with_context(|| format!("invalid commit message regex: {COMMIT_MESSAGE_REGEX}"))?;

        Ok(Self { pattern })
    }

    /// Checks a single message (without its hash).
    ///
    /// Merge commits are exempt. Anything else must match the header pattern
    /// exactly once and carry one of the allowed [`CommitType`] labels.
    pub fn valid(&self, message: &str) -> Result<(), ValidationError> {
        if MERGE_PREFIXES
            .iter()
            .any(|prefix| message.starts_with(prefix))
        {
            return Ok(());
        }

        let mut matches = self.pattern.captures_iter(message);
        let caps = match (matches.next(), matches.next()) {
            (Some(caps), None) => caps,
            _ => {
                return Err(ValidationError::NotMatched {
                    message: message.to_string(),
                });
            }
        };

        // The `Merge branch` fallback alternative captures no type and is rejected here.
        let commit_type = caps.get(1).map_or("", |m| m.as_str());
        if CommitType::is_allowed(commit_type) {
            Ok(())
        } else {
            Err(ValidationError::UnknownType {
                message: message.to_string(),
                commit_type: commit_type.to_string(),
            })
        }
    }
}

/// Pure pass/fail classification of a message.
pub fn classify(validator: &MessageValidator, message: &str) -> Result<(), ValidationError> {
    validator.valid(message)
}
