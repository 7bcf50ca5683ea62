use derive_new::new;

/// Errors raised while splitting a `git log --pretty=oneline` record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The record has no whitespace, so there is no message after the hash.
    #[error("malformed log line, expected '<hash> <message>': [{line}]")]
    Malformed { line: String },
}

/// A single oneline log record: abbreviated hash followed by the subject
///
/// The hash is only used to locate the message and is not kept.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogLine<'a> {
    raw: &'a str,
    message: &'a str,
}

impl<'a> LogLine<'a> {
    pub fn try_parse(raw: &'a str) -> Result<Self, LineError> {
        let malformed = || LineError::Malformed {
            line: raw.to_string(),
        };

        let (hash, message) = raw.split_once(char::is_whitespace).ok_or_else(malformed)?;
        if hash.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(raw, message.trim_start()))
    }

    /// The record exactly as it came out of `git log`.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn message(&self) -> &'a str {
        self.message
    }
}
