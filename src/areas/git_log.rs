use derive_new::new;
use std::process::Command;

pub const GIT_BINARY: &str = "git";

/// Errors raised while reading the recent commit history
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The git binary could not be started (not installed or not on `PATH`).
    #[error("failed to run `{binary}`")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    /// git ran but exited unsuccessfully (not a repository, no commits yet, ...).
    #[error("`{binary} log` exited with {status}: {stderr}")]
    Failed {
        binary: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("git log output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Source of the most recent commit log lines, newest first
pub trait CommitLogSource {
    fn fetch_recent_commit_lines(&self, count: usize) -> Result<Vec<String>, RetrievalError>;
}

/// Reads history by shelling out to `git log` in the current directory
#[derive(Debug, Clone, new)]
pub struct GitCli {
    binary: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(GIT_BINARY.to_string())
    }
}

impl GitCli {
    pub fn log_args(count: usize) -> Vec<String> {
        vec![
            "log".to_string(),
            "--pretty=oneline".to_string(),
            "--abbrev-commit".to_string(),
            "--no-color".to_string(),
            format!("--max-count={count}"),
        ]
    }
}

impl CommitLogSource for GitCli {
    fn fetch_recent_commit_lines(&self, count: usize) -> Result<Vec<String>, RetrievalError> {
        let output = Command::new(&self.binary)
            .args(Self::log_args(count))
            .output()
            .map_err(|source| RetrievalError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RetrievalError::Failed {
                binary: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(split_log_output(&stdout))
    }
}

/// Splits raw `git log` output on newlines, dropping the empty element left
/// by the trailing newline.
pub fn split_log_output(raw: &str) -> Vec<String> {
    let mut entries = raw.split('\n').map(str::to_string).collect::<Vec<_>>();
    if entries.last().is_some_and(|last| last.is_empty()) {
        entries.pop();
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn requests_oneline_abbreviated_uncolored_history() {
        assert_eq!(
            GitCli::log_args(4),
            vec![
                "log",
                "--pretty=oneline",
                "--abbrev-commit",
                "--no-color",
                "--max-count=4"
            ]
        );
    }

    #[test]
    fn trailing_newline_does_not_produce_an_entry() {
        assert_eq!(
            split_log_output("abc123 feat: a\ndef456 fix: b\n"),
            vec!["abc123 feat: a", "def456 fix: b"]
        );
    }

    #[test]
    fn empty_output_yields_no_entries() {
        assert!(split_log_output("").is_empty());
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let git = GitCli::new("definitely-not-a-git-binary-on-path".to_string());

        let err = git.fetch_recent_commit_lines(4).unwrap_err();

        assert!(matches!(err, RetrievalError::Spawn { .. }));
    }
}
