use crate::areas::git_log::CommitLogSource;
use crate::artifacts::commit::CommitError;
use crate::artifacts::commit::log_line::LogLine;
use crate::artifacts::commit::validator::{MessageValidator, classify};
use crate::artifacts::core::Highlighter;
use anyhow::Context;
use derive_new::new;

/// Number of most recent commits inspected on every run.
pub const MAX_COMMITS: usize = 4;

#[derive(Debug, Clone, new)]
pub struct CheckOptions {
    pub max_count: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::new(MAX_COMMITS)
    }
}

/// Outcome of one pass over the recent history
///
/// Holds the original `<hash> <message>` lines that failed, in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct CheckReport {
    failures: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn render(&self, highlighter: &dyn Highlighter) -> String {
        self.failures
            .iter()
            .map(|line| highlighter.highlight(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Splits one log record and validates its message.
pub fn check_line<'a>(
    validator: &MessageValidator,
    raw: &'a str,
) -> Result<LogLine<'a>, CommitError> {
    let line = LogLine::try_parse(raw)?;
    classify(validator, line.message())?;

    Ok(line)
}

/// Validates every line and collects the failing ones.
///
/// Malformed lines (no message after the hash) count as failures.
pub fn check_lines<S: AsRef<str>>(
    validator: &MessageValidator,
    lines: &[S],
    highlighter: &dyn Highlighter,
) -> CheckReport {
    let mut failures = Vec::new();

    for raw in lines.iter().map(AsRef::as_ref) {
        match check_line(validator, raw) {
            Ok(line) => log::debug!("{} passed.", line.raw()),
            Err(err) => {
                log::debug!("{raw} failed: {}", err.render(highlighter));
                failures.push(raw.to_string());
            }
        }
    }

    CheckReport::new(failures)
}

/// Fetches the recent history from `source` and validates it.
pub fn check(
    source: &dyn CommitLogSource,
    opts: &CheckOptions,
    highlighter: &dyn Highlighter,
) -> anyhow::Result<CheckReport> {
    let validator = MessageValidator::new()?;
    let lines = source
        .fetch_recent_commit_lines(opts.max_count)
        .context("get git log error")?;

    Ok(check_lines(&validator, &lines, highlighter))
}

/// Runs the check and logs its outcome.
pub fn run(
    source: &dyn CommitLogSource,
    opts: &CheckOptions,
    highlighter: &dyn Highlighter,
) -> anyhow::Result<CheckReport> {
    let report = check(source, opts, highlighter)?;

    if report.passed() {
        log::info!("success");
    } else {
        log::error!("valid commit msg failed:\n{}", report.render(highlighter));
    }

    Ok(report)
}
