use clap::Parser;
use commitmsg::areas::git_log::GitCli;
use commitmsg::artifacts::commit::commit_type::CommitType;
use commitmsg::artifacts::core::highlighter_for;
use commitmsg::commands::check::{CheckOptions, MAX_COMMITS, run};
use is_terminal::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "commitmsg",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Check that recent commit messages follow the conventional format",
    long_about = long_about(),
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    /// Arguments passed by git when installed as a hook (`<remote> <url>` for pre-push).
    #[arg(hide = true, trailing_var_arg = true)]
    _hook_args: Vec<String>,
}

fn long_about() -> String {
    format!(
        "Checks that the last {MAX_COMMITS} commit messages follow the conventional format. \
        The repository in the current directory is read with `git log` and the check fails \
        if any message does not look like `<type>[(<scope>)]: <description>`. \
        Accepted types are {}. Merge commits are always accepted.",
        CommitType::listing()
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli = Cli::parse();

    let highlighter = highlighter_for(std::io::stderr().is_terminal());

    match run(&GitCli::default(), &CheckOptions::default(), highlighter.as_ref()) {
        Ok(report) if report.passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
