use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::Path;

#[derive(Debug, Clone, new)]
pub struct FakeAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> FakeAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    FakeAuthor::new(name, email)
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();

    repository_dir
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Records an empty commit with the given message and a random author.
pub fn git_commit(dir: &Path, message: &str) -> Command {
    let author = generate_random_author();
    let mut cmd = run_git_command(
        dir,
        &[
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "--allow-empty",
            "--allow-empty-message",
            "-m",
            message,
        ],
    );
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", &author.name),
        ("GIT_AUTHOR_EMAIL", &author.email),
        ("GIT_COMMITTER_NAME", &author.name),
        ("GIT_COMMITTER_EMAIL", &author.email),
    ]);
    cmd
}

/// Commits the messages oldest first, so the last one ends up at HEAD.
pub fn git_commit_all(dir: &Path, messages: &[&str]) {
    for message in messages {
        git_commit(dir, message).assert().success();
    }
}

/// The oneline log record git prints for the commit whose subject is `message`.
pub fn oneline_record(dir: &Path, message: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(
        dir,
        &["log", "--pretty=oneline", "--abbrev-commit", "--no-color"],
    )
    .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    stdout
        .lines()
        .find(|line| line.split_once(' ').is_some_and(|(_, subject)| subject == message))
        .map(str::to_string)
        .ok_or_else(|| format!("no commit with message {message:?}").into())
}

pub fn run_commitmsg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitmsg").expect("Failed to find commitmsg binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    // keep git from discovering a repository above the temp dir
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd
}
