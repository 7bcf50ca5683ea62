/// Conventional commit type accepted in a message header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Doc,
    Style,
    Refactor,
    Test,
    Chore,
    Perf,
    Hotfix,
}

const COMMIT_TYPES: phf::Set<&'static str> = phf::phf_set! {
    "feat",
    "fix",
    "docs",
    "doc",
    "style",
    "refactor",
    "test",
    "chore",
    "perf",
    "hotfix",
};

impl CommitType {
    pub const ALL: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Doc,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Perf,
        CommitType::Hotfix,
    ];

    /// Case-sensitive membership check against the allowed set.
    pub fn is_allowed(token: &str) -> bool {
        COMMIT_TYPES.contains(token)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Doc => "doc",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Perf => "perf",
            CommitType::Hotfix => "hotfix",
        }
    }

    /// Comma separated list of every accepted label, for help output.
    pub fn listing() -> String {
        Self::ALL.map(|t| t.to_string()).join(", ")
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
