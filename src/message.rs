//! Conventional commit messages.
//!
//! Every commit the seeder records carries a `type(scope): subject` message,
//! or `type: subject` when the scope is empty.

use std::fmt;

/// The `type` prefix of a conventional commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
}

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single commit message, rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub kind: CommitType,
    /// Empty when the message has no scope.
    pub scope: String,
    pub subject: String,
}

impl CommitMessage {
    pub fn new(kind: CommitType, scope: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            kind,
            scope: scope.into(),
            subject: subject.into(),
        }
    }

    /// A message without a scope, rendered as `type: subject`.
    pub fn unscoped(kind: CommitType, subject: impl Into<String>) -> Self {
        Self::new(kind, "", subject)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope.is_empty() {
            write!(f, "{}: {}", self.kind, self.subject)
        } else {
            write!(f, "{}({}): {}", self.kind, self.scope, self.subject)
        }
    }
}
