use std::fmt::Display;

use crate::ChecksStatus;

/// What happened when synchronizing a dogfood branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DogfoodOutcome {
    /// No pull request could be associated to the event.
    NoPullRequest,
    /// The pull request does not carry the dogfood label.
    MissingLabel { pr_number: u64 },
    /// The pull request checks are not all green.
    ChecksNotGreen { pr_number: u64, status: ChecksStatus },
    /// The dogfood branch now points to the pull request head.
    Published {
        pr_number: u64,
        branch: String,
        sha: String,
    },
}

impl Display for DogfoodOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPullRequest => write!(f, "no pull request found"),
            Self::MissingLabel { pr_number } => {
                write!(f, "skipped PR #{pr_number}: no dogfood label")
            }
            Self::ChecksNotGreen { pr_number, status } => {
                write!(f, "skipped PR #{pr_number}: checks are {status}")
            }
            Self::Published {
                pr_number,
                branch,
                sha,
            } => write!(f, "published PR #{pr_number} to '{branch}' at {sha}"),
        }
    }
}
