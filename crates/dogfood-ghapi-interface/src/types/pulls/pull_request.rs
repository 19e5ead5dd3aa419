use serde::{Deserialize, Serialize};

use super::GhPullRequestState;
use crate::types::common::{GhBranch, GhBranchShort, GhLabel, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// State.
    pub state: GhPullRequestState,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Labels.
    pub labels: Vec<GhLabel>,
    /// Draft.
    pub draft: bool,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
}

impl GhPullRequest {
    /// Label names, in the order GitHub returns them.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }
}

/// GitHub Pull request short format.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct GhPullRequestShort {
    /// Number.
    pub number: u64,
    /// Head branch short format.
    pub head: GhBranchShort,
    /// Base branch short format.
    pub base: GhBranchShort,
}
