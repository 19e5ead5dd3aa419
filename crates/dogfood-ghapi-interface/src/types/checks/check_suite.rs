use serde::{Deserialize, Serialize};

use super::{GhCheckConclusion, GhCheckStatus};
use crate::types::{common::GhApplication, pulls::GhPullRequestShort};

/// GitHub Check suite.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct GhCheckSuite {
    /// ID.
    pub id: u64,
    /// Head branch.
    pub head_branch: Option<String>,
    /// Head commit SHA.
    pub head_sha: String,
    /// Status.
    pub status: Option<GhCheckStatus>,
    /// Conclusion.
    pub conclusion: Option<GhCheckConclusion>,
    /// Pull requests.
    pub pull_requests: Vec<GhPullRequestShort>,
    /// Application.
    pub app: GhApplication,
}
