use serde::{Deserialize, Serialize};

use crate::types::{
    checks::{GhCheckConclusion, GhCheckStatus},
    pulls::GhPullRequestShort,
};

/// GitHub Actions workflow run.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhWorkflowRun {
    /// ID.
    pub id: u64,
    /// Workflow name.
    pub name: Option<String>,
    /// Name of the event which triggered the run, e.g. `pull_request`.
    pub event: String,
    /// Head commit SHA.
    pub head_sha: String,
    /// Head branch.
    pub head_branch: Option<String>,
    /// Status.
    pub status: Option<GhCheckStatus>,
    /// Conclusion.
    pub conclusion: Option<GhCheckConclusion>,
    /// Pull requests.
    pub pull_requests: Vec<GhPullRequestShort>,
}
