use serde::{Deserialize, Serialize};

/// GitHub workflow run action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhWorkflowRunAction {
    /// Completed.
    #[default]
    Completed,
    /// In progress.
    InProgress,
    /// Requested.
    Requested,
    /// Any action not known yet.
    #[serde(other)]
    Unknown,
}
