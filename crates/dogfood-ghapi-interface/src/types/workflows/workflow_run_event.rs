use serde::{Deserialize, Serialize};

use super::{GhWorkflowRun, GhWorkflowRunAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub workflow run event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhWorkflowRunEvent {
    /// Action.
    pub action: GhWorkflowRunAction,
    /// Workflow run.
    pub workflow_run: GhWorkflowRun,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
