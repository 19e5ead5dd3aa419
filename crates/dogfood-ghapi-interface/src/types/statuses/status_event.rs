use serde::{Deserialize, Serialize};

use super::GhCommitStatusState;
use crate::types::common::{GhRepository, GhUser};

/// Commit carried by a status event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhStatusCommit {
    /// SHA.
    pub sha: String,
}

/// GitHub commit status event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhStatusEvent {
    /// ID.
    pub id: u64,
    /// Commit SHA.
    pub sha: String,
    /// Status context.
    pub context: String,
    /// State.
    pub state: GhCommitStatusState,
    /// Commit.
    pub commit: Option<GhStatusCommit>,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}

impl GhStatusEvent {
    /// Commit the status was set on, preferring the embedded commit.
    pub fn head_sha(&self) -> &str {
        match &self.commit {
            Some(commit) if !commit.sha.is_empty() => &commit.sha,
            _ => &self.sha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_sha_prefers_commit() {
        let mut event = GhStatusEvent {
            sha: "from-sha".into(),
            commit: Some(GhStatusCommit {
                sha: "from-commit".into(),
            }),
            ..Default::default()
        };
        assert_eq!(event.head_sha(), "from-commit");

        event.commit = None;
        assert_eq!(event.head_sha(), "from-sha");
    }
}
