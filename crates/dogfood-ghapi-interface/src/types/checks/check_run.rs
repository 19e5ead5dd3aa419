use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{GhCheckConclusion, GhCheckStatus};
use crate::types::common::GhApplication;

/// GitHub Check run.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct GhCheckRun {
    /// ID.
    pub id: u64,
    /// Name
    pub name: String,
    /// Head commit SHA.
    pub head_sha: String,
    /// Status.
    pub status: GhCheckStatus,
    /// Conclusion.
    pub conclusion: Option<GhCheckConclusion>,
    /// Application.
    pub app: Option<GhApplication>,
    /// Started at.
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    /// Completed at.
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl GhCheckRun {
    /// Build a check run from its name, status and conclusion.
    pub fn new<T: Into<String>>(
        name: T,
        status: GhCheckStatus,
        conclusion: Option<GhCheckConclusion>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            conclusion,
            ..Default::default()
        }
    }
}
