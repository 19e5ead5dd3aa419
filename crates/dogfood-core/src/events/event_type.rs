//! Event types.

use std::convert::TryFrom;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent { event: String },
}

/// Event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Check suite event.
    CheckSuite,
    /// Pull request event.
    PullRequest,
    /// Commit status event.
    Status,
    /// Workflow run event.
    WorkflowRun,
}

impl EventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "check_suite" => Ok(Self::CheckSuite),
            "pull_request" => Ok(Self::PullRequest),
            "status" => Ok(Self::Status),
            "workflow_run" => Ok(Self::WorkflowRun),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::CheckSuite => "check_suite",
            EventType::PullRequest => "pull_request",
            EventType::Status => "status",
            EventType::WorkflowRun => "workflow_run",
        }
    }
}
