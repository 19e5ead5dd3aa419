//! Workflow trigger events.

mod event_type;

use dogfood_ghapi_interface::types::{
    GhCheckSuiteAction, GhCheckSuiteEvent, GhPullRequestAction, GhPullRequestEvent,
    GhStatusEvent, GhWorkflowRunEvent,
};
pub use event_type::{EventType, EventTypeError};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Event parsing error.
#[derive(Debug, Error)]
pub enum EventError {
    /// Malformed payload for a known event type.
    #[error("Error while parsing '{}' event: {}", event_type, source)]
    ParseError {
        event_type: EventType,
        source: serde_json::Error,
    },
}

/// Event which triggered the workflow.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhEvent {
    /// A label was added to a pull request.
    LabeledPullRequest(GhPullRequestEvent),
    /// A workflow run changed state.
    WorkflowRunCompleted(GhWorkflowRunEvent),
    /// A check suite completed.
    CheckSuiteCompleted(GhCheckSuiteEvent),
    /// A commit status changed.
    StatusUpdate(GhStatusEvent),
    /// Anything else.
    Unsupported { event_name: String },
}

impl GhEvent {
    /// Parse an event from its name and JSON payload.
    ///
    /// Unknown event names and actions are not errors, they yield
    /// [`GhEvent::Unsupported`]. Unknown names are not even parsed.
    pub fn parse(event_name: &str, body: &str) -> Result<Self, EventError> {
        let unsupported = || Self::Unsupported {
            event_name: event_name.to_owned(),
        };

        let Ok(event_type) = EventType::try_from(event_name) else {
            return Ok(unsupported());
        };

        Ok(match event_type {
            EventType::PullRequest => {
                let event: GhPullRequestEvent = parse_event_type(event_type, body)?;
                if event.action == GhPullRequestAction::Labeled {
                    Self::LabeledPullRequest(event)
                } else {
                    unsupported()
                }
            }
            EventType::WorkflowRun => Self::WorkflowRunCompleted(parse_event_type(event_type, body)?),
            EventType::CheckSuite => {
                let event: GhCheckSuiteEvent = parse_event_type(event_type, body)?;
                if event.action == GhCheckSuiteAction::Completed {
                    Self::CheckSuiteCompleted(event)
                } else {
                    unsupported()
                }
            }
            EventType::Status => Self::StatusUpdate(parse_event_type(event_type, body)?),
        })
    }

    /// Commit the event is about, if the event is supported.
    pub fn head_sha(&self) -> Option<&str> {
        match self {
            Self::LabeledPullRequest(e) => Some(&e.pull_request.head.sha),
            Self::WorkflowRunCompleted(e) => Some(&e.workflow_run.head_sha),
            Self::CheckSuiteCompleted(e) => Some(&e.check_suite.head_sha),
            Self::StatusUpdate(e) => Some(e.head_sha()),
            Self::Unsupported { .. } => None,
        }
    }

    /// Short variant name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LabeledPullRequest(_) => "labeled-pull-request",
            Self::WorkflowRunCompleted(_) => "workflow-run-completed",
            Self::CheckSuiteCompleted(_) => "check-suite-completed",
            Self::StatusUpdate(_) => "status-update",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

fn parse_event_type<T>(event_type: EventType, body: &str) -> Result<T, EventError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| EventError::ParseError {
        event_type,
        source: e,
    })
}
