mod commit_status_state;
mod status_event;

pub use commit_status_state::GhCommitStatusState;
pub use status_event::{GhStatusCommit, GhStatusEvent};
