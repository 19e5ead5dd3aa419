mod workflow_run;
mod workflow_run_action;
mod workflow_run_event;

pub use workflow_run::GhWorkflowRun;
pub use workflow_run_action::GhWorkflowRunAction;
pub use workflow_run_event::GhWorkflowRunEvent;
