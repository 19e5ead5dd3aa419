mod check_conclusion;
mod check_run;
mod check_status;
mod check_suite;
mod check_suite_action;
mod check_suite_event;

pub use check_conclusion::GhCheckConclusion;
pub use check_run::GhCheckRun;
pub use check_status::GhCheckStatus;
pub use check_suite::GhCheckSuite;
pub use check_suite_action::GhCheckSuiteAction;
pub use check_suite_event::GhCheckSuiteEvent;
