//! Dogfood logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod events;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    checks::determine_checks_status::DetermineChecksStatus,
    dogfood::{
        publish_dogfood_branch::PublishDogfoodBranch,
        synchronize_dogfood_branch::SynchronizeDogfoodBranch,
    },
    pulls::{
        report_pull_request_status::ReportPullRequestStatus,
        resolve_pull_request_info::ResolvePullRequestInfo,
    },
};

module! {
    pub CoreModule {
        components = [
            DetermineChecksStatus, PublishDogfoodBranch, SynchronizeDogfoodBranch,
            ReportPullRequestStatus, ResolvePullRequestInfo
        ],
        providers = []
    }
}
