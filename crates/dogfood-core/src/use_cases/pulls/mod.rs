pub(crate) mod report_pull_request_status;
pub(crate) mod resolve_pull_request_info;

pub use report_pull_request_status::ReportPullRequestStatusInterface;
pub use resolve_pull_request_info::ResolvePullRequestInfoInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    report_pull_request_status::MockReportPullRequestStatusInterface,
    resolve_pull_request_info::MockResolvePullRequestInfoInterface,
};
