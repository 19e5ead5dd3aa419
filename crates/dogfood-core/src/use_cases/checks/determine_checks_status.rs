use async_trait::async_trait;
use dogfood_ghapi_interface::types::{GhCheckConclusion, GhCheckRun, GhCheckStatus};
use dogfood_models::{ChecksStatus, RepositoryPath};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DetermineChecksStatusInterface: Interface {
    /// Aggregate the check runs of a commit, ignoring runs named `exclude_job`.
    ///
    /// An empty `exclude_job` ignores nothing.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        head_sha: &str,
        exclude_job: &str,
    ) -> Result<ChecksStatus>;
}

#[derive(Component)]
#[shaku(interface = DetermineChecksStatusInterface)]
pub(crate) struct DetermineChecksStatus;

#[async_trait]
impl DetermineChecksStatusInterface for DetermineChecksStatus {
    #[tracing::instrument(skip(self, ctx), fields(repository_path, head_sha, exclude_job), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        head_sha: &str,
        exclude_job: &str,
    ) -> Result<ChecksStatus> {
        let check_runs = ctx
            .api_service
            .check_runs_list(repository_path.owner(), repository_path.name(), head_sha)
            .await?;

        for check_run in &check_runs {
            tracing::debug!(
                name = %check_run.name,
                status = ?check_run.status,
                conclusion = ?check_run.conclusion,
                "Check run"
            );
        }

        Ok(merge_check_runs(&check_runs, exclude_job))
    }
}

fn merge_check_runs(check_runs: &[GhCheckRun], exclude_job: &str) -> ChecksStatus {
    let filtered: Vec<_> = check_runs
        .iter()
        .filter(|r| exclude_job.is_empty() || r.name != exclude_job)
        .collect();

    if filtered.is_empty() {
        return ChecksStatus::Pending;
    }

    let completed_with = |run: &GhCheckRun, conclusion: GhCheckConclusion| {
        run.status == GhCheckStatus::Completed && run.conclusion == Some(conclusion)
    };

    if filtered
        .iter()
        .all(|r| completed_with(r, GhCheckConclusion::Success))
    {
        ChecksStatus::Success
    } else if filtered
        .iter()
        .any(|r| completed_with(r, GhCheckConclusion::Failure))
    {
        ChecksStatus::Failure
    } else {
        ChecksStatus::Pending
    }
}
