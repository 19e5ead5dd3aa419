use async_trait::async_trait;
use dogfood_models::{ChecksStatus, DogfoodOutcome, RepositoryPath};
use shaku::{Component, HasComponent, Interface};

use super::{PublishDogfoodBranchInterface, DOGFOOD_LABEL};
use crate::{
    events::GhEvent,
    use_cases::{checks::DetermineChecksStatusInterface, pulls::ResolvePullRequestInfoInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SynchronizeDogfoodBranchInterface: Interface {
    /// Publish the dogfood branch of a labeled pull request once its checks are green.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
        exclude_job: &str,
    ) -> Result<DogfoodOutcome>;
}

#[derive(Component)]
#[shaku(interface = SynchronizeDogfoodBranchInterface)]
pub(crate) struct SynchronizeDogfoodBranch;

#[async_trait]
impl SynchronizeDogfoodBranchInterface for SynchronizeDogfoodBranch {
    #[tracing::instrument(skip(self, ctx, event), fields(repository_path, event = event.kind(), exclude_job), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
        exclude_job: &str,
    ) -> Result<DogfoodOutcome> {
        let outcome = self
            .synchronize(ctx, repository_path, event, exclude_job)
            .await?;

        tracing::info!(outcome = %outcome, "Dogfood branch synchronization");
        Ok(outcome)
    }
}

impl SynchronizeDogfoodBranch {
    async fn synchronize(
        &self,
        ctx: &CoreContext<'_>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
        exclude_job: &str,
    ) -> Result<DogfoodOutcome> {
        let resolve_pull_request_info: &dyn ResolvePullRequestInfoInterface =
            ctx.core_module.resolve_ref();
        let pr_info = resolve_pull_request_info
            .run(ctx, repository_path, event)
            .await?;

        let Some((pr_info, pr_number)) =
            pr_info.and_then(|info| info.pr_number().map(|number| (info, number)))
        else {
            return Ok(DogfoodOutcome::NoPullRequest);
        };

        tracing::debug!(
            pr_number,
            head_sha = pr_info.head_sha(),
            current_head_sha = pr_info.current_head_sha(),
            branch_name = ?pr_info.branch_name(),
            labels = ?pr_info.labels(),
            "Pull request details"
        );

        if !pr_info.has_label(DOGFOOD_LABEL) {
            return Ok(DogfoodOutcome::MissingLabel { pr_number });
        }

        let Some(branch_name) = pr_info.branch_name() else {
            return Ok(DogfoodOutcome::NoPullRequest);
        };

        let determine_checks_status: &dyn DetermineChecksStatusInterface =
            ctx.core_module.resolve_ref();
        let status = determine_checks_status
            .run(ctx, repository_path, pr_info.current_head_sha(), exclude_job)
            .await?;

        if status != ChecksStatus::Success {
            return Ok(DogfoodOutcome::ChecksNotGreen { pr_number, status });
        }

        let publish_dogfood_branch: &dyn PublishDogfoodBranchInterface =
            ctx.core_module.resolve_ref();
        let branch = publish_dogfood_branch
            .run(
                ctx,
                repository_path,
                pr_number,
                pr_info.current_head_sha(),
                branch_name,
            )
            .await?;

        Ok(DogfoodOutcome::Published {
            pr_number,
            branch,
            sha: pr_info.current_head_sha().to_string(),
        })
    }
}
