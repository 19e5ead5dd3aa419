use async_trait::async_trait;
use dogfood_models::{PrInfo, RepositoryPath};
use shaku::{Component, Interface};

use crate::{events::GhEvent, CoreContext, Result};

/// Workflow runs triggered by this event may be matched against open pull requests.
const PULL_REQUEST_TRIGGER: &str = "pull_request";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolvePullRequestInfoInterface: Interface {
    /// Find the pull request an event is about.
    ///
    /// Returns `None` for unsupported events only. A supported event which
    /// cannot be associated to a pull request still yields its head commit.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
    ) -> Result<Option<PrInfo>>;
}

#[derive(Component)]
#[shaku(interface = ResolvePullRequestInfoInterface)]
pub(crate) struct ResolvePullRequestInfo;

#[async_trait]
impl ResolvePullRequestInfoInterface for ResolvePullRequestInfo {
    #[tracing::instrument(skip(self, ctx, event), fields(repository_path, event = event.kind()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
    ) -> Result<Option<PrInfo>> {
        let pr_info = match event {
            GhEvent::Unsupported { event_name } => {
                tracing::info!(event_name = %event_name, "No pull request info found for this event");
                return Ok(None);
            }
            GhEvent::LabeledPullRequest(e) => {
                let pr = &e.pull_request;
                PrInfo::with_pull_request(pr.number, &pr.head.sha, &pr.head.reference, pr.label_names())
            }
            GhEvent::WorkflowRunCompleted(e) => {
                let run = &e.workflow_run;
                let mut pr_number = None;

                if run.event == PULL_REQUEST_TRIGGER {
                    pr_number = ctx
                        .api_service
                        .pulls_list_open_for_head_sha(
                            repository_path.owner(),
                            repository_path.name(),
                            &run.head_sha,
                        )
                        .await?
                        .first()
                        .map(|pr| pr.number);
                }

                if pr_number.is_none() {
                    pr_number =
                        first_associated_pull_request(ctx, repository_path, &run.head_sha).await?;
                }

                fetch_pr_info(ctx, repository_path, &run.head_sha, pr_number).await?
            }
            GhEvent::CheckSuiteCompleted(e) => {
                let suite = &e.check_suite;
                let pr_number = match suite.pull_requests.first() {
                    Some(pr) => Some(pr.number),
                    None => first_associated_pull_request(ctx, repository_path, &suite.head_sha).await?,
                };

                fetch_pr_info(ctx, repository_path, &suite.head_sha, pr_number).await?
            }
            GhEvent::StatusUpdate(e) => {
                let head_sha = e.head_sha();
                let pr_number = first_associated_pull_request(ctx, repository_path, head_sha).await?;

                fetch_pr_info(ctx, repository_path, head_sha, pr_number).await?
            }
        };

        Ok(Some(pr_info))
    }
}

async fn first_associated_pull_request(
    ctx: &CoreContext<'_>,
    repository_path: &RepositoryPath,
    commit_sha: &str,
) -> Result<Option<u64>> {
    Ok(ctx
        .api_service
        .commit_pulls_list(repository_path.owner(), repository_path.name(), commit_sha)
        .await?
        .first()
        .map(|pr| pr.number))
}

async fn fetch_pr_info(
    ctx: &CoreContext<'_>,
    repository_path: &RepositoryPath,
    head_sha: &str,
    pr_number: Option<u64>,
) -> Result<PrInfo> {
    let Some(pr_number) = pr_number else {
        return Ok(PrInfo::without_pull_request(head_sha));
    };

    let upstream_pr = ctx
        .api_service
        .pulls_get(repository_path.owner(), repository_path.name(), pr_number)
        .await?;

    Ok(PrInfo::with_pull_request(
        pr_number,
        head_sha,
        upstream_pr.head.reference.clone(),
        upstream_pr.label_names(),
    )
    .with_current_head_sha(upstream_pr.head.sha.clone()))
}
