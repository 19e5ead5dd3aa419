use async_trait::async_trait;
use dogfood_models::{ChecksStatus, PullRequestOutputs, RepositoryPath};
use shaku::{Component, HasComponent, Interface};

use super::ResolvePullRequestInfoInterface;
use crate::{
    events::GhEvent, use_cases::checks::DetermineChecksStatusInterface, CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReportPullRequestStatusInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
        exclude_job: &str,
    ) -> Result<PullRequestOutputs>;
}

#[derive(Component)]
#[shaku(interface = ReportPullRequestStatusInterface)]
pub(crate) struct ReportPullRequestStatus;

#[async_trait]
impl ReportPullRequestStatusInterface for ReportPullRequestStatus {
    #[tracing::instrument(skip(self, ctx, event), fields(repository_path, event = event.kind(), exclude_job), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        event: &GhEvent,
        exclude_job: &str,
    ) -> Result<PullRequestOutputs> {
        let resolve_pull_request_info: &dyn ResolvePullRequestInfoInterface =
            ctx.core_module.resolve_ref();
        let Some(pr_info) = resolve_pull_request_info
            .run(ctx, repository_path, event)
            .await?
        else {
            return Ok(PullRequestOutputs::new(None, ChecksStatus::Pending));
        };

        let determine_checks_status: &dyn DetermineChecksStatusInterface =
            ctx.core_module.resolve_ref();
        let status = determine_checks_status
            .run(ctx, repository_path, pr_info.head_sha(), exclude_job)
            .await?;

        tracing::info!(
            head_sha = pr_info.head_sha(),
            status = %status,
            "Checks status for commit"
        );

        Ok(PullRequestOutputs::new(Some(&pr_info), status))
    }
}

#[cfg(test)]
mod tests {
    use dogfood_models::PrInfo;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            checks::MockDetermineChecksStatusInterface,
            pulls::MockResolvePullRequestInfoInterface,
        },
        CoreModule,
    };

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        let mut resolve_pull_request_info = MockResolvePullRequestInfoInterface::new();
        let mut determine_checks_status = MockDetermineChecksStatusInterface::new();

        resolve_pull_request_info
            .expect_run()
            .once()
            .withf(|_, repository_path, event| {
                repository_path == &("me", "test").into() && event.kind() == "status-update"
            })
            .return_once(|_, _, _| {
                Ok(Some(PrInfo::with_pull_request(
                    4,
                    "abcdef",
                    "feature",
                    vec!["dogfood".into()],
                )))
            });

        determine_checks_status
            .expect_run()
            .once()
            .withf(|_, _, head_sha, exclude_job| head_sha == "abcdef" && exclude_job == "report")
            .return_once(|_, _, _, _| Ok(ChecksStatus::Success));

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ResolvePullRequestInfoInterface>(Box::new(
                resolve_pull_request_info,
            ))
            .with_component_override::<dyn DetermineChecksStatusInterface>(Box::new(
                determine_checks_status,
            ))
            .build();

        let outputs = ReportPullRequestStatus
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &GhEvent::StatusUpdate(Default::default()),
                "report",
            )
            .await
            .unwrap();

        assert_eq!(
            outputs,
            PullRequestOutputs {
                pr_number: Some(4),
                pr_head: Some("abcdef".into()),
                pr_branch_name: Some("feature".into()),
                pr_status: ChecksStatus::Success,
                pr_labels: vec!["dogfood".into()],
            }
        );
    }

    #[tokio::test]
    async fn run_unsupported_event() {
        // Neither checks nor remote calls are expected.
        let ctx = CoreContextTest::new();

        let outputs = ReportPullRequestStatus
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &GhEvent::Unsupported {
                    event_name: "push".into(),
                },
                "",
            )
            .await
            .unwrap();

        assert_eq!(outputs, PullRequestOutputs::default());
        assert_eq!(
            outputs.entries()[3],
            ("prStatus", "pending".to_string())
        );
    }
}
