use async_trait::async_trait;
use clap::Parser;
use dogfood_core::use_cases::pulls::ReportPullRequestStatusInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::{load_event, write_outputs},
    Result,
};

/// Resolve the pull request of the current event and report its checks status
#[derive(Parser)]
pub(crate) struct PullRequestInfoCommand {
    /// Check run name to ignore (e.g. the job running this command)
    #[arg(long)]
    exclude_job: Option<String>,
}

#[async_trait]
impl Command for PullRequestInfoCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let event = load_event(&ctx.config)?;
        let exclude_job = ctx.exclude_job(&self.exclude_job);

        let report_pull_request_status: &dyn ReportPullRequestStatusInterface =
            ctx.core_module.resolve_ref();
        let outputs = report_pull_request_status
            .run(
                &ctx.as_core_context(),
                &ctx.repository_path,
                &event,
                exclude_job,
            )
            .await?;

        write_outputs(&ctx, &outputs).await
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use dogfood_core::{use_cases::pulls::MockReportPullRequestStatusInterface, CoreModule};
    use dogfood_models::{ChecksStatus, PullRequestOutputs};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testutils::{test_command, write_event_file, CommandContextTest};

    fn report_returning(expected_exclude_job: &'static str) -> MockReportPullRequestStatusInterface {
        let mut mock = MockReportPullRequestStatusInterface::new();
        mock.expect_run()
            .once()
            .withf(move |_, repository_path, event, exclude_job| {
                repository_path == &("me", "test").into()
                    && event.kind() == "status-update"
                    && exclude_job == expected_exclude_job
            })
            .return_once(|_, _, _, _| {
                Ok(PullRequestOutputs {
                    pr_number: Some(12),
                    pr_head: Some("abcdef".into()),
                    pr_branch_name: Some("feature".into()),
                    pr_status: ChecksStatus::Failure,
                    pr_labels: vec!["dogfood".into(), "bug".into()],
                })
            });
        mock
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.config.event.name = "status".into();
        ctx.config.event.path = write_event_file("pr-info-run", r#"{ "sha": "abcdef" }"#);
        ctx.config.exclude_job = "from-env".into();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ReportPullRequestStatusInterface>(Box::new(
                report_returning("report"),
            ))
            .build();

        assert_eq!(
            test_command(ctx, &["pull-request-info", "--exclude-job", "report"]).await,
            concat!(
                "prNumber=12\n",
                "prHead=abcdef\n",
                "prBranchName=feature\n",
                "prStatus=failure\n",
                "prLabels=[\"dogfood\",\"bug\"]\n",
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_appends_to_output_file() -> Result<(), Box<dyn Error>> {
        let output_path = write_event_file("pr-info-output", "previous=value\n");

        let mut ctx = CommandContextTest::new();
        ctx.config.event.name = "status".into();
        ctx.config.event.path = write_event_file("pr-info-output-event", r#"{ "sha": "abcdef" }"#);
        ctx.config.exclude_job = "from-env".into();
        ctx.config.output.path = output_path.clone();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ReportPullRequestStatusInterface>(Box::new(
                report_returning("from-env"),
            ))
            .build();

        assert_eq!(test_command(ctx, &["pull-request-info"]).await, "");
        assert_eq!(
            std::fs::read_to_string(&output_path)?,
            concat!(
                "previous=value\n",
                "prNumber=12\n",
                "prHead=abcdef\n",
                "prBranchName=feature\n",
                "prStatus=failure\n",
                "prLabels=[\"dogfood\",\"bug\"]\n",
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_unsupported_event() -> Result<(), Box<dyn Error>> {
        // Real use cases, no API call expected.
        let mut ctx = CommandContextTest::new();
        ctx.config.event.name = "push".into();
        ctx.config.event.path = write_event_file("pr-info-unsupported", "{}");

        assert_eq!(
            test_command(ctx, &["pull-request-info"]).await,
            "prNumber=\nprHead=\nprBranchName=\nprStatus=pending\nprLabels=[]\n"
        );

        Ok(())
    }
}
