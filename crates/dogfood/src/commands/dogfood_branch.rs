use async_trait::async_trait;
use clap::Parser;
use dogfood_core::use_cases::dogfood::SynchronizeDogfoodBranchInterface;
use dogfood_models::DogfoodOutcome;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::{load_event, write_notice},
    Result,
};

/// Publish the dogfood branch of the current event pull request, when labeled and green
#[derive(Parser)]
pub(crate) struct DogfoodBranchCommand {
    /// Check run name to ignore (e.g. the job running this command)
    #[arg(long)]
    exclude_job: Option<String>,
}

#[async_trait]
impl Command for DogfoodBranchCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let event = load_event(&ctx.config)?;
        let exclude_job = ctx.exclude_job(&self.exclude_job);

        let synchronize_dogfood_branch: &dyn SynchronizeDogfoodBranchInterface =
            ctx.core_module.resolve_ref();
        let outcome = synchronize_dogfood_branch
            .run(
                &ctx.as_core_context(),
                &ctx.repository_path,
                &event,
                exclude_job,
            )
            .await?;

        if let DogfoodOutcome::MissingLabel { .. } = outcome {
            write_notice(&ctx, "skipped: no dogfood label").await?;
        }

        Ok(())
    }
}
