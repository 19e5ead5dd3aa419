use async_trait::async_trait;
use clap::Parser;
use dogfood_core::use_cases::pulls::ResolvePullRequestInfoInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::load_event,
    Result,
};

/// Show the current event and its resolved pull request, without changing anything
#[derive(Parser)]
pub(crate) struct ShowEventCommand;

#[async_trait]
impl Command for ShowEventCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let event = load_event(&ctx.config)?;

        let resolve_pull_request_info: &dyn ResolvePullRequestInfoInterface =
            ctx.core_module.resolve_ref();
        let pr_info = resolve_pull_request_info
            .run(&ctx.as_core_context(), &ctx.repository_path, &event)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Event '{}' on repository '{}': {}",
            ctx.config.event.name,
            ctx.repository_path,
            event.kind()
        )?;
        match pr_info {
            Some(pr_info) => writeln!(ctx.writer.write().await, "{:#?}", pr_info)?,
            None => writeln!(ctx.writer.write().await, "No pull request info found.")?,
        }

        Ok(())
    }
}
