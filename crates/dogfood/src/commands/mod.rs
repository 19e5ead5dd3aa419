//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use dogfood_config::Config;
use dogfood_core::{CoreContext, CoreModule};
use dogfood_ghapi_interface::ApiService;
use dogfood_models::RepositoryPath;
use tokio::sync::RwLock;

use self::{
    dogfood_branch::DogfoodBranchCommand, pull_request_info::PullRequestInfoCommand,
    show_event::ShowEventCommand,
};
use crate::Result;

mod dogfood_branch;
mod pull_request_info;
mod show_event;

pub(crate) struct CommandContext {
    pub config: Config,
    pub repository_path: RepositoryPath,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }

    /// Check run name to ignore, from the command line or the environment.
    pub fn exclude_job<'a>(&'a self, from_args: &'a Option<String>) -> &'a str {
        from_args
            .as_deref()
            .or(self.config.exclude_job())
            .unwrap_or_default()
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    PullRequestInfo(PullRequestInfoCommand),
    DogfoodBranch(DogfoodBranchCommand),
    ShowEvent(ShowEventCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::PullRequestInfo(sub) => sub.execute(ctx).await,
            Self::DogfoodBranch(sub) => sub.execute(ctx).await,
            Self::ShowEvent(sub) => sub.execute(ctx).await,
        }
    }
}
