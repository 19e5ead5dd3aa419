use std::sync::Arc;

use clap::Parser;
use dogfood_config::Config;
use dogfood_core::CoreModule;
use dogfood_ghapi_github::GithubApiService;
use dogfood_models::RepositoryPath;
use tokio::sync::RwLock;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// Publish dogfood branches from GitHub Actions workflows
#[derive(Parser)]
#[command(version, long_about = None, name = "dogfood")]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let repository_path = RepositoryPath::new(&config.repository)?;
            let ctx = CommandContext {
                api_service: Box::new(GithubApiService::new(config.clone())),
                config,
                repository_path,
                core_module: CoreModule::builder().build(),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
