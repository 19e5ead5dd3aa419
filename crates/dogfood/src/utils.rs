//! Runner I/O helpers.

use std::{fs::OpenOptions, io::Write};

use anyhow::Context;
use dogfood_config::Config;
use dogfood_core::events::GhEvent;
use dogfood_models::PullRequestOutputs;

use crate::{commands::CommandContext, Result};

/// Load the event which triggered the workflow.
pub(crate) fn load_event(config: &Config) -> Result<GhEvent> {
    let body = std::fs::read_to_string(&config.event.path)
        .with_context(|| format!("Could not read event payload at '{}'", config.event.path))?;

    Ok(GhEvent::parse(&config.event.name, &body)?)
}

/// Write step outputs, to the output file when one is configured.
pub(crate) async fn write_outputs(ctx: &CommandContext, outputs: &PullRequestOutputs) -> Result<()> {
    let lines: String = outputs
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect();

    if ctx.config.output.path.is_empty() {
        write!(ctx.writer.write().await, "{lines}")?;
    } else {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&ctx.config.output.path)
            .with_context(|| format!("Could not open output file '{}'", ctx.config.output.path))?;
        file.write_all(lines.as_bytes())?;
    }

    Ok(())
}

/// Emit a runner notice.
pub(crate) async fn write_notice(ctx: &CommandContext, message: &str) -> Result<()> {
    writeln!(ctx.writer.write().await, "::notice::{message}")?;
    Ok(())
}
