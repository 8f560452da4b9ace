//! Status command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(ctx: &Context, _args: StatusArgs) -> Result<()> {
    let app = ctx.app();

    if app.is_authenticated() {
        output::field("Session", "authenticated");
        let saved_at = ctx
            .store
            .saved_at()
            .context("Failed to read session file")?;
        if let Some(saved_at) = saved_at {
            output::field("Saved", &saved_at.to_rfc3339());
        }
    } else {
        output::field("Session", "anonymous");
    }

    output::field("API", &ctx.backend.api().to_string());
    output::field("Session file", &ctx.store.path().display().to_string());

    Ok(())
}
