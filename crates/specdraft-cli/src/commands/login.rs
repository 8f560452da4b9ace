//! Login command implementation.

use anyhow::{Result, bail};
use clap::Args;

use specdraft_core::AuthStatus;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: &Context, args: LoginArgs) -> Result<()> {
    let mut app = ctx.app();

    output::progress("Logging in...");

    let Some(status) = app.login(&args.email, &args.password).await else {
        bail!("Already logged in. Run 'specdraft logout' first.");
    };

    match status {
        AuthStatus::Authenticated => {
            output::success("Logged in successfully");
            println!();
            output::field("Email", &args.email);
            output::field("API", &ctx.backend.api().to_string());
            Ok(())
        }
        AuthStatus::AnonymousWithError(message) => bail!(message),
        other => bail!("Login did not complete ({:?})", other),
    }
}
