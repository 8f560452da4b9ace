//! Signup command implementation.

use anyhow::{Result, bail};
use clap::Args;

use specdraft_core::AuthStatus;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,
}

pub async fn run(ctx: &Context, args: SignupArgs) -> Result<()> {
    let mut app = ctx.app();

    output::progress("Creating account...");

    let Some(status) = app.signup(&args.email, &args.password).await else {
        bail!("Already logged in. Run 'specdraft logout' first.");
    };

    let notice = app.auth().and_then(|flow| flow.state().notice());
    let notice = signup_notice(status, notice)?;

    output::success(&notice);
    output::field("Email", &args.email);
    Ok(())
}

/// A finished signup leaves the user anonymous; anything else is a failure.
fn signup_notice(status: AuthStatus, notice: Option<&str>) -> Result<String> {
    match status {
        AuthStatus::Anonymous => Ok(notice.unwrap_or_default().to_string()),
        AuthStatus::AnonymousWithError(message) => bail!(message),
        other => bail!("Signup did not complete ({:?})", other),
    }
}
