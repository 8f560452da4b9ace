//! Subcommand implementations.

pub mod generate;
pub mod login;
pub mod logout;
pub mod signup;
pub mod status;

use anyhow::Result;

use crate::cli::Commands;
use crate::context::Context;

pub async fn handle(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Signup(args) => signup::run(ctx, args).await,
        Commands::Login(args) => login::run(ctx, args).await,
        Commands::Logout(args) => logout::run(ctx, args),
        Commands::Status(args) => status::run(ctx, args),
        Commands::Generate(args) => generate::run(ctx, args).await,
    }
}
