//! Generate command implementation.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Args;

use specdraft_core::{GenerationState, UploadFile};

use crate::context::Context;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Requirement notes (use - for stdin)
    #[arg(long)]
    pub text: Option<String>,

    /// Requirements document to upload (.txt or .pdf)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: GenerateArgs) -> Result<()> {
    let mut app = ctx.app();

    let Some(generator) = app.generator() else {
        bail!("Not logged in. Run 'specdraft login' first.");
    };

    let text = if args.text.as_deref() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Some(buf)
    } else {
        args.text
    };

    let file = match args.file {
        Some(ref path) => Some(
            UploadFile::from_path(path)
                .await
                .context("Failed to read requirements file")?,
        ),
        None => None,
    };

    output::progress("Generating specifications...");

    match generator.generate(text, file).await {
        GenerationState::Displaying { result, .. } => {
            if args.json {
                output::json_pretty(result)?;
            } else {
                render::spec(result);
            }
            Ok(())
        }
        GenerationState::IdleWithError(message) => bail!(message.clone()),
        other => bail!("Generation did not complete ({:?})", other),
    }
}
