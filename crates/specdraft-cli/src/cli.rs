//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use specdraft_core::{ApiUrl, DEFAULT_API_URL};

use crate::commands::{generate, login, logout, signup, status};

/// Generate developer specifications from requirement notes.
#[derive(Parser, Debug)]
#[command(name = "specdraft")]
#[command(author, version = env!("SPECDRAFT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend base URL
    #[arg(long, global = true, env = "SPECDRAFT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: ApiUrl,

    /// Session file (defaults to the platform data directory)
    #[arg(long, global = true, env = "SPECDRAFT_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Signup(signup::SignupArgs),

    /// Log in and store the session
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Show whether a session is stored
    Status(status::StatusArgs),

    /// Generate a specification from text and/or a file
    Generate(generate::GenerateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn api_url_is_validated() {
        let result = Cli::try_parse_from([
            "specdraft",
            "--api-url",
            "http://example.com",
            "status",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn generate_accepts_text_and_file() {
        let cli = Cli::try_parse_from([
            "specdraft",
            "generate",
            "--text",
            "Users can log in",
            "--file",
            "notes.pdf",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.text.as_deref(), Some("Users can log in"));
        assert_eq!(args.file, Some(PathBuf::from("notes.pdf")));
    }
}
