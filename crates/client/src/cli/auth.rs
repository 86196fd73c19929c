//! Authentication CLI commands.

use clap::{Parser, Subcommand};

/// Authentication commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available authentication actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Create an account and log in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "STUDYTRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and save the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STUDYTRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the logged in user.
    Me,
    /// Forget the saved session.
    Logout,
}
