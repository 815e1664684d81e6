// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Deploy repositories to hosting platforms and track the outcome")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new launchpad.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy a repository and wait for the outcome
    Deploy {
        /// Repository in owner/name form
        repository: String,

        /// Target platform (vercel, netlify, railway)
        #[arg(short, long)]
        platform: String,

        /// Branch to deploy (defaults to the configured default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// GitHub token passed to the platform
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: String,
    },

    /// List platforms available for deployment
    Platforms,
}
