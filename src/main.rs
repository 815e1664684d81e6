// ABOUTME: Entry point for the launchpad CLI application.
// ABOUTME: Parses arguments, submits deployments, and polls them to completion.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use launchpad::config::{self, CONFIG_FILENAME, Config};
use launchpad::deploy::{DeploymentRequest, DeploymentStatus, Orchestrator};
use launchpad::error::{Error, Result};
use launchpad::output::{Output, OutputMode};
use launchpad::types::Credential;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);

    if let Err(e) = run(cli.command, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(command: Commands, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;
    match command {
        Commands::Init { force } => {
            config::init_config(&cwd, force)?;
            output.success(&format!("Created {CONFIG_FILENAME}"));
            Ok(())
        }
        Commands::Platforms => {
            let config = Config::discover_or_default(&cwd)?;
            let platforms = Orchestrator::from_config(&config).platforms();
            if output.mode() == OutputMode::Json {
                let names: Vec<_> = platforms.iter().map(|p| p.as_str()).collect();
                println!("{}", serde_json::json!({ "platforms": names }));
            } else {
                for platform in platforms {
                    println!("{platform}");
                }
            }
            Ok(())
        }
        Commands::Deploy {
            repository,
            platform,
            branch,
            github_token,
        } => {
            let config = Config::discover_or_default(&cwd)?;
            let request = DeploymentRequest::parse(
                &repository,
                &platform,
                branch.as_deref(),
                Credential::new(github_token),
            )?;
            deploy(&config, request, output).await
        }
    }
}

/// Submit one deployment and poll it until it reaches a terminal state.
async fn deploy(config: &Config, request: DeploymentRequest, output: &mut Output) -> Result<()> {
    let orchestrator = Orchestrator::from_config(config);

    output.start_timer();
    let submitted = orchestrator.submit(request)?;
    output.submitted(&submitted);
    output.progress("Waiting for the platform to finish...");

    let record = orchestrator
        .wait_for_terminal(&submitted.id, config.poll_interval)
        .await
        .ok_or_else(|| Error::DeploymentNotFound(submitted.id.clone()))?;
    orchestrator.drain().await;

    output.finished(&record);
    if record.status == DeploymentStatus::Error {
        return Err(Error::DeploymentFailed {
            id: record.id,
            message: record.message.unwrap_or_default(),
        });
    }
    Ok(())
}
