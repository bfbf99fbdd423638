mod cli;
mod client;
mod render;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::client::{ClientError, ManagerClient};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let manager = ManagerClient::new(&args.base);

    match dispatch(&manager, &args.command).await {
        Ok(payload) => {
            render::render(&args.command, &payload);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

/// One round trip per invocation; each command maps to exactly one endpoint.
async fn dispatch(manager: &ManagerClient, command: &Command) -> Result<Value, ClientError> {
    match command {
        Command::Status => manager.status().await,
        Command::Start => manager.start().await,
        Command::Stop => manager.stop().await,
        Command::Restart => manager.restart().await,
        Command::Logs { service, tail } => manager.logs(service, *tail).await,
    }
}
