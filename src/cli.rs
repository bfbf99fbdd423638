use clap::{Parser, Subcommand};

use crate::client::DEFAULT_BASE;

/// OctopusOS local manager control CLI
#[derive(Debug, Parser)]
#[command(name = "octoctl", version, about = "OctopusOS local manager control CLI")]
pub struct Cli {
    /// Manager base URL (trailing slashes are stripped)
    #[arg(long, env = "OCTOCTL_BASE", default_value = DEFAULT_BASE)]
    pub base: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show manager status
    Status,
    /// Start the managed services
    Start,
    /// Stop the managed services
    Stop,
    /// Restart the managed services
    Restart,
    /// Fetch recent log lines from a service
    Logs {
        /// backend|frontend|manager
        #[arg(long, default_value = "backend")]
        service: String,
        /// Number of lines to fetch
        #[arg(long, default_value_t = 200)]
        tail: i64,
    },
}
