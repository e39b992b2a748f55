//! Command-line interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "complaints-server",
    version,
    about = "Complaint tracker API: GAS proxy and permission resolver"
)]
pub struct Cli {
    /// YAML configuration file; env vars prefixed `COMPLAINTS_` override it.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override `server.bind_addr`.
    #[arg(long, global = true, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    #[default]
    Serve,
    /// Print the default permission matrix as settings-store seed rows (JSON).
    SeedPermissions,
}
