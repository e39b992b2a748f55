use anyhow::Context;
use clap::Parser;
use complaints_server::cli::{Cli, Command};
use complaints_server::config::AppConfig;
use complaints_server::{logging, server};
use static_permissions_plugin::permission_seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::SeedPermissions => {
            let seed = serde_json::to_string_pretty(&permission_seed())
                .context("failed to serialize permission seed")?;
            println!("{seed}");
            Ok(())
        }
        Command::Serve => {
            let mut cfg = AppConfig::load(cli.config.as_deref())?;
            if let Some(bind) = cli.bind {
                cfg.server.bind_addr = bind;
            }
            logging::init(&cfg.logging)?;
            server::run(&cfg, server::shutdown_signal()).await
        }
    }
}
