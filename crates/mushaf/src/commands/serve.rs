//! Serve command - run the JSON API server in the foreground.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Args;
use mushaf_server::{Server, ServerConfig};

use super::Context;
use crate::client::build_client;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides [server] bind in config)
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
}

/// Run the serve command.
pub async fn run(args: ServeArgs, ctx: &Context) -> Result<()> {
    let loaded = ctx.load_config()?;
    let client = build_client(&loaded.config)?;

    let mut config = ServerConfig::new();
    if let Some(addr) = args.bind.or(loaded.config.server.bind) {
        config = config.with_bind_address(addr);
    }

    if ctx.verbose {
        eprintln!("Content API: {}", client.base_url());
    }
    println!("Listening on http://{}", config.bind_address);

    Server::new(client, config).run().await?;
    Ok(())
}
