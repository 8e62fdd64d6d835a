//! Serve command implementation.
//!
//! Runs the HTTP boundary over a tokio runtime. The asset store lives for
//! the process lifetime, so the sprite is loaded once and shared.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{Result, StampError};
use crate::serve::StampServer;

/// Serve stamp cards over HTTP
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Asset directory (overrides stampcard.yaml)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Address to bind (overrides stampcard.yaml)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let config = Config::load_or_default(Path::new("."))?;
    let assets = args.assets.unwrap_or(config.assets);
    let bind = args.bind.unwrap_or(config.bind);

    tracing_subscriber::fmt::init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| StampError::Internal(format!("failed to start runtime: {e}")))?;

    runtime.block_on(StampServer::new(bind, assets).serve())
}
