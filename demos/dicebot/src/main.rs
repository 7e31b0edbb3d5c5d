//! Dicebot — a small Herald demo.
//!
//! Reads commands from stdin and writes replies to stdout, standing in for
//! a real chat platform. Try:
//!
//! ```text
//! !commands
//! !random 1 6
//! ```
//!
//! The hourly clock event announces the time in the background. Settings
//! live in `herald.toml` next to the binary's working directory.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use herald::prelude::*;

mod client;
mod commands;
mod events;

use client::ConsoleClient;

/// Author identity used for everything typed into the console.
const CONSOLE_AUTHOR: &str = "console";

#[tokio::main]
async fn main() -> Result<()> {
    let config = HeraldConfig::load()?;
    let runtime = HeraldRuntime::from_config(&config)?;

    if let Some(now_playing) = runtime.now_playing() {
        info!(status = %now_playing, "now playing");
    }

    let client: Arc<dyn ChatClient> = Arc::new(ConsoleClient);
    let scheduler = runtime.start_scheduler(Arc::clone(&client));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line? {
                Some(text) => {
                    let ctx = MessageContext::new(
                        CONSOLE_AUTHOR,
                        format!("@{CONSOLE_AUTHOR}"),
                        "general",
                        Arc::clone(&client),
                    );
                    runtime.spawn_dispatch(text, ctx);
                }
                None => break,
            },
        }
    }

    info!("shutting down");
    scheduler.shutdown().await;
    Ok(())
}
