//! Console stand-in for a real chat platform.

use async_trait::async_trait;

use herald::{ChatClient, SendResult};

/// Chat client that prints outbound messages to stdout.
///
/// Stands in for the platform integration so the demo runs without any
/// credentials: stdin is the inbound channel, stdout the outbound one.
pub struct ConsoleClient;

#[async_trait]
impl ChatClient for ConsoleClient {
    async fn send_text(&self, channel_id: &str, text: &str) -> SendResult<()> {
        println!("[{channel_id}] {text}");
        Ok(())
    }
}
