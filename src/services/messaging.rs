//! Messaging sink interface.

use crate::error::DeliveryError;
use async_trait::async_trait;

#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver `text` to the configured destination channel.
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
