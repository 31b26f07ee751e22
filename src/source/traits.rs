use crate::error::Result;
use async_trait::async_trait;

/// Where the menu JSON comes from, abstracted for testability
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetch the raw document bytes
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location for logs and error messages
    fn describe(&self) -> String;
}
