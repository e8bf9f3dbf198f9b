//! Trait abstraction for opening links, enabling mocking in tests

use crate::error::IntakeError;
use async_trait::async_trait;

/// Opens a URL in whatever the environment uses for links
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkLauncher: Send + Sync {
    /// Ask the environment to open `url` in a new browsing context
    async fn open(&self, url: &str) -> Result<(), IntakeError>;
}
