//! System browser launcher
//!
//! `wa.me` links are handled by the browser, which forwards them to the
//! WhatsApp app or WhatsApp Web.

use super::traits::LinkLauncher;
use crate::error::IntakeError;
use async_trait::async_trait;

/// Launcher backed by the default system browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl BrowserLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LinkLauncher for BrowserLauncher {
    async fn open(&self, url: &str) -> Result<(), IntakeError> {
        let url = url.to_string();
        // Browser startup can block on some platforms
        let result = tokio::task::spawn_blocking(move || webbrowser::open(&url))
            .await
            .map_err(|e| IntakeError::LaunchFailed(std::io::Error::other(e)))?;

        result.map_err(IntakeError::LaunchFailed)
    }
}
