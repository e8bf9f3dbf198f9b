//! Link launching for the chat hand-off

mod browser;
mod traits;

pub use browser::BrowserLauncher;
pub use traits::LinkLauncher;

#[cfg(test)]
pub use traits::MockLinkLauncher;
