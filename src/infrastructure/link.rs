// SPDX-License-Identifier: MPL-2.0
//! Link dispatch through the host operating system.

use crate::application::port::{ExternalLink, LinkDispatcher};

/// Opens links with the browser or mail client registered on the host.
///
/// Uses `open::that_detached`, which spawns the handler and returns
/// immediately. Failures (for example no mail client installed) are logged
/// and otherwise ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkDispatcher;

impl LinkDispatcher for SystemLinkDispatcher {
    fn dispatch(&self, link: &ExternalLink) {
        tracing::info!(scheme = link.scheme().prefix(), "opening {}", link);

        #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
        {
            if let Err(e) = open::that_detached(link.as_str()) {
                tracing::warn!("Failed to open link '{}': {}", link, e);
            }
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            tracing::warn!("Opening links is not supported on this platform: {}", link);
        }
    }
}
