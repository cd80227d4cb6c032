// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit and integration tests.

use crate::application::port::{ExternalLink, LinkDispatcher};
use std::sync::{Arc, Mutex};

/// Link dispatcher that remembers every URI instead of opening it.
///
/// Clones share the same log, so a test can keep one handle while the
/// application owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs dispatched so far, oldest first.
    #[must_use]
    pub fn dispatched(&self) -> Vec<String> {
        self.log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl LinkDispatcher for RecordingDispatcher {
    fn dispatch(&self, link: &ExternalLink) {
        if let Ok(mut log) = self.log.lock() {
            log.push(link.as_str().to_string());
        }
    }
}
