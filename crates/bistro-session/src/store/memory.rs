//! Client-visible token surface.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::sink::{TokenSink, TokenSlot};

/// The client-visible surface: the analog of script-accessible local
/// storage. Values persist until cleared; expiry is enforced by the
/// refresh coordinator, not by reads.
#[derive(Debug, Default)]
pub struct MemorySink {
    access: RwLock<Option<String>>,
    refresh: RwLock<Option<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: TokenSlot) -> &RwLock<Option<String>> {
        match slot {
            TokenSlot::Access => &self.access,
            TokenSlot::Refresh => &self.refresh,
        }
    }
}

impl TokenSink for MemorySink {
    fn write(&self, slot: TokenSlot, value: &str, _expires_at: DateTime<Utc>) {
        let mut guard = self
            .slot(slot)
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *guard = Some(value.to_string());
    }

    fn clear(&self, slot: TokenSlot) {
        let mut guard = self
            .slot(slot)
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    fn read(&self, slot: TokenSlot) -> Option<String> {
        self.slot(slot)
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
