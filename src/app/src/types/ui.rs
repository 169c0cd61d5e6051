use serde::{Deserialize, Serialize};

use crate::types::TextKey;

/// Pause before asking the device for a scan, giving its radio time to settle
pub const DEFAULT_SCAN_DELAY_MS: u64 = 2000;

/// Tabs of the setup page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Wifi,
    Manage,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

/// Notification for the user
///
/// `id` grows with every toast so a shell can tell two identical
/// notifications in a row apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub key: TextKey,
}

/// Options the shell passes when mounting the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupOptions {
    pub scan_delay_ms: u64,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            scan_delay_ms: DEFAULT_SCAN_DELAY_MS,
        }
    }
}
