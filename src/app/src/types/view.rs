use serde::{Deserialize, Serialize};

use crate::types::{AccessPoint, DeviceConfig, Tab, Toast};

/// Lock indicator shown next to a network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LockIcon {
    Open,
    Locked,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkView {
    pub ssid: String,
    pub authmode: u8,
    pub rssi: Option<i32>,
    pub lock: LockIcon,
    pub selected: bool,
}

impl NetworkView {
    pub fn from_access_point(ap: &AccessPoint, selected_ssid: &str) -> Self {
        Self {
            ssid: ap.ssid.clone(),
            authmode: ap.authmode,
            rssi: ap.rssi,
            lock: if ap.is_open() {
                LockIcon::Open
            } else {
                LockIcon::Locked
            },
            selected: !selected_ssid.is_empty() && ap.ssid == selected_ssid,
        }
    }

    /// The item to hand back to the core when the user picks this network
    pub fn access_point(&self) -> AccessPoint {
        AccessPoint {
            ssid: self.ssid.clone(),
            authmode: self.authmode,
            rssi: self.rssi,
        }
    }
}

/// What the shell renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub loading: bool,
    pub active_tab: Tab,
    pub config: DeviceConfig,
    pub scanning: bool,
    pub support_5g: bool,
    pub networks: Vec<NetworkView>,
    pub drawer_open: bool,
    pub selected_ssid: Option<String>,
    pub has_password: bool,
    pub submitting: bool,
    pub saving_config: bool,
    pub toast: Option<Toast>,
}
