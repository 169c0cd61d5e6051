use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen on the setup page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page mounted: load the device configuration, then scan
    Initialize(SetupOptions),
    /// Page left: pending responses are dropped
    Unmount,

    Wifi(WifiEvent),
    Device(DeviceEvent),
    Ui(UiEvent),
}

/// Scan, network selection and credential submission
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    Scan,
    Choose(AccessPoint),
    SetPassword { password: String },
    Submit,

    // Internal events, skipped from serialization
    #[serde(skip)]
    ScanDelayElapsed { session: u32 },
    #[serde(skip)]
    ScanResponse {
        session: u32,
        result: Result<ScanResponse, String>,
    },
    #[serde(skip)]
    SubmitResponse {
        session: u32,
        result: Result<SubmitResponse, String>,
    },
}

/// Device configuration loading and saving
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    SaveConfig(DeviceConfig),

    #[serde(skip)]
    ConfigResponse {
        session: u32,
        result: Result<DeviceConfig, String>,
    },
    #[serde(skip)]
    SaveConfigResponse {
        session: u32,
        result: Result<SaveConfigResponse, String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectTab(Tab),
    SetDrawerOpen(bool),
    DismissToast,
}
