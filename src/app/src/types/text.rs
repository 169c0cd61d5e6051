use serde::{Deserialize, Serialize};

/// Keys of all user-facing texts the page emits.
///
/// The core never translates: it hands these keys to the shell, which resolves
/// them through its language lookup (dotted identifiers into the locale files).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TextKey {
    RequestFailed,
    WifiConnectedSuccessfully,
    WifiConnectedFailed,
    ConfigSavedSuccessfully,
    Empty,
    Loading,
    Wifi,
    Device,
    SelectWifiPlaceholder,
    SelectWifiPasswordPlaceholder,
    Connect,
    Rescan,
    Save,
    InvalidCredentials,
    InvalidMaxTxPower,
    MaxTxPower,
    RememberBssid,
    SleepMode,
}

impl TextKey {
    pub const ALL: [TextKey; 18] = [
        TextKey::RequestFailed,
        TextKey::WifiConnectedSuccessfully,
        TextKey::WifiConnectedFailed,
        TextKey::ConfigSavedSuccessfully,
        TextKey::Empty,
        TextKey::Loading,
        TextKey::Wifi,
        TextKey::Device,
        TextKey::SelectWifiPlaceholder,
        TextKey::SelectWifiPasswordPlaceholder,
        TextKey::Connect,
        TextKey::Rescan,
        TextKey::Save,
        TextKey::InvalidCredentials,
        TextKey::InvalidMaxTxPower,
        TextKey::MaxTxPower,
        TextKey::RememberBssid,
        TextKey::SleepMode,
    ];

    /// Dotted lookup path of this key in the locale files.
    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::RequestFailed => "common.tips.request_failed",
            TextKey::WifiConnectedSuccessfully => "common.tips.wifi_connected_successfully",
            TextKey::WifiConnectedFailed => "common.tips.wifi_connected_failed",
            TextKey::ConfigSavedSuccessfully => "common.tips.config_saved_successfully",
            TextKey::Empty => "common.empty",
            TextKey::Loading => "common.loading",
            TextKey::Wifi => "form.wifi",
            TextKey::Device => "form.device",
            TextKey::SelectWifiPlaceholder => "form.select_wifi_placeholder",
            TextKey::SelectWifiPasswordPlaceholder => "form.select_wifi_password_placeholder",
            TextKey::Connect => "form.button.connect",
            TextKey::Rescan => "form.button.rescan",
            TextKey::Save => "form.button.save",
            TextKey::InvalidCredentials => "form.invalid_credentials",
            TextKey::InvalidMaxTxPower => "form.invalid_max_tx_power",
            TextKey::MaxTxPower => "form.max_tx_power",
            TextKey::RememberBssid => "form.remember_bssid",
            TextKey::SleepMode => "form.sleep_mode",
        }
    }
}

impl std::fmt::Display for TextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
