use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Authentication mode the firmware reports for open networks
pub const AUTHMODE_OPEN: u8 = 0;

/// A network found by the device's scan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessPoint {
    pub ssid: String,
    pub authmode: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
}

impl AccessPoint {
    pub fn is_open(&self) -> bool {
        self.authmode == AUTHMODE_OPEN
    }
}

/// Response of `GET /scan`
///
/// `aps` stays `None` when the device omits it, which must not reset the
/// networks already listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResponse {
    #[serde(default)]
    pub support_5g: bool,
    #[serde(default)]
    pub aps: Option<Vec<AccessPoint>>,
}

/// Scan state of the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanState {
    pub busy: bool,
    pub items: Vec<AccessPoint>,
    pub drawer_open: bool,
    pub support_5g: bool,
}

/// Credentials form of the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsForm {
    pub ssid: String,
    pub password: String,
    pub submitting: bool,
}

impl CredentialsForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /submit`, limited to what the station config can hold
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(min_length = 1)]
    #[validate(max_length = 32)]
    pub ssid: String,
    #[validate(max_length = 64)]
    pub password: String,
}

/// Response of `POST /submit`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
