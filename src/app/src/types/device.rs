use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Lowest transmit power the radio accepts, in 0.25 dBm units.
pub const MIN_TX_POWER: i32 = 8;
/// Highest transmit power the radio accepts, in 0.25 dBm units.
pub const MAX_TX_POWER: i32 = 84;

/// Radio settings as reported by `GET /config` and written by `POST /config/submit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct DeviceConfig {
    #[validate(minimum = 8)]
    #[validate(maximum = 84)]
    pub max_tx_power: i32,
    pub remember_bssid: bool,
    pub sleep_mode: bool,
}

impl Default for DeviceConfig {
    // Firmware defaults used when nothing is stored on the device yet
    fn default() -> Self {
        Self {
            max_tx_power: 0,
            remember_bssid: false,
            sleep_mode: true,
        }
    }
}

/// Response of `POST /config/submit`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveConfigResponse {
    #[serde(default)]
    pub success: bool,
}

/// In-flight state of a settings save
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsState {
    pub saving: bool,
    pub pending: Option<DeviceConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_device_payload() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"max_tx_power":78,"remember_bssid":true,"sleep_mode":false}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            DeviceConfig {
                max_tx_power: 78,
                remember_bssid: true,
                sleep_mode: false,
            }
        );
    }

    #[test]
    fn tx_power_outside_radio_range_is_rejected() {
        let mut config = DeviceConfig {
            max_tx_power: MIN_TX_POWER,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.max_tx_power = MAX_TX_POWER;
        assert!(config.validate().is_ok());

        config.max_tx_power = MIN_TX_POWER - 1;
        assert!(config.validate().is_err());

        config.max_tx_power = MAX_TX_POWER + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_success_flag_means_failure() {
        let response: SaveConfigResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
    }
}
