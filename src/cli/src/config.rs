use anyhow::{Context, Result, ensure};
use std::{env, sync::OnceLock, time::Duration};
use wifi_setup_core::{DEFAULT_SCAN_DELAY_MS, SetupOptions};

use crate::language::Locale;

/// Address of the device while it serves its setup access point
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.100.1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Device connection configuration
    pub device: DeviceConnection,

    /// Page configuration handed to the core
    pub setup: SetupConfig,

    /// Credentials for non-interactive mode
    pub auto_connect: Option<AutoConnect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceConnection {
    pub url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    pub locale: Locale,
    pub scan_delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoConnect {
    pub ssid: String,
    pub password: String,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// On first call all configuration is read from environment variables,
    /// later calls return the cached instance.
    pub fn get() -> Result<&'static Self> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }

        let config = Self::load_from(|name| env::var(name).ok())
            .context("failed to load application configuration")?;

        Ok(APP_CONFIG.get_or_init(|| config))
    }

    /// Load the configuration through `lookup`, which resolves variable names
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let device = DeviceConnection::load(&lookup)?;
        let setup = SetupConfig::load(&lookup)?;
        let auto_connect = AutoConnect::load(&lookup);

        Ok(Self {
            device,
            setup,
            auto_connect,
        })
    }
}

impl DeviceConnection {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("WIFI_SETUP_DEVICE_URL")
            .unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "failed to parse WIFI_SETUP_DEVICE_URL: expected an http(s) URL, got {url}"
        );

        let timeout_secs = match lookup("WIFI_SETUP_REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .context("failed to parse WIFI_SETUP_REQUEST_TIMEOUT_SECS: invalid format")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        ensure!(
            timeout_secs > 0,
            "failed to parse WIFI_SETUP_REQUEST_TIMEOUT_SECS: must be positive"
        );

        Ok(Self {
            url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl SetupConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let locale = match lookup("WIFI_SETUP_LANGUAGE") {
            Some(value) => value
                .parse::<Locale>()
                .context("failed to parse WIFI_SETUP_LANGUAGE")?,
            None => Locale::default(),
        };

        let scan_delay_ms = match lookup("WIFI_SETUP_SCAN_DELAY_MS") {
            Some(value) => value
                .parse::<u64>()
                .context("failed to parse WIFI_SETUP_SCAN_DELAY_MS: invalid format")?,
            None => DEFAULT_SCAN_DELAY_MS,
        };

        Ok(Self {
            locale,
            scan_delay_ms,
        })
    }

    pub fn options(&self) -> SetupOptions {
        SetupOptions {
            scan_delay_ms: self.scan_delay_ms,
        }
    }
}

impl AutoConnect {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Option<Self> {
        let ssid = lookup("WIFI_SETUP_SSID").filter(|ssid| !ssid.is_empty())?;
        let password = lookup("WIFI_SETUP_PASSWORD").unwrap_or_default();

        Some(Self { ssid, password })
    }
}
