//! Plain-text rendering of the view model

use wifi_setup_core::{
    DeviceConfig, LockIcon, NetworkView, Tab, TextKey, Toast, ToastLevel, ViewModel,
};

use crate::language::Language;

fn lock_glyph(lock: LockIcon) -> &'static str {
    match lock {
        LockIcon::Open => "🔓",
        LockIcon::Locked => "🔒",
    }
}

fn network_line(index: usize, network: &NetworkView) -> String {
    let marker = if network.selected { '>' } else { ' ' };
    let mut line = format!(
        "{marker} {:>2}. {} {}",
        index + 1,
        lock_glyph(network.lock),
        network.ssid
    );
    if let Some(rssi) = network.rssi {
        line.push_str(&format!(" ({rssi} dBm)"));
    }
    line
}

fn wifi_tab(view: &ViewModel, language: &impl Language) -> Vec<String> {
    let mut lines = vec![format!("[{}]", language.lang(TextKey::Wifi))];

    if view.networks.is_empty() {
        lines.push(format!(
            "  {}",
            language.lang(if view.scanning {
                TextKey::Loading
            } else {
                TextKey::Empty
            })
        ));
    } else {
        lines.extend(
            view.networks
                .iter()
                .enumerate()
                .map(|(index, network)| network_line(index, network)),
        );
    }

    lines.push(match &view.selected_ssid {
        Some(ssid) => format!("  -> {ssid}"),
        None => format!("  -> {}", language.lang(TextKey::SelectWifiPlaceholder)),
    });
    lines.push(format!(
        "  [1-{}] | r: {} | c: {} | s: {} | q",
        view.networks.len().max(1),
        language.lang(TextKey::Rescan),
        language.lang(TextKey::Connect),
        language.lang(TextKey::Device),
    ));
    lines
}

/// The settings of the Manage tab
pub fn settings(config: &DeviceConfig, language: &impl Language) -> Vec<String> {
    vec![
        format!("[{}]", language.lang(TextKey::Device)),
        format!(
            "  {}: {}",
            language.lang(TextKey::MaxTxPower),
            config.max_tx_power
        ),
        format!(
            "  {}: {}",
            language.lang(TextKey::RememberBssid),
            config.remember_bssid
        ),
        format!(
            "  {}: {}",
            language.lang(TextKey::SleepMode),
            config.sleep_mode
        ),
        format!("  -> {}", language.lang(TextKey::Save)),
    ]
}

/// The whole page for the active tab
pub fn page(view: &ViewModel, language: &impl Language) -> String {
    if view.loading {
        return language.lang(TextKey::Loading);
    }

    let lines = match view.active_tab {
        Tab::Wifi => wifi_tab(view, language),
        Tab::Manage => settings(&view.config, language),
    };
    lines.join("\n")
}

pub fn toast(toast: &Toast, language: &impl Language) -> String {
    let prefix = match toast.level {
        ToastLevel::Success => "[ok]",
        ToastLevel::Warning => "[!]",
        ToastLevel::Error => "[error]",
    };
    format!("{prefix} {}", language.lang(toast.key))
}
