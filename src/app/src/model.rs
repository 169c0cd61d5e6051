use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state of the setup page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// True until the device configuration has been loaded once
    pub loading: bool,
    pub active_tab: Tab,

    // Device state
    pub config: DeviceConfig,
    pub settings: SettingsState,

    // WiFi state
    pub scan: ScanState,
    pub form: CredentialsForm,

    // Notification state
    pub toast: Option<Toast>,
    pub toast_seq: u32,

    // Mount state
    pub options: SetupOptions,
    /// Identifies the current mount; responses issued under another one are dropped
    pub session: u32,
    pub mounted: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            loading: true,
            active_tab: Tab::default(),
            config: DeviceConfig::default(),
            settings: SettingsState::default(),
            scan: ScanState::default(),
            form: CredentialsForm::default(),
            toast: None,
            toast_seq: 0,
            options: SetupOptions::default(),
            session: 0,
            mounted: false,
        }
    }
}

impl Model {
    /// Fresh state for a new mount of the page
    pub fn mount(&mut self, options: SetupOptions) {
        let session = self.session.wrapping_add(1);
        let toast_seq = self.toast_seq;
        *self = Self {
            options,
            session,
            toast_seq,
            mounted: true,
            ..Self::default()
        };
    }

    /// Mark the page as gone; pending responses no longer apply
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.session = self.session.wrapping_add(1);
    }

    /// Whether a response issued under `session` may still touch the state
    pub fn accepts(&self, session: u32) -> bool {
        self.mounted && self.session == session
    }

    /// Show a new toast
    pub fn notify(&mut self, level: ToastLevel, key: TextKey) {
        self.toast_seq = self.toast_seq.wrapping_add(1);
        self.toast = Some(Toast {
            id: self.toast_seq,
            level,
            key,
        });
    }

    pub fn notify_success(&mut self, key: TextKey) {
        self.notify(ToastLevel::Success, key);
    }

    pub fn notify_warning(&mut self, key: TextKey) {
        self.notify(ToastLevel::Warning, key);
    }

    pub fn notify_error(&mut self, key: TextKey) {
        self.notify(ToastLevel::Error, key);
    }

    /// Build the view model handed to shells
    pub fn view(&self) -> ViewModel {
        ViewModel {
            loading: self.loading,
            active_tab: self.active_tab,
            config: self.config.clone(),
            scanning: self.scan.busy,
            support_5g: self.scan.support_5g,
            networks: self
                .scan
                .items
                .iter()
                .map(|ap| NetworkView::from_access_point(ap, &self.form.ssid))
                .collect(),
            drawer_open: self.scan.drawer_open,
            selected_ssid: (!self.form.ssid.is_empty()).then(|| self.form.ssid.clone()),
            has_password: !self.form.password.is_empty(),
            submitting: self.form.submitting,
            saving_config: self.settings.saving,
            toast: self.toast.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_loading_and_unmounted() {
        let model = Model::default();

        assert!(model.loading);
        assert!(!model.mounted);
        assert_eq!(model.active_tab, Tab::Wifi);
        assert_eq!(model.options.scan_delay_ms, DEFAULT_SCAN_DELAY_MS);
    }

    #[test]
    fn mount_resets_state_and_advances_session() {
        let mut model = Model {
            loading: false,
            form: CredentialsForm {
                ssid: "Home".to_string(),
                password: "secret".to_string(),
                submitting: true,
            },
            session: 4,
            ..Default::default()
        };

        model.mount(SetupOptions { scan_delay_ms: 0 });

        assert!(model.loading);
        assert!(model.mounted);
        assert_eq!(model.session, 5);
        assert_eq!(model.form, CredentialsForm::default());
        assert_eq!(model.options.scan_delay_ms, 0);
    }

    #[test]
    fn unmount_rejects_pending_responses() {
        let mut model = Model::default();
        model.mount(SetupOptions::default());
        let session = model.session;
        assert!(model.accepts(session));

        model.unmount();

        assert!(!model.accepts(session));
        assert!(!model.accepts(model.session));
    }

    #[test]
    fn toast_ids_keep_growing_across_mounts() {
        let mut model = Model::default();
        model.notify_error(TextKey::RequestFailed);
        let first = model.toast.clone().unwrap();

        model.mount(SetupOptions::default());
        model.notify_error(TextKey::RequestFailed);
        let second = model.toast.clone().unwrap();

        assert_eq!(first.key, second.key);
        assert!(second.id > first.id);
    }

    #[test]
    fn view_marks_open_and_locked_networks() {
        let model = Model {
            scan: ScanState {
                items: vec![
                    AccessPoint {
                        ssid: "Home".to_string(),
                        authmode: 3,
                        rssi: Some(-48),
                    },
                    AccessPoint {
                        ssid: "Guest".to_string(),
                        authmode: 0,
                        rssi: None,
                    },
                ],
                ..Default::default()
            },
            form: CredentialsForm {
                ssid: "Home".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let view = model.view();

        assert_eq!(view.networks.len(), 2);
        assert_eq!(view.networks[0].lock, LockIcon::Locked);
        assert!(view.networks[0].selected);
        assert_eq!(view.networks[1].lock, LockIcon::Open);
        assert!(!view.networks[1].selected);
        assert_eq!(view.selected_ssid.as_deref(), Some("Home"));
        assert!(!view.has_password);
    }
}
