use crux_core::{render::render, Command};
use serde_valid::Validate;

use super::{is_stale, wifi};
use crate::events::{DeviceEvent, Event};
use crate::model::Model;
use crate::types::{DeviceConfig, SaveConfigResponse, TextKey};
use crate::{device_get, device_post, Effect};

/// Request the radio settings of the device
pub fn load_config(model: &Model) -> Command<Effect, Event> {
    device_get!(
        Device,
        DeviceEvent,
        model,
        "/config",
        ConfigResponse,
        "Load config",
        expect_json: DeviceConfig
    )
}

/// Handle device configuration events (initial load, saving settings)
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::ConfigResponse { session, result } => {
            if is_stale(model, session, "config response") {
                return Command::done();
            }

            match result {
                Ok(config) => {
                    log::info!(
                        "device config: max_tx_power={} remember_bssid={} sleep_mode={}",
                        config.max_tx_power,
                        config.remember_bssid,
                        config.sleep_mode
                    );
                    model.config = config;
                    model.loading = false;
                    Command::all([render(), wifi::start_scan(model)])
                }
                Err(e) => {
                    // The page stays on its loading indicator, there is no retry
                    log::error!("{e}");
                    model.notify_error(TextKey::RequestFailed);
                    render()
                }
            }
        }

        DeviceEvent::SaveConfig(config) => {
            if model.settings.saving {
                return Command::done();
            }

            if let Err(e) = config.validate() {
                log::warn!("rejecting device config: {e}");
                model.notify_warning(TextKey::InvalidMaxTxPower);
                return render();
            }

            model.settings.saving = true;
            model.settings.pending = Some(config.clone());

            Command::all([
                render(),
                device_post!(
                    Device,
                    DeviceEvent,
                    model,
                    "/config/submit",
                    SaveConfigResponse,
                    "Save config",
                    body_json: &config,
                    expect_json: SaveConfigResponse
                ),
            ])
        }

        DeviceEvent::SaveConfigResponse { session, result } => {
            if is_stale(model, session, "save config response") {
                return Command::done();
            }

            model.settings.saving = false;
            let pending = model.settings.pending.take();

            match (result, pending) {
                (Ok(SaveConfigResponse { success: true }), Some(config)) => {
                    model.config = config;
                    model.notify_success(TextKey::ConfigSavedSuccessfully);
                }
                (Ok(_), _) => {
                    log::warn!("device did not accept the config");
                    model.notify_error(TextKey::RequestFailed);
                }
                (Err(e), _) => {
                    log::error!("{e}");
                    model.notify_error(TextKey::RequestFailed);
                }
            }
            render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SetupOptions, ToastLevel};

    fn mounted_model() -> Model {
        let mut model = Model::default();
        model.mount(SetupOptions::default());
        model
    }

    fn config(max_tx_power: i32) -> DeviceConfig {
        DeviceConfig {
            max_tx_power,
            remember_bssid: true,
            sleep_mode: false,
        }
    }

    mod load {
        use super::*;

        #[test]
        fn config_is_mirrored_and_scan_starts() {
            let mut model = mounted_model();
            let session = model.session;

            let mut cmd = handle(
                DeviceEvent::ConfigResponse {
                    session,
                    result: Ok(config(10)),
                },
                &mut model,
            );

            assert!(!model.loading);
            assert_eq!(model.config, config(10));
            assert!(model.scan.busy);

            let delays: Vec<u64> = cmd
                .effects()
                .filter_map(|effect| match effect {
                    Effect::Delay(request) => Some(request.operation.millis),
                    _ => None,
                })
                .collect();
            assert_eq!(delays, vec![2000]);
        }

        #[test]
        fn failed_load_keeps_loading_and_shows_error() {
            let mut model = mounted_model();
            let session = model.session;

            let _ = handle(
                DeviceEvent::ConfigResponse {
                    session,
                    result: Err("Load config failed: HTTP 500".to_string()),
                },
                &mut model,
            );

            assert!(model.loading);
            assert!(!model.scan.busy);
            let toast = model.toast.unwrap();
            assert_eq!(toast.level, ToastLevel::Error);
            assert_eq!(toast.key, TextKey::RequestFailed);
        }

        #[test]
        fn response_after_unmount_is_ignored() {
            let mut model = mounted_model();
            let session = model.session;
            model.unmount();
            let before = model.clone();

            let mut cmd = handle(
                DeviceEvent::ConfigResponse {
                    session,
                    result: Ok(config(10)),
                },
                &mut model,
            );

            assert_eq!(model, before);
            assert!(cmd.is_done());
        }
    }

    mod save {
        use super::*;

        #[test]
        fn save_issues_post_and_sets_busy_flag() {
            let mut model = mounted_model();

            let mut cmd = handle(DeviceEvent::SaveConfig(config(40)), &mut model);

            assert!(model.settings.saving);
            assert_eq!(model.settings.pending, Some(config(40)));
            let requests: Vec<_> = cmd
                .effects()
                .filter_map(|effect| match effect {
                    Effect::Http(request) => Some(request.operation),
                    _ => None,
                })
                .collect();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "POST");
            assert_eq!(requests[0].url, "https://relative/config/submit");
        }

        #[test]
        fn save_while_saving_is_ignored() {
            let mut model = mounted_model();
            model.settings.saving = true;
            let before = model.clone();

            let mut cmd = handle(DeviceEvent::SaveConfig(config(40)), &mut model);

            assert_eq!(model, before);
            assert_eq!(cmd.effects().count(), 0);
        }

        #[test]
        fn out_of_range_tx_power_is_rejected_without_request() {
            let mut model = mounted_model();

            let mut cmd = handle(DeviceEvent::SaveConfig(config(100)), &mut model);

            assert!(!model.settings.saving);
            assert!(!cmd.effects().any(|effect| matches!(effect, Effect::Http(_))));
            let toast = model.toast.unwrap();
            assert_eq!(toast.level, ToastLevel::Warning);
            assert_eq!(toast.key, TextKey::InvalidMaxTxPower);
        }

        #[test]
        fn accepted_save_updates_mirror() {
            let mut model = mounted_model();
            let session = model.session;
            let _ = handle(DeviceEvent::SaveConfig(config(40)), &mut model);

            let _ = handle(
                DeviceEvent::SaveConfigResponse {
                    session,
                    result: Ok(SaveConfigResponse { success: true }),
                },
                &mut model,
            );

            assert!(!model.settings.saving);
            assert_eq!(model.settings.pending, None);
            assert_eq!(model.config, config(40));
            assert_eq!(
                model.toast.unwrap().key,
                TextKey::ConfigSavedSuccessfully
            );
        }

        #[test]
        fn failed_save_keeps_previous_mirror() {
            let mut model = mounted_model();
            model.config = config(20);
            let session = model.session;
            let _ = handle(DeviceEvent::SaveConfig(config(40)), &mut model);

            let _ = handle(
                DeviceEvent::SaveConfigResponse {
                    session,
                    result: Err("Save config failed: HTTP 500".to_string()),
                },
                &mut model,
            );

            assert!(!model.settings.saving);
            assert_eq!(model.config, config(20));
            let toast = model.toast.unwrap();
            assert_eq!(toast.level, ToastLevel::Error);
            assert_eq!(toast.key, TextKey::RequestFailed);
        }
    }
}
