mod scan;
mod submit;

use crux_core::Command;

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

pub(crate) use scan::start_scan;

/// Handle WiFi events (scanning, network selection, credentials)
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Scan => start_scan(model),
        WifiEvent::ScanDelayElapsed { session } => scan::handle_delay_elapsed(session, model),
        WifiEvent::ScanResponse { session, result } => {
            scan::handle_scan_response(session, result, model)
        }

        WifiEvent::Choose(ap) => update_field!(
            model.form.ssid, ap.ssid;
            model.form.password, String::new();
            model.scan.drawer_open, false
        ),
        WifiEvent::SetPassword { password } => update_field!(model.form.password, password),

        WifiEvent::Submit => submit::handle_submit(model),
        WifiEvent::SubmitResponse { session, result } => {
            submit::handle_submit_response(session, result, model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessPoint, SetupOptions};

    #[test]
    fn choose_selects_network_and_resets_password() {
        let mut model = Model::default();
        model.mount(SetupOptions::default());
        model.form.ssid = "Guest".to_string();
        model.form.password = "old".to_string();
        model.scan.drawer_open = true;

        let mut cmd = handle(
            WifiEvent::Choose(AccessPoint {
                ssid: "Home".to_string(),
                authmode: 3,
                rssi: Some(-40),
            }),
            &mut model,
        );

        assert_eq!(model.form.ssid, "Home");
        assert_eq!(model.form.password, "");
        assert!(!model.scan.drawer_open);
        assert!(!cmd.effects().any(|effect| matches!(effect, Effect::Http(_))));
    }

    #[test]
    fn set_password_updates_form() {
        let mut model = Model::default();

        let _ = handle(
            WifiEvent::SetPassword {
                password: "secret".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.form.password, "secret");
    }
}
