use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::types::{SubmitResponse, TextKey};
use crate::update::is_stale;
use crate::utils::{mask_key, MASK_LEN};
use crate::{device_post, Effect};

pub(super) fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    if model.form.ssid.is_empty() {
        model.notify_warning(TextKey::SelectWifiPlaceholder);
        return render();
    }

    if model.form.submitting {
        return Command::done();
    }

    let credentials = model.form.credentials();
    if let Err(e) = credentials.validate() {
        log::warn!("rejecting credentials for {}: {e}", credentials.ssid);
        model.notify_warning(TextKey::InvalidCredentials);
        return render();
    }

    log::info!(
        "connecting device to {} (password {})",
        credentials.ssid,
        mask_key(&credentials.password, MASK_LEN)
    );
    model.form.submitting = true;

    Command::all([
        render(),
        device_post!(
            Wifi,
            WifiEvent,
            model,
            "/submit",
            SubmitResponse,
            "Submit credentials",
            body_json: &credentials,
            expect_json: SubmitResponse
        ),
    ])
}

pub(super) fn handle_submit_response(
    session: u32,
    result: Result<SubmitResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if is_stale(model, session, "submit response") {
        return Command::done();
    }

    model.form.submitting = false;

    match result {
        Ok(SubmitResponse { success: true, .. }) => {
            model.notify_success(TextKey::WifiConnectedSuccessfully);
        }
        Ok(SubmitResponse { error, .. }) => {
            log::warn!(
                "device could not connect: {}",
                error.as_deref().unwrap_or("no reason given")
            );
            model.notify_warning(TextKey::WifiConnectedFailed);
        }
        Err(e) => {
            log::error!("{e}");
            model.notify_warning(TextKey::WifiConnectedFailed);
        }
    }
    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SetupOptions, ToastLevel};

    fn model_with_selection(ssid: &str, password: &str) -> Model {
        let mut model = Model::default();
        model.mount(SetupOptions::default());
        model.loading = false;
        model.form.ssid = ssid.to_string();
        model.form.password = password.to_string();
        model
    }

    fn http_requests(cmd: &mut Command<Effect, Event>) -> Vec<crux_http::protocol::HttpRequest> {
        cmd.effects()
            .filter_map(|effect| match effect {
                Effect::Http(request) => Some(request.operation),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_ssid_warns_without_request() {
        let mut model = model_with_selection("", "secret");

        let mut cmd = handle_submit(&mut model);

        assert!(http_requests(&mut cmd).is_empty());
        assert!(!model.form.submitting);
        let toast = model.toast.unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.key, TextKey::SelectWifiPlaceholder);
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut model = model_with_selection("Home", "secret");
        model.form.submitting = true;
        let before = model.clone();

        let mut cmd = handle_submit(&mut model);

        assert_eq!(model, before);
        assert!(cmd.is_done());
    }

    #[test]
    fn overlong_password_is_rejected() {
        let mut model = model_with_selection("Home", &"x".repeat(65));

        let mut cmd = handle_submit(&mut model);

        assert!(http_requests(&mut cmd).is_empty());
        assert_eq!(model.toast.unwrap().key, TextKey::InvalidCredentials);
    }

    #[test]
    fn submit_posts_credentials() {
        let mut model = model_with_selection("Home", "secret");

        let mut cmd = handle_submit(&mut model);

        assert!(model.form.submitting);
        let requests = http_requests(&mut cmd);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://relative/submit");
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body, serde_json::json!({"ssid": "Home", "password": "secret"}));
    }

    #[test]
    fn accepted_credentials_show_success() {
        let mut model = model_with_selection("Home", "secret");
        model.form.submitting = true;
        let session = model.session;

        let _ = handle_submit_response(
            session,
            Ok(SubmitResponse {
                success: true,
                error: None,
            }),
            &mut model,
        );

        assert!(!model.form.submitting);
        let toast = model.toast.unwrap();
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.key, TextKey::WifiConnectedSuccessfully);
    }

    #[test]
    fn rejected_credentials_show_warning() {
        let mut model = model_with_selection("Home", "wrong");
        model.form.submitting = true;
        let session = model.session;

        let _ = handle_submit_response(
            session,
            Ok(SubmitResponse {
                success: false,
                error: Some("Failed to connect to the Access Point".to_string()),
            }),
            &mut model,
        );

        assert!(!model.form.submitting);
        let toast = model.toast.unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.key, TextKey::WifiConnectedFailed);
    }

    #[test]
    fn transport_failure_clears_submitting() {
        let mut model = model_with_selection("Home", "secret");
        model.form.submitting = true;
        let session = model.session;

        let _ = handle_submit_response(
            session,
            Err("Submit credentials failed: timeout".to_string()),
            &mut model,
        );

        assert!(!model.form.submitting);
        assert_eq!(model.toast.unwrap().key, TextKey::WifiConnectedFailed);
    }
}
