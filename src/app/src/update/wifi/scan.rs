use crux_core::{render::render, Command};

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::types::{ScanResponse, TextKey};
use crate::update::is_stale;
use crate::{device_get, DelayCmd, Effect};

/// Start a scan unless one is already running.
///
/// The device needs a moment after the page comes up, so the request goes out
/// once the configured delay has elapsed.
pub(crate) fn start_scan(model: &mut Model) -> Command<Effect, Event> {
    if model.scan.busy {
        return Command::done();
    }

    model.form.ssid.clear();
    model.form.password.clear();
    model.scan.busy = true;

    let delay_ms = model.options.scan_delay_ms;
    let next = if delay_ms == 0 {
        request_scan(model)
    } else {
        let session = model.session;
        DelayCmd::millis(delay_ms)
            .build()
            .then_send(move |_| Event::Wifi(WifiEvent::ScanDelayElapsed { session }))
    };

    Command::all([render(), next])
}

pub(super) fn handle_delay_elapsed(session: u32, model: &mut Model) -> Command<Effect, Event> {
    if is_stale(model, session, "scan delay") {
        return Command::done();
    }
    request_scan(model)
}

pub(super) fn handle_scan_response(
    session: u32,
    result: Result<ScanResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if is_stale(model, session, "scan response") {
        return Command::done();
    }

    model.scan.busy = false;

    match result {
        Ok(response) => {
            model.scan.support_5g = response.support_5g;
            match response.aps {
                Some(aps) => {
                    log::info!("scan found {} networks", aps.len());
                    model.scan.items = aps;
                }
                None => log::debug!("scan response without access points"),
            }
        }
        Err(e) => {
            log::error!("{e}");
            model.notify_error(TextKey::RequestFailed);
        }
    }
    render()
}

fn request_scan(model: &Model) -> Command<Effect, Event> {
    device_get!(
        Wifi,
        WifiEvent,
        model,
        "/scan",
        ScanResponse,
        "Scan",
        expect_json: ScanResponse
    )
}
