mod device;
mod ui;
mod wifi;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize(options) => {
            model.mount(options);
            log::info!("loading device configuration");
            Command::all([render(), device::load_config(model)])
        }

        Event::Unmount => {
            log::debug!("page unmounted, dropping pending responses");
            model.unmount();
            Command::done()
        }

        Event::Wifi(wifi_event) => wifi::handle(wifi_event, model),
        Event::Device(device_event) => device::handle(device_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}

/// Whether a response belongs to an earlier mount and must be ignored
fn is_stale(model: &Model, session: u32, what: &str) -> bool {
    let stale = !model.accepts(session);
    if stale {
        log::debug!("ignoring {what} of session {session}");
    }
    stale
}
