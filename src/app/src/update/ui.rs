use crux_core::Command;

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (tabs, network drawer, toasts)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::SelectTab(tab) => update_field!(model.active_tab, tab),
        UiEvent::SetDrawerOpen(open) => update_field!(model.scan.drawer_open, open),
        UiEvent::DismissToast => update_field!(model.toast, None),
    }
}
