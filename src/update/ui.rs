use crux_core::Command;
use std::collections::HashMap;

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (clear messages, etc.)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ClearStatus => update_field!(model.status_message, None),
        UiEvent::ClearFieldErrors => update_field!(model.field_errors, HashMap::new()),
    }
}
