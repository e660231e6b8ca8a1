mod login;
mod register;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization
        Event::Initialize => render(),

        // Form domains
        Event::Login(event) => login::handle(event, model),
        Event::Register(event) => register::handle(event, model),

        // UI actions domain
        Event::Ui(event) => ui::handle(event, model),
    }
}
