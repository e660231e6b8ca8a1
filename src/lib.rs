pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        navigate::NavigateOperation,
        storage::StorageOperation,
        timer::{TimerOperation, TimerOutput},
    },
    events::Event,
    http_helpers::{
        build_url, extract_error_detail, is_response_success, parse_json_response,
        process_auth_response, BASE_URL, GENERIC_REQUEST_ERROR,
    },
    model::Model,
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Storage(StorageOperation),
    Timer(TimerOperation),
    Navigate(NavigateOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type NavigateCmd = crate::commands::navigate::Navigate<Effect, Event>;
pub type StorageCmd = crate::commands::storage::Storage<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
