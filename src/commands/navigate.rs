//! Navigation command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! changing the current page location.

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform for navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigateOperation {
    To { path: String },
}

impl Operation for NavigateOperation {
    type Output = ();
}

/// Command-based navigation API
pub struct Navigate<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Navigate<Effect, Event>
where
    Effect: Send + From<crux_core::Request<NavigateOperation>> + 'static,
    Event: Send + 'static,
{
    /// Navigate the shell to the given path. Fire-and-forget: navigation
    /// leaves the page, so no output ever comes back.
    pub fn to(path: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(NavigateOperation::To { path: path.into() }).into()
    }
}
