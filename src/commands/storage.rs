//! Key-value storage command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! client-side key-value store (backed by `localStorage` in the browser
//! shell).

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform against the key-value store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Set { key: String, value: String },
}

impl Operation for StorageOperation {
    type Output = ();
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Persist a value under the given key, overwriting any previous value.
    /// Fire-and-forget: the Core does not wait for the write to complete.
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(StorageOperation::Set {
            key: key.into(),
            value: value.into(),
        })
        .into()
    }
}
