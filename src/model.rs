use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Authentication state
    /// Access token from the last successful login or registration
    pub auth_token: Option<String>,

    // Form state
    pub login_phase: FormPhase,
    pub register_phase: FormPhase,
    /// Validation errors keyed by field name
    /// ("email", "password", "confirmPassword")
    pub field_errors: HashMap<String, String>,

    // UI state
    pub is_loading: bool,
    pub status_message: Option<StatusMessage>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears the status)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.status_message = None;
    }

    /// Stop loading without touching the status
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    /// Set an error status and stop loading
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.is_loading = false;
        self.status_message = Some(StatusMessage::error(error));
    }

    /// Set a success status and stop loading
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.status_message = Some(StatusMessage::success(message));
    }

    /// Set an error status and return a render command
    ///
    /// This is a convenience method that combines `set_error()` with
    /// `render()`, the most common failure pattern in the update handlers.
    pub fn set_error_and_render(
        &mut self,
        error: impl Into<String>,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear all field errors; safe to call repeatedly
    pub fn clear_field_errors(&mut self) {
        self.field_errors.clear();
    }
}
