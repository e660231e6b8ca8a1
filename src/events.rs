use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Form domains
    Login(LoginEvent),
    Register(RegisterEvent),

    // UI actions
    Ui(UiEvent),
}

/// Login form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Submit {
        email: String,
        password: String,
    },

    // HTTP response (internal event, skipped from serialization)
    #[serde(skip)]
    SubmitResponse(Result<AuthResponse, String>),

    // Redirect delay elapsed (internal event)
    #[serde(skip)]
    RedirectDelayElapsed,
}

/// Registration form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    Submit {
        email: String,
        password: String,
        confirm_password: String,
    },

    // HTTP response (internal event, skipped from serialization)
    #[serde(skip)]
    SubmitResponse(Result<AuthResponse, String>),

    // Redirect delay elapsed (internal event)
    #[serde(skip)]
    RedirectDelayElapsed,
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearStatus,
    ClearFieldErrors,
}
