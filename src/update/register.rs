use crux_core::{render::render, Command};

use crate::events::{Event, RegisterEvent};
use crate::model::Model;
use crate::types::{
    validate_registration, AuthResponse, FormPhase, RegisterRequest, TOKEN_STORAGE_KEY,
};
use crate::unauth_post;
use crate::{Effect, NavigateCmd, StorageCmd, TimerCmd};

/// Where a successful registration lands
const REDIRECT_PATH: &str = "/login-page";
/// Delay between the success status appearing and the redirect
const REDIRECT_DELAY_MS: u64 = 2000;

const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting...";

/// Handle registration form events
pub fn handle(event: RegisterEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        RegisterEvent::Submit {
            email,
            password,
            confirm_password,
        } => {
            // A request is already in flight or a redirect is pending
            if model.register_phase != FormPhase::Idle {
                return Command::done();
            }

            model.clear_field_errors();

            let errors = validate_registration(&email, &password, &confirm_password);
            if !errors.is_empty() {
                model.field_errors = errors;
                return render();
            }

            model.register_phase = FormPhase::Submitting;
            let request = RegisterRequest { email, password };
            unauth_post!(Register, RegisterEvent, model, "/register", SubmitResponse, "Registration",
                body_json: &request,
                expect_json: AuthResponse)
        }

        RegisterEvent::SubmitResponse(Ok(auth)) => {
            model.register_phase = FormPhase::Redirecting;
            model.auth_token = Some(auth.access_token.clone());
            model.set_success(SUCCESS_MESSAGE);
            Command::all([
                render(),
                StorageCmd::set(TOKEN_STORAGE_KEY, auth.access_token),
                TimerCmd::start(REDIRECT_DELAY_MS)
                    .build()
                    .then_send(|_| Event::Register(RegisterEvent::RedirectDelayElapsed)),
            ])
        }

        RegisterEvent::SubmitResponse(Err(message)) => {
            model.register_phase = FormPhase::Idle;
            model.set_error_and_render(message)
        }

        RegisterEvent::RedirectDelayElapsed => NavigateCmd::to(REDIRECT_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::navigate::NavigateOperation;
    use crate::types::MessageKind;

    fn submit(email: &str, password: &str, confirm_password: &str) -> RegisterEvent {
        RegisterEvent::Submit {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn short_password_sets_field_error_without_submitting() {
        let mut model = Model::default();

        let mut cmd = handle(submit("a@b.com", "short", "short"), &mut model);

        assert_eq!(
            model.field_errors.get("password").map(String::as_str),
            Some("Password must be at least 8 characters long")
        );
        assert_eq!(model.register_phase, FormPhase::Idle);
        assert!(cmd.effects().all(|effect| effect.is_render()));
    }

    #[test]
    fn mismatched_confirmation_sets_field_error_without_submitting() {
        let mut model = Model::default();

        let mut cmd = handle(submit("a@b.com", "password1", "password2"), &mut model);

        assert_eq!(
            model.field_errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
        assert!(cmd.effects().all(|effect| effect.is_render()));
    }

    #[test]
    fn valid_input_moves_form_to_submitting() {
        let mut model = Model::default();

        let _ = handle(submit("a@b.com", "password1", "password1"), &mut model);

        assert!(model.field_errors.is_empty());
        assert_eq!(model.register_phase, FormPhase::Submitting);
        assert!(model.is_loading);
    }

    #[test]
    fn submit_is_ignored_while_request_in_flight() {
        let mut model = Model {
            register_phase: FormPhase::Submitting,
            is_loading: true,
            ..Default::default()
        };

        let mut cmd = handle(submit("a@b.com", "password1", "password1"), &mut model);

        assert!(cmd.effects().next().is_none());
        assert_eq!(model.register_phase, FormPhase::Submitting);
    }

    #[test]
    fn failed_response_returns_form_to_idle_with_error_status() {
        let mut model = Model {
            register_phase: FormPhase::Submitting,
            is_loading: true,
            ..Default::default()
        };

        let _ = handle(
            RegisterEvent::SubmitResponse(Err("Email already registered".to_string())),
            &mut model,
        );

        assert_eq!(model.register_phase, FormPhase::Idle);
        let status = model.status_message.expect("an error status");
        assert_eq!(status.kind, MessageKind::Error);
        assert_eq!(status.text, "Email already registered");
    }

    #[test]
    fn redirect_delay_elapsed_navigates_to_login_page() {
        let mut model = Model {
            register_phase: FormPhase::Redirecting,
            ..Default::default()
        };

        let mut cmd = handle(RegisterEvent::RedirectDelayElapsed, &mut model);

        let operation = cmd
            .effects()
            .find_map(|effect| match effect {
                Effect::Navigate(request) => Some(request.operation.clone()),
                _ => None,
            })
            .expect("a navigate effect");
        assert_eq!(
            operation,
            NavigateOperation::To {
                path: "/login-page".to_string()
            }
        );
    }
}
