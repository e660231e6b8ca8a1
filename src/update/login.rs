use crux_core::{render::render, Command};

use crate::events::{Event, LoginEvent};
use crate::model::Model;
use crate::types::{validate_login, AuthResponse, FormPhase, LoginRequest, TOKEN_STORAGE_KEY};
use crate::unauth_post;
use crate::{Effect, NavigateCmd, StorageCmd, TimerCmd};

/// Where a successful login lands
const REDIRECT_PATH: &str = "/";
/// Delay between the success status appearing and the redirect
const REDIRECT_DELAY_MS: u64 = 1500;

const SUCCESS_MESSAGE: &str = "Login successful!";

/// Handle login form events
pub fn handle(event: LoginEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        LoginEvent::Submit { email, password } => {
            // A request is already in flight or a redirect is pending
            if model.login_phase != FormPhase::Idle {
                return Command::done();
            }

            model.clear_field_errors();

            let errors = validate_login(&email, &password);
            if !errors.is_empty() {
                model.field_errors = errors;
                return render();
            }

            model.login_phase = FormPhase::Submitting;
            let request = LoginRequest { email, password };
            unauth_post!(Login, LoginEvent, model, "/login", SubmitResponse, "Login",
                body_json: &request,
                expect_json: AuthResponse)
        }

        LoginEvent::SubmitResponse(Ok(auth)) => {
            model.login_phase = FormPhase::Redirecting;
            model.auth_token = Some(auth.access_token.clone());
            model.set_success(SUCCESS_MESSAGE);
            Command::all([
                render(),
                StorageCmd::set(TOKEN_STORAGE_KEY, auth.access_token),
                TimerCmd::start(REDIRECT_DELAY_MS)
                    .build()
                    .then_send(|_| Event::Login(LoginEvent::RedirectDelayElapsed)),
            ])
        }

        LoginEvent::SubmitResponse(Err(message)) => {
            model.login_phase = FormPhase::Idle;
            model.set_error_and_render(message)
        }

        LoginEvent::RedirectDelayElapsed => NavigateCmd::to(REDIRECT_PATH),
    }
}
