//! Login submission flow and its collaborators.
//!
//! ARCHITECTURE
//! ============
//! `LoginFlow` drives one login attempt against four injected collaborators:
//! the auth API, the shared session, the router, and the toast host. A fifth
//! handle holds the form's submission phase. The page wires the Leptos
//! adapters at the bottom of this module; tests substitute recording doubles.
//!
//! ORDERING
//! ========
//! On success the toast is issued before navigation. The session refresh is
//! fire-and-forget, so navigation does not wait for it. The phase returns to
//! `Idle` once, after whichever branch ran.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toaster::show_toast;
use crate::net::types::LoginError;
use crate::state::auth::AuthState;
use crate::state::login::{Credentials, LoginEntry, LoginForm, LoginPhase};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::routes::{HOME_ROUTE, RESET_PASSWORD_ROUTE, SIGNUP_ROUTE};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in";

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Remote credential check.
pub trait AuthApi {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), LoginError>>;
}

/// Shared session context owned outside the login page.
pub trait SessionHandle {
    fn is_loading(&self) -> bool;
    fn has_user(&self) -> bool;
    /// Start an asynchronous re-fetch of the session. Does not block.
    fn refresh_auth(&self);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Non-blocking user notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Where the form's submission phase lives.
pub trait PhaseHandle {
    fn phase(&self) -> LoginPhase;
    fn set_phase(&self, phase: LoginPhase);
}

// =============================================================================
// FLOW
// =============================================================================

/// Result of a call to [`LoginFlow::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded,
    Failed(LoginError),
    /// A submission was already in flight; nothing happened.
    Ignored,
}

/// Decide what the login route shows and redirect signed-in users home.
///
/// Evaluated before the form is mounted so a signed-in visitor never sees
/// interactive controls.
pub fn guard_entry<S: SessionHandle, N: Navigator>(session: &S, navigator: &N) -> LoginEntry {
    let entry = LoginEntry::from_flags(session.is_loading(), session.has_user());
    if entry == LoginEntry::Redirect {
        navigator.navigate(HOME_ROUTE);
    }
    entry
}

#[derive(Clone)]
pub struct LoginFlow<A, S, N, T, P> {
    api: A,
    session: S,
    navigator: N,
    notifier: T,
    phase: P,
}

impl<A, S, N, T, P> LoginFlow<A, S, N, T, P>
where
    A: AuthApi,
    S: SessionHandle,
    N: Navigator,
    T: Notifier,
    P: PhaseHandle,
{
    pub fn new(api: A, session: S, navigator: N, notifier: T, phase: P) -> Self {
        Self { api, session, navigator, notifier, phase }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase.phase()
    }

    /// Send `credentials` to the auth API and act on the answer.
    ///
    /// Credentials are not validated here. A second call while one is in
    /// flight returns [`LoginOutcome::Ignored`] without side effects.
    pub async fn submit(&self, credentials: Credentials) -> LoginOutcome {
        if self.phase.phase() == LoginPhase::Submitting {
            return LoginOutcome::Ignored;
        }
        self.phase.set_phase(LoginPhase::Submitting);

        let outcome = match self.api.login(&credentials).await {
            Ok(()) => {
                self.notifier.success(LOGIN_SUCCESS_MESSAGE);
                self.session.refresh_auth();
                self.navigator.navigate(HOME_ROUTE);
                LoginOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::error!("login failed: {err}");
                self.notifier.error(err.user_message());
                LoginOutcome::Failed(err)
            }
        };

        self.phase.set_phase(LoginPhase::Idle);
        outcome
    }

    /// Go to the signup route. Blocked while a submission is in flight;
    /// returns whether navigation happened.
    pub fn navigate_to_signup(&self) -> bool {
        if self.phase.phase() == LoginPhase::Submitting {
            return false;
        }
        self.navigator.navigate(SIGNUP_ROUTE);
        true
    }

    /// Go to the password reset route. Allowed during submission.
    pub fn navigate_to_forgot_password(&self) {
        self.navigator.navigate(RESET_PASSWORD_ROUTE);
    }
}

// =============================================================================
// LEPTOS ADAPTERS
// =============================================================================

/// [`AuthApi`] backed by `net::api::login`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        crate::net::api::login(credentials).await
    }
}

/// [`Navigator`] wrapping the closure returned by `use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

impl SessionHandle for RwSignal<AuthState> {
    fn is_loading(&self) -> bool {
        self.with(|s| s.loading)
    }

    fn has_user(&self) -> bool {
        self.with(AuthState::is_signed_in)
    }

    fn refresh_auth(&self) {
        crate::net::session::spawn_refresh(*self);
    }
}

impl Notifier for RwSignal<ToastState> {
    fn success(&self, message: &str) {
        show_toast(*self, ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        show_toast(*self, ToastKind::Error, message);
    }
}

// The form signal may already be disposed when a request settles after the
// page was left, so writes go through `try_update`.
impl PhaseHandle for RwSignal<LoginForm> {
    fn phase(&self) -> LoginPhase {
        self.try_with_untracked(|f| f.phase).unwrap_or_default()
    }

    fn set_phase(&self, phase: LoginPhase) {
        self.try_update(|f| f.phase = phase);
    }
}
