use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use leptos::reactive::owner::Owner;

use super::*;

// =============================================================
// Recording doubles
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Success(String),
    Error(String),
    Refresh,
    Navigate(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Clone)]
struct FakeApi {
    response: Result<(), LoginError>,
    calls: Rc<RefCell<Vec<Credentials>>>,
    phase: Rc<Cell<LoginPhase>>,
    phase_during_call: Rc<Cell<Option<LoginPhase>>>,
}

impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.phase_during_call.set(Some(self.phase.get()));
        self.response.clone()
    }
}

#[derive(Clone)]
struct FakeSession {
    loading: bool,
    user: bool,
    log: Log,
}

impl SessionHandle for FakeSession {
    fn is_loading(&self) -> bool {
        self.loading
    }

    fn has_user(&self) -> bool {
        self.user
    }

    fn refresh_auth(&self) {
        self.log.borrow_mut().push(Event::Refresh);
    }
}

#[derive(Clone)]
struct FakeNavigator(Log);

impl Navigator for FakeNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(Event::Navigate(path.to_owned()));
    }
}

#[derive(Clone)]
struct FakeNotifier(Log);

impl Notifier for FakeNotifier {
    fn success(&self, message: &str) {
        self.0.borrow_mut().push(Event::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.0.borrow_mut().push(Event::Error(message.to_owned()));
    }
}

impl PhaseHandle for Rc<Cell<LoginPhase>> {
    fn phase(&self) -> LoginPhase {
        self.get()
    }

    fn set_phase(&self, phase: LoginPhase) {
        self.set(phase);
    }
}

type TestFlow = LoginFlow<FakeApi, FakeSession, FakeNavigator, FakeNotifier, Rc<Cell<LoginPhase>>>;

struct Harness {
    flow: TestFlow,
    log: Log,
    calls: Rc<RefCell<Vec<Credentials>>>,
    phase: Rc<Cell<LoginPhase>>,
    phase_during_call: Rc<Cell<Option<LoginPhase>>>,
}

fn harness(response: Result<(), LoginError>) -> Harness {
    let log: Log = Rc::default();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let phase = Rc::new(Cell::new(LoginPhase::Idle));
    let phase_during_call = Rc::new(Cell::new(None));
    let api = FakeApi {
        response,
        calls: calls.clone(),
        phase: phase.clone(),
        phase_during_call: phase_during_call.clone(),
    };
    let session = FakeSession { loading: false, user: false, log: log.clone() };
    let flow = LoginFlow::new(
        api,
        session,
        FakeNavigator(log.clone()),
        FakeNotifier(log.clone()),
        phase.clone(),
    );
    Harness { flow, log, calls, phase, phase_during_call }
}

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}

// =============================================================
// submit: success
// =============================================================

#[test]
fn submit_success_notifies_refreshes_then_navigates_home() {
    let h = harness(Ok(()));
    let outcome = block_on(h.flow.submit(creds("rider@example.com", "pw")));

    assert_eq!(outcome, LoginOutcome::Succeeded);
    assert_eq!(
        events(&h.log),
        vec![
            Event::Success("Logged in".to_owned()),
            Event::Refresh,
            Event::Navigate("/".to_owned()),
        ]
    );
}

#[test]
fn submit_sends_both_credential_fields_once() {
    let h = harness(Ok(()));
    block_on(h.flow.submit(creds("rider@example.com", "s3cret")));

    let calls = h.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], creds("rider@example.com", "s3cret"));
}

#[test]
fn submit_does_not_validate_credentials() {
    let h = harness(Ok(()));
    block_on(h.flow.submit(creds("", "")));
    assert_eq!(h.calls.borrow().len(), 1);
}

// =============================================================
// submit: failure
// =============================================================

#[test]
fn submit_failure_shows_server_message_without_navigation() {
    let h = harness(Err(LoginError::rejected(401, r#"{ "error": "Invalid credentials" }"#)));
    let outcome = block_on(h.flow.submit(creds("rider@example.com", "wrong")));

    assert!(matches!(outcome, LoginOutcome::Failed(LoginError::Rejected { status: 401, .. })));
    assert_eq!(events(&h.log), vec![Event::Error("Invalid credentials".to_owned())]);
}

#[test]
fn submit_failure_without_error_field_uses_fallback() {
    let h = harness(Err(LoginError::rejected(500, r#"{ "detail": "boom" }"#)));
    block_on(h.flow.submit(creds("rider@example.com", "pw")));
    assert_eq!(events(&h.log), vec![Event::Error("Failed to Login".to_owned())]);
}

#[test]
fn submit_transport_failure_uses_fallback() {
    let h = harness(Err(LoginError::Transport("network down".to_owned())));
    block_on(h.flow.submit(creds("rider@example.com", "pw")));
    assert_eq!(events(&h.log), vec![Event::Error("Failed to Login".to_owned())]);
}

// =============================================================
// submit: phase
// =============================================================

#[test]
fn phase_is_submitting_during_request() {
    let h = harness(Ok(()));
    block_on(h.flow.submit(creds("a@b.com", "pw")));
    assert_eq!(h.phase_during_call.get(), Some(LoginPhase::Submitting));
}

#[test]
fn phase_returns_to_idle_after_success() {
    let h = harness(Ok(()));
    block_on(h.flow.submit(creds("a@b.com", "pw")));
    assert_eq!(h.flow.phase(), LoginPhase::Idle);
}

#[test]
fn phase_returns_to_idle_after_failure() {
    let h = harness(Err(LoginError::rejected(401, "{}")));
    block_on(h.flow.submit(creds("a@b.com", "pw")));
    assert_eq!(h.phase.get(), LoginPhase::Idle);
}

#[test]
fn submit_while_submitting_is_ignored() {
    let h = harness(Ok(()));
    h.phase.set(LoginPhase::Submitting);

    let outcome = block_on(h.flow.submit(creds("a@b.com", "pw")));

    assert_eq!(outcome, LoginOutcome::Ignored);
    assert!(h.calls.borrow().is_empty());
    assert!(events(&h.log).is_empty());
    assert_eq!(h.phase.get(), LoginPhase::Submitting);
}

#[test]
fn failed_submit_can_be_retried() {
    let h = harness(Err(LoginError::rejected(401, "{}")));
    block_on(h.flow.submit(creds("a@b.com", "pw")));
    block_on(h.flow.submit(creds("a@b.com", "pw")));
    assert_eq!(h.calls.borrow().len(), 2);
}

// =============================================================
// Secondary navigation
// =============================================================

#[test]
fn signup_navigates_when_idle() {
    let h = harness(Ok(()));
    assert!(h.flow.navigate_to_signup());
    assert_eq!(events(&h.log), vec![Event::Navigate("/signup".to_owned())]);
}

#[test]
fn signup_blocked_while_submitting_but_forgot_password_allowed() {
    let h = harness(Ok(()));
    h.phase.set(LoginPhase::Submitting);

    assert!(!h.flow.navigate_to_signup());
    h.flow.navigate_to_forgot_password();

    assert_eq!(events(&h.log), vec![Event::Navigate("/reset-password".to_owned())]);
}

// =============================================================
// guard_entry
// =============================================================

fn session(loading: bool, user: bool, log: &Log) -> FakeSession {
    FakeSession { loading, user, log: log.clone() }
}

#[test]
fn guard_entry_while_loading_does_nothing() {
    let log: Log = Rc::default();
    let entry = guard_entry(&session(true, false, &log), &FakeNavigator(log.clone()));
    assert_eq!(entry, LoginEntry::Loading);
    assert!(events(&log).is_empty());
}

#[test]
fn guard_entry_with_user_redirects_home_instead_of_form() {
    let log: Log = Rc::default();
    let entry = guard_entry(&session(false, true, &log), &FakeNavigator(log.clone()));
    assert_eq!(entry, LoginEntry::Redirect);
    assert_eq!(events(&log), vec![Event::Navigate("/".to_owned())]);
}

#[test]
fn guard_entry_signed_out_shows_form() {
    let log: Log = Rc::default();
    let entry = guard_entry(&session(false, false, &log), &FakeNavigator(log.clone()));
    assert_eq!(entry, LoginEntry::Form);
    assert!(events(&log).is_empty());
}

// =============================================================
// Leptos signal adapters
// =============================================================

fn signal_flow(
    response: Result<(), LoginError>,
    log: &Log,
) -> (
    LoginFlow<FakeApi, RwSignal<AuthState>, FakeNavigator, RwSignal<ToastState>, RwSignal<LoginForm>>,
    RwSignal<AuthState>,
    RwSignal<ToastState>,
    RwSignal<LoginForm>,
) {
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let form = RwSignal::new(LoginForm::default());
    let api = FakeApi {
        response,
        calls: Rc::default(),
        phase: Rc::new(Cell::new(LoginPhase::Idle)),
        phase_during_call: Rc::new(Cell::new(None)),
    };
    let flow = LoginFlow::new(api, auth, FakeNavigator(log.clone()), toasts, form);
    (flow, auth, toasts, form)
}

#[test]
fn signal_adapters_apply_successful_login() {
    let owner = Owner::new();
    owner.set();
    let log: Log = Rc::default();
    let (flow, auth, toasts, form) = signal_flow(Ok(()), &log);

    let outcome = block_on(flow.submit(creds("rider@example.com", "pw")));

    assert_eq!(outcome, LoginOutcome::Succeeded);
    let items = toasts.with_untracked(|s| s.items.clone());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, ToastKind::Success);
    assert_eq!(items[0].message, "Logged in");
    assert!(auth.with_untracked(|s| s.loading));
    assert_eq!(form.with_untracked(|f| f.phase), LoginPhase::Idle);
    assert_eq!(events(&log), vec![Event::Navigate("/".to_owned())]);
}

#[test]
fn signal_adapters_report_failure_as_error_toast() {
    let owner = Owner::new();
    owner.set();
    let log: Log = Rc::default();
    let (flow, auth, toasts, form) =
        signal_flow(Err(LoginError::rejected(401, r#"{ "error": "Invalid credentials" }"#)), &log);

    block_on(flow.submit(creds("rider@example.com", "wrong")));

    let items = toasts.with_untracked(|s| s.items.clone());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, ToastKind::Error);
    assert_eq!(items[0].message, "Invalid credentials");
    assert!(!auth.with_untracked(|s| s.loading));
    assert_eq!(form.with_untracked(|f| f.phase), LoginPhase::Idle);
    assert!(events(&log).is_empty());
}

#[test]
fn signal_phase_handle_tolerates_disposed_form() {
    let owner = Owner::new();
    owner.set();
    let log: Log = Rc::default();
    let (flow, _auth, toasts, form) = signal_flow(Ok(()), &log);

    form.dispose();
    assert_eq!(form.phase(), LoginPhase::Idle);
    form.set_phase(LoginPhase::Submitting);

    let outcome = block_on(flow.submit(creds("rider@example.com", "pw")));

    assert_eq!(outcome, LoginOutcome::Succeeded);
    assert_eq!(toasts.with_untracked(|s| s.items.len()), 1);
}
