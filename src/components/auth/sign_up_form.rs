use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::PasswordWarning;
use crate::api::{ApiError, AuthApi, ServerApi};
use crate::components::common::{Input, Selector};
use crate::models::static_data::{self, DAY_PLACEHOLDER, MONTH_PLACEHOLDER, YEAR_PLACEHOLDER};
use crate::models::{AuthMode, PasswordChecks, SignUpDraft, User};
use crate::platform;
use crate::store::{use_store, Store};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The draft failed local validation; nothing was sent.
    Blocked,
    SignedUp(User),
    Failed(ApiError),
}

/// Sends a valid draft to the signup endpoint, once.
pub async fn submit_sign_up<A: AuthApi>(api: &A, draft: &SignUpDraft) -> SubmitOutcome {
    if !draft.is_valid() {
        return SubmitOutcome::Blocked;
    }
    let Some(body) = draft.to_body() else {
        return SubmitOutcome::Failed(ApiError::new("Invalid birth date"));
    };
    match api.sign_up(body).await {
        Ok(user) => SubmitOutcome::SignedUp(user),
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Starts one submit of the form: error display turns on right away, then
/// the returned future sends the draft and applies the outcome to `store`.
pub fn sign_up_submit<'a, A, F>(
    api: &'a A,
    store: Store,
    draft: SignUpDraft,
    on_signed_up: F,
) -> impl Future<Output = SubmitOutcome> + 'a
where
    A: AuthApi,
    F: FnOnce() + 'a,
{
    store.set_validate_mode(true);
    async move {
        let outcome = submit_sign_up(api, &draft).await;
        match &outcome {
            SubmitOutcome::Blocked => {}
            SubmitOutcome::SignedUp(user) => {
                store.set_user(Some(user.clone()));
                on_signed_up();
            }
            SubmitOutcome::Failed(e) => {
                log::error!("Sign up failed: {e}");
                platform::alert(&e.message);
            }
        }
        outcome
    }
}

/// Shows the password hints. Opens on the first focus of the password
/// field and has no way to close again.
#[derive(Clone, Copy)]
pub struct HintLatch(RwSignal<bool>);

impl HintLatch {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn open(&self) {
        if !self.0.get_untracked() {
            self.0.set(true);
        }
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}

impl Default for HintLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh per-mount state. Mounting the form turns error display off.
fn mount_form(store: Store) -> HintLatch {
    store.set_validate_mode(false);
    HintLatch::new()
}

#[component]
pub fn SignUpForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_store();

    let email = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let firstname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let birth_year = RwSignal::new(None::<String>);
    let birth_day = RwSignal::new(None::<String>);
    let birth_month = RwSignal::new(None::<String>);
    let password_hidden = RwSignal::new(true);
    let hints = mount_form(store);

    let checks = Memo::new(move |_| {
        PasswordChecks::new(&password.get(), &lastname.get(), &email.get())
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = SignUpDraft {
            email: email.get_untracked(),
            lastname: lastname.get_untracked(),
            firstname: firstname.get_untracked(),
            password: password.get_untracked(),
            birth_year: birth_year.get_untracked(),
            birth_day: birth_day.get_untracked(),
            birth_month: birth_month.get_untracked(),
        };
        let submit = sign_up_submit(&ServerApi, store, draft, move || on_close.run(()));
        spawn_local(async move {
            submit.await;
        });
    };

    let selected = |signal: RwSignal<Option<String>>| {
        Signal::derive(move || signal.get().unwrap_or_default())
    };
    let filled = |signal: RwSignal<Option<String>>| Signal::derive(move || signal.get().is_some());

    view! {
        <form class="sign-up-form" on:submit=on_submit>
            <Input
                name="email"
                input_type="email"
                placeholder="Email address"
                value=email
                on_input=move |v: String| email.set(v)
                is_valid=Signal::derive(move || !email.get().is_empty())
                error_message="Email is required."
            />
            <Input
                name="lastname"
                placeholder="Last name (e.g. Doe)"
                value=lastname
                on_input=move |v: String| lastname.set(v)
                is_valid=Signal::derive(move || !lastname.get().is_empty())
                error_message="Last name is required."
            />
            <Input
                name="firstname"
                placeholder="First name (e.g. Jane)"
                value=firstname
                on_input=move |v: String| firstname.set(v)
                is_valid=Signal::derive(move || !firstname.get().is_empty())
                error_message="First name is required."
            />
            <Input
                name="password"
                placeholder="Create a password"
                value=password
                on_input=move |v: String| password.set(v)
                masked=password_hidden
                on_focus=move |_: ()| hints.open()
                is_valid=Signal::derive(move || !password.get().is_empty())
                error_message="Password is required."
            >
                <button
                    type="button"
                    class="password-toggle"
                    on:click=move |_| password_hidden.update(|hidden| *hidden = !*hidden)
                >
                    {move || if password_hidden.get() { "Show" } else { "Hide" }}
                </button>
            </Input>

            <Show when=move || hints.is_open()>
                <PasswordWarning
                    is_valid=Signal::derive(move || !checks.get().has_name_or_email)
                    message="Password must not contain your name or email address."
                />
                <PasswordWarning
                    is_valid=Signal::derive(move || checks.get().meets_min_length)
                    message="At least 8 characters."
                />
                <PasswordWarning
                    is_valid=Signal::derive(move || checks.get().has_number_or_symbol)
                    message="Contains a number or a symbol."
                />
            </Show>

            <h4>"Birthday"</h4>
            <p class="sign-up-birthday-info">
                "You must be 18 or older to sign up. Other users will not see your birthday."
            </p>
            <div class="sign-up-birthday-selectors">
                <Selector
                    options=static_data::months()
                    placeholder=MONTH_PLACEHOLDER
                    value=selected(birth_month)
                    on_change=move |v: String| birth_month.set(Some(v))
                    is_valid=filled(birth_month)
                />
                <Selector
                    options=static_data::days()
                    placeholder=DAY_PLACEHOLDER
                    value=selected(birth_day)
                    on_change=move |v: String| birth_day.set(Some(v))
                    is_valid=filled(birth_day)
                />
                <Selector
                    options=static_data::years()
                    placeholder=YEAR_PLACEHOLDER
                    value=selected(birth_year)
                    on_change=move |v: String| birth_year.set(Some(v))
                    is_valid=filled(birth_year)
                />
            </div>

            <button type="submit" class="btn btn-primary">"Sign up"</button>

            <p class="auth-switch">
                "Already have an account? "
                <span
                    class="auth-switch-link"
                    role="presentation"
                    on:click=move |_| store.set_auth_mode(Some(AuthMode::LogIn))
                >
                    "Log in"
                </span>
            </p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::NaiveDate;

    use super::*;
    use crate::models::SignUpBody;

    struct FakeAuth {
        calls: RefCell<Vec<SignUpBody>>,
        result: Result<User, ApiError>,
    }

    impl FakeAuth {
        fn new(result: Result<User, ApiError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl AuthApi for FakeAuth {
        async fn sign_up(&self, body: SignUpBody) -> Result<User, ApiError> {
            self.calls.borrow_mut().push(body);
            self.result.clone()
        }

        async fn log_in(&self, _email: String, _password: String) -> Result<User, ApiError> {
            unreachable!("sign up never logs in")
        }
    }

    fn draft() -> SignUpDraft {
        SignUpDraft {
            email: "jane@example.com".into(),
            lastname: "Doe".into(),
            firstname: "Jane".into(),
            password: "correct-horse7".into(),
            birth_year: Some("1994".into()),
            birth_day: Some("7".into()),
            birth_month: Some("3 - March".into()),
        }
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "jane@example.com".into(),
            lastname: "Doe".into(),
            firstname: "Jane".into(),
            birthday: NaiveDate::from_ymd_opt(1994, 3, 7).unwrap(),
            profile_image: String::new(),
        }
    }

    #[tokio::test]
    async fn valid_draft_is_sent_once() {
        let api = FakeAuth::new(Ok(user()));
        let outcome = submit_sign_up(&api, &draft()).await;

        assert_eq!(outcome, SubmitOutcome::SignedUp(user()));
        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].birthday.to_string(), "1994-03-07");
        assert_eq!(calls[0].password, "correct-horse7");
    }

    #[tokio::test]
    async fn invalid_draft_sends_nothing() {
        let api = FakeAuth::new(Ok(user()));
        let draft = SignUpDraft {
            birth_day: None,
            ..draft()
        };
        assert_eq!(submit_sign_up(&api, &draft).await, SubmitOutcome::Blocked);
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn server_message_is_surfaced() {
        let api = FakeAuth::new(Err(ApiError::new("Email already registered")));
        let outcome = submit_sign_up(&api, &draft()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ApiError::new("Email already registered"))
        );
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn every_submit_turns_on_error_display() {
        let owner = Owner::new();
        let store = owner.with(Store::new);
        let api = FakeAuth::new(Ok(user()));
        let closed = Cell::new(false);

        store.set_validate_mode(true);
        owner.with(|| mount_form(store));
        assert!(!store.validate_mode.get_untracked());

        let blocked = SignUpDraft {
            password: String::new(),
            ..draft()
        };
        let submit = sign_up_submit(&api, store, blocked, || closed.set(true));
        assert!(store.validate_mode.get_untracked());
        assert_eq!(submit.await, SubmitOutcome::Blocked);
        assert!(api.calls.borrow().is_empty());
        assert!(store.user.get_untracked().is_none());
        assert!(!closed.get());
    }

    #[tokio::test]
    async fn signed_up_user_is_stored_and_modal_closes() {
        let owner = Owner::new();
        let store = owner.with(Store::new);
        let api = FakeAuth::new(Ok(user()));
        let closed = Cell::new(false);

        let outcome = sign_up_submit(&api, store, draft(), || closed.set(true)).await;

        assert_eq!(outcome, SubmitOutcome::SignedUp(user()));
        assert_eq!(store.user.get_untracked(), Some(user()));
        assert!(closed.get());
    }

    #[tokio::test]
    async fn failed_sign_up_keeps_modal_open() {
        let owner = Owner::new();
        let store = owner.with(Store::new);
        let api = FakeAuth::new(Err(ApiError::new("Email already registered")));
        let closed = Cell::new(false);

        let outcome = sign_up_submit(&api, store, draft(), || closed.set(true)).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(store.user.get_untracked().is_none());
        assert!(store.validate_mode.get_untracked());
        assert!(!closed.get());
    }

    #[test]
    fn hints_stay_open_after_first_focus() {
        Owner::new().with(|| {
            let hints = HintLatch::new();
            assert!(!hints.is_open());
            hints.open();
            assert!(hints.is_open());
            hints.open();
            assert!(hints.is_open());
        });
    }

    #[tokio::test]
    async fn impossible_birthday_fails_locally() {
        let api = FakeAuth::new(Ok(user()));
        let draft = SignUpDraft {
            birth_month: Some("2 - February".into()),
            birth_day: Some("30".into()),
            ..draft()
        };
        assert_eq!(
            submit_sign_up(&api, &draft).await,
            SubmitOutcome::Failed(ApiError::new("Invalid birth date"))
        );
        assert!(api.calls.borrow().is_empty());
    }
}
