use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AuthApi, ServerApi};
use crate::components::common::Input;
use crate::models::AuthMode;
use crate::platform;
use crate::store::use_store;

#[component]
pub fn LogInForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_store();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_hidden = RwSignal::new(true);

    store.set_validate_mode(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.set_validate_mode(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            return;
        }
        spawn_local(async move {
            match ServerApi.log_in(email, password).await {
                Ok(user) => {
                    store.set_user(Some(user));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Log in failed: {e}");
                    platform::alert(&e.message);
                }
            }
        });
    };

    view! {
        <form class="log-in-form" on:submit=on_submit>
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
                name="password"
                placeholder="Password"
                value=password
                on_input=move |v: String| password.set(v)
                masked=password_hidden
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

            <button type="submit" class="btn btn-primary">"Log in"</button>

            <p class="auth-switch">
                "Don't have an account? "
                <span
                    class="auth-switch-link"
                    role="presentation"
                    on:click=move |_| store.set_auth_mode(Some(AuthMode::SignUp))
                >
                    "Sign up"
                </span>
            </p>
        </form>
    }
}
