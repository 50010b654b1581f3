use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::AuthMode;
use crate::server_fns::{get_current_user, LogOut};
use crate::store::use_store;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let session_user = Resource::new(|| (), |_| get_current_user());
    let logout_action = ServerAction::<LogOut>::new();

    // Pick up a user already logged in on the server
    Effect::new(move |_| {
        if let Some(Ok(user)) = session_user.get() {
            store.set_user(user);
        }
    });

    Effect::new(move |_| {
        if let Some(Ok(_)) = logout_action.value().get() {
            store.set_user(None);
        }
    });

    view! {
        <header class="main-header">
            <div class="header-brand">
                <A href="/">"Roomstay"</A>
            </div>

            <div class="header-links">
                <Suspense fallback=|| ()>
                    {move || {
                        session_user.track();
                        match store.user.get() {
                            Some(user) => view! {
                                <A href="/room/register/location">"Host your home"</A>
                                <img class="header-user-image" src=user.profile_image.clone() alt=""/>
                                <span class="header-user-name">{user.display_name()}</span>
                                <ActionForm action=logout_action attr:class="logout-form">
                                    <button type="submit" class="btn btn-small">"Log out"</button>
                                </ActionForm>
                            }.into_any(),
                            None => view! {
                                <button
                                    type="button"
                                    class="header-sign-up-button"
                                    on:click=move |_| store.set_auth_mode(Some(AuthMode::SignUp))
                                >
                                    "Sign up"
                                </button>
                                <button
                                    type="button"
                                    class="header-login-button"
                                    on:click=move |_| store.set_auth_mode(Some(AuthMode::LogIn))
                                >
                                    "Log in"
                                </button>
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </div>
        </header>
    }
}
