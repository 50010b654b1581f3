use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::AuthMode;
use crate::store::use_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Roomstay"</h1>
                <p class="subtitle">"Find a place to stay, or share your own"</p>
                <div class="cta-buttons">
                    <A href="/room/register/location" attr:class="btn btn-primary">"List your place"</A>
                    <Show when=move || store.user.get().is_none()>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| store.set_auth_mode(Some(AuthMode::SignUp))
                        >
                            "Create account"
                        </button>
                    </Show>
                </div>
            </section>
        </div>
    }
}
