use leptos::prelude::*;

use super::{LogInForm, SignUpForm};
use crate::components::common::Modal;
use crate::models::AuthMode;
use crate::store::use_store;

/// Shows the form matching the store's auth mode; closed while it is `None`.
#[component]
pub fn AuthModal() -> impl IntoView {
    let store = use_store();
    let close = Callback::new(move |_: ()| store.set_auth_mode(None));

    move || {
        store.auth_mode.get().map(|mode| {
            let form = match mode {
                AuthMode::SignUp => view! { <SignUpForm on_close=close/> }.into_any(),
                AuthMode::LogIn => view! { <LogInForm on_close=close/> }.into_any(),
            };
            view! { <Modal on_close=close>{form}</Modal> }
        })
    }
}
