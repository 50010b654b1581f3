use leptos::prelude::*;

#[component]
pub fn PasswordWarning(#[prop(into)] is_valid: Signal<bool>, message: &'static str) -> impl IntoView {
    view! {
        <p class="password-warning" class:valid=move || is_valid.get()>
            <span class="password-warning-icon">
                {move || if is_valid.get() { "✓" } else { "✕" }}
            </span>
            {message}
        </p>
    }
}
