use leptos::prelude::*;

use crate::store::use_store;

/// Text input bound to `value`.
///
/// The error message shows once the store's validation mode is on, the input
/// uses validation and `is_valid` is false.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    /// Shows the value as dots while true.
    #[prop(optional, into)]
    masked: Option<Signal<bool>>,
    #[prop(optional, into)] is_valid: Option<Signal<bool>>,
    #[prop(default = true)] use_validation: bool,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] on_focus: Option<Callback<()>>,
    /// Icon or button rendered at the end of the field.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let store = use_store();

    let invalid = move || {
        use_validation
            && store.validate_mode.get()
            && is_valid.map(|v| !v.get()).unwrap_or(false)
    };
    let kind = move || {
        if masked.map(|m| m.get()).unwrap_or(false) {
            "password"
        } else {
            input_type
        }
    };

    view! {
        <div class="input-wrapper" class:error=invalid>
            {label.map(|text| view! { <span class="input-label">{text}</span> })}
            <input
                type=kind
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| {
                    if let Some(on_focus) = on_focus {
                        on_focus.run(());
                    }
                }
            />
            {children.map(|children| view! { <div class="input-icon-wrapper">{children()}</div> })}
            {move || {
                invalid()
                    .then(|| {
                        view! {
                            <p class="input-error-message">
                                {error_message.clone().unwrap_or_default()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
