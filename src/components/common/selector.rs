use leptos::prelude::*;

use crate::store::use_store;

/// Drop-down with a disabled placeholder shown while `value` is empty.
#[component]
pub fn Selector(
    options: Vec<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] is_valid: Option<Signal<bool>>,
) -> impl IntoView {
    let store = use_store();
    let invalid =
        move || store.validate_mode.get() && is_valid.map(|v| !v.get()).unwrap_or(false);

    view! {
        <div class="selector-wrapper" class:error=invalid>
            {label.map(|text| view! { <span class="selector-label">{text}</span> })}
            <select
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="" disabled selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|option| {
                        let current = option.clone();
                        let label = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::store::provide_store;

    #[test]
    fn options_carry_their_text_as_value() {
        Owner::new().with(|| {
            provide_store();
            let html = view! {
                <Selector
                    options=vec!["1 - January".to_string(), "2 - February".to_string()]
                    placeholder="Month"
                    value=Signal::derive(String::new)
                    on_change=|_: String| {}
                />
            }
            .to_html();
            assert!(html.contains(r#"value="1 - January""#), "{html}");
            assert!(html.contains(">2 - February<"), "{html}");
            assert!(html.contains(">Month<"), "{html}");
        });
    }
}
