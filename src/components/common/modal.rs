use leptos::prelude::*;

/// Overlay hosting `children`; clicking the backdrop or the close button
/// calls `on_close`.
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-wrapper">
            <div class="modal-background" on:click=move |_| on_close.run(())></div>
            <div class="modal-contents">
                <button type="button" class="modal-close-button" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {children()}
            </div>
        </div>
    }
}
