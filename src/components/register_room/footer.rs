use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegisterRoomFooter(prev_href: &'static str, next_href: &'static str) -> impl IntoView {
    view! {
        <footer class="register-room-footer">
            <A href=prev_href attr:class="register-room-footer-back">"Back"</A>
            <A href=next_href attr:class="btn btn-primary">"Next"</A>
        </footer>
    }
}
