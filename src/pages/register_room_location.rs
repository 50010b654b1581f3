use leptos::prelude::*;

use crate::components::register_room::RegisterRoomLocation;

#[component]
pub fn RegisterRoomLocationPage() -> impl IntoView {
    view! {
        <div class="register-room-page">
            <RegisterRoomLocation/>
        </div>
    }
}
