use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{AuthModal, Header};
use crate::pages::*;
use crate::store::provide_store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_store();

    view! {
        <Stylesheet id="leptos" href="/pkg/roomstay.css"/>
        <Title text="Roomstay - Stays and places to host"/>
        <Meta name="description" content="Sign up, and list your room for guests"/>

        <Router>
            <Header/>
            <AuthModal/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/room/register/location") view=RegisterRoomLocationPage/>
                </Routes>
            </main>
        </Router>
    }
}
