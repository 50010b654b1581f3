use leptos::prelude::*;
use leptos::task::spawn_local;

use super::RegisterRoomFooter;
use crate::api::{ApiError, LocationApi, ServerApi};
use crate::components::common::{Input, Selector};
use crate::models::static_data::{COUNTRIES, COUNTRY_PLACEHOLDER};
use crate::models::{Coordinates, LocationDraft, LocationInfo, RegisterRoomAction};
use crate::platform;
use crate::store::use_store;

/// Looks up `coords` and hands every resulting update to `dispatch`.
///
/// `set_loading(false)` runs once the lookup settles, whatever its outcome.
/// On failure nothing is dispatched.
pub async fn fill_from_coordinates<A: LocationApi>(
    api: &A,
    coords: Coordinates,
    mut dispatch: impl FnMut(RegisterRoomAction),
    mut set_loading: impl FnMut(bool),
) -> Result<(), ApiError> {
    let result = api
        .location_info(coords)
        .await
        .map(LocationInfo::into_actions)
        .map(|actions| actions.into_iter().for_each(&mut dispatch));
    set_loading(false);
    result
}

/// Text input wired to one field of the location draft.
#[component]
fn DraftInput(
    label: &'static str,
    field: fn(&LocationDraft) -> String,
    action: fn(String) -> RegisterRoomAction,
    #[prop(default = true)] use_validation: bool,
) -> impl IntoView {
    let store = use_store();
    let value = store.room_field(field);
    view! {
        <Input
            label=label
            value=value
            on_input=move |v: String| store.dispatch(action(v))
            is_valid=Signal::derive(move || !value.get().is_empty())
            use_validation=use_validation
            error_message="This field is required."
        />
    }
}

#[component]
pub fn RegisterRoomLocation() -> impl IntoView {
    let store = use_store();
    let loading = RwSignal::new(false);

    let on_click_current_location = move |_: leptos::ev::MouseEvent| {
        loading.set(true);
        platform::current_position(
            move |coords| {
                spawn_local(async move {
                    let result = fill_from_coordinates(
                        &ServerApi,
                        coords,
                        |action| store.dispatch(action),
                        |on| loading.set(on),
                    )
                    .await;
                    if let Err(e) = result {
                        log::error!("Location lookup failed: {e}");
                        platform::alert(&e.message);
                    }
                });
            },
            // `loading` stays set on this path
            move |message| {
                log::error!("Could not get the current position: {message}");
                platform::alert(&message);
            },
        );
    };

    view! {
        <div class="register-room-location">
            <h2>"Where's your place located?"</h2>
            <h3>"Step 4"</h3>
            <p class="register-room-step-info">
                "Guests will only get your exact address once they've booked a reservation."
            </p>
            <div class="register-room-location-button-wrapper">
                <button
                    type="button"
                    class="btn btn-dark-cyan-reverse"
                    on:click=on_click_current_location
                >
                    {move || if loading.get() { "Finding location..." } else { "Use current location" }}
                </button>
            </div>
            <div class="register-room-location-country-selector-wrapper">
                <Selector
                    options=COUNTRIES.iter().map(|c| c.to_string()).collect()
                    placeholder=COUNTRY_PLACEHOLDER
                    value=store.room_field(|d| d.country.clone())
                    on_change=move |v: String| store.dispatch(RegisterRoomAction::SetCountry(v))
                />
            </div>
            <div class="register-room-location-city-district">
                <DraftInput
                    label="City"
                    field=|d| d.city.clone()
                    action=RegisterRoomAction::SetCity
                />
                <DraftInput
                    label="District"
                    field=|d| d.district.clone()
                    action=RegisterRoomAction::SetDistrict
                />
            </div>
            <div class="register-room-location-street-address">
                <DraftInput
                    label="Street address"
                    field=|d| d.street_address.clone()
                    action=RegisterRoomAction::SetStreetAddress
                />
            </div>
            <div class="register-room-location-detail-address">
                <DraftInput
                    label="Apt, suite, etc. (optional)"
                    field=|d| d.detail_address.clone()
                    action=RegisterRoomAction::SetDetailAddress
                    use_validation=false
                />
            </div>
            <div class="register-room-location-postcode">
                <DraftInput
                    label="Postcode"
                    field=|d| d.postcode.clone()
                    action=RegisterRoomAction::SetPostcode
                />
            </div>
            <RegisterRoomFooter prev_href="/room/register/bathroom" next_href="/room/register/geometry"/>
        </div>
    }
}
