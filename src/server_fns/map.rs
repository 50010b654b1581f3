use leptos::prelude::*;

use crate::models::LocationInfo;

/// Resolve coordinates to a structured address
#[server]
pub async fn get_location_info(
    latitude: f64,
    longitude: f64,
) -> Result<LocationInfo, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::{models::Coordinates, state::AppState};

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    state
        .geocoder
        .reverse(Coordinates {
            latitude,
            longitude,
        })
        .await
        .map_err(|e| {
            log::warn!("Reverse geocoding {latitude},{longitude} failed: {e}");
            ServerFnError::new(e.to_string())
        })
}
