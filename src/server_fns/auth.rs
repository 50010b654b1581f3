use chrono::NaiveDate;
use leptos::prelude::*;

use crate::models::User;

#[cfg(feature = "ssr")]
const SESSION_USER_KEY: &str = "user";

#[server]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(session.get(SESSION_USER_KEY).await.ok().flatten())
}

#[server]
pub async fn sign_up(
    email: String,
    lastname: String,
    firstname: String,
    password: String,
    birthday: NaiveDate,
) -> Result<User, ServerFnError> {
    use axum::Extension;
    use crate::{models::SignUpBody, services::auth, state::AppState};
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let body = SignUpBody {
        email,
        lastname,
        firstname,
        password,
        birthday,
    };
    let user = auth::register(&state.db, &body)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    log::info!("Registered user {}", user.id);

    session.insert(SESSION_USER_KEY, &user).await?;
    Ok(user)
}

#[server]
pub async fn log_in(email: String, password: String) -> Result<User, ServerFnError> {
    use axum::Extension;
    use crate::{services::auth, state::AppState};
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::login(&state.db, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session.insert(SESSION_USER_KEY, &user).await?;
    Ok(user)
}

#[server]
pub async fn log_out() -> Result<(), ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session.delete().await?;
    Ok(())
}
