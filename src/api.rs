//! Client side of the remote calls made by the forms.
//!
//! Every call returns `Result<T, ApiError>`; [`ServerApi`] forwards to the
//! server functions and tests plug in their own implementations.

use leptos::prelude::ServerFnError;

use crate::models::{Coordinates, LocationInfo, SignUpBody, User};
use crate::server_fns;

/// Failure of a remote call, carrying the message to show the user.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ServerFnError> for ApiError {
    fn from(e: ServerFnError) -> Self {
        match e {
            ServerFnError::ServerError(message) => Self::new(message),
            other => Self::new(other.to_string()),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn sign_up(&self, body: SignUpBody) -> Result<User, ApiError>;
    async fn log_in(&self, email: String, password: String) -> Result<User, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait LocationApi {
    async fn location_info(&self, coords: Coordinates) -> Result<LocationInfo, ApiError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ServerApi;

impl AuthApi for ServerApi {
    async fn sign_up(&self, body: SignUpBody) -> Result<User, ApiError> {
        server_fns::sign_up(
            body.email,
            body.lastname,
            body.firstname,
            body.password,
            body.birthday,
        )
        .await
        .map_err(ApiError::from)
    }

    async fn log_in(&self, email: String, password: String) -> Result<User, ApiError> {
        server_fns::log_in(email, password)
            .await
            .map_err(ApiError::from)
    }
}

impl LocationApi for ServerApi {
    async fn location_info(&self, coords: Coordinates) -> Result<LocationInfo, ApiError> {
        server_fns::get_location_info(coords.latitude, coords.longitude)
            .await
            .map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_kept_verbatim() {
        let err = ApiError::from(ServerFnError::new("Email already registered"));
        assert_eq!(err.message, "Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
    }
}
