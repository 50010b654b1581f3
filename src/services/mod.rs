pub mod auth;
pub mod geocode;
