pub mod auth;
pub mod common;
mod header;
pub mod register_room;

pub use auth::AuthModal;
pub use header::Header;
