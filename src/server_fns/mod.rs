mod auth;
mod map;

pub use auth::*;
pub use map::*;
