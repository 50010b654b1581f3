mod location;
mod sign_up;
pub mod static_data;
mod user;

pub use location::*;
pub use sign_up::*;
pub use user::*;
