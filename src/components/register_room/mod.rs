mod footer;
mod location;

pub use footer::RegisterRoomFooter;
pub use location::{fill_from_coordinates, RegisterRoomLocation};
